//! Noyau : erreurs typées
//!
//! Une variante par famille d’erreur. La variante EST le type d’erreur;
//! son `Display` n’est qu’un message d’affichage (jamais comparé).

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Plus d’un point dans un même nombre (ex: 1.2.3).
    #[error("point décimal invalide")]
    Decimal,

    /// Caractère hors alphabet (un `%` mal placé finit ici aussi).
    #[error("symbole inconnu : '{0}'")]
    SymboleInconnu(char),

    /// `(` jamais fermée ou `)` sans ouvrante.
    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    /// Groupe vide, opérandes manquants, résultat non fini.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Diviseur exactement égal à 0.
    #[error("division par zéro")]
    DivisionParZero,
}

impl ErreurCalcul {
    /// Vrai si l’erreur vient d’un `%` que la normalisation n’a pas absorbé.
    pub fn est_pourcentage_mal_place(&self) -> bool {
        matches!(self, ErreurCalcul::SymboleInconnu('%'))
    }
}
