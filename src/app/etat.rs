//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir l’éditeur de la session et traduire chaque touche du pavé
//! (ou du clavier) en UNE transition de l’éditeur.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `noyau::Editeur`.
//! - Une touche = une transition, appliquée dans l’ordre reçu.
//! - Le dernier calcul réussi est exposé pour un éventuel historique externe.

use crate::noyau::{Calcul, Editeur, Glyphe, Operateur};

/// Touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Glyphe(Glyphe),
    Parentheses,
    Signe,
    Reponse,
    Effacer,
    ToutEffacer,
    Egal,
}

impl Touche {
    /// Étiquette affichée sur le bouton.
    pub fn etiquette(self) -> String {
        match self {
            Touche::Glyphe(g) => g.texte(),
            Touche::Parentheses => "( )".to_string(),
            Touche::Signe => "±".to_string(),
            Touche::Reponse => "Ans".to_string(),
            Touche::Effacer => "←".to_string(),
            Touche::ToutEffacer => "AC".to_string(),
            Touche::Egal => "=".to_string(),
        }
    }

    /// Saisie clavier (texte tapé) -> touche. `x` et `*` valent ×, `/` vaut ÷.
    pub fn depuis_clavier(c: char) -> Option<Touche> {
        match c {
            '(' | ')' => Some(Touche::Parentheses),
            '=' => Some(Touche::Egal),
            'x' | 'X' => Some(Touche::Glyphe(Glyphe::Op(Operateur::Fois))),
            _ => Glyphe::depuis_str(&c.to_string()).map(Touche::Glyphe),
        }
    }
}

/// Disposition du pavé : 5 colonnes, `=` en dernier (double largeur).
pub const PAVE: [[Touche; 5]; 4] = [
    [
        Touche::ToutEffacer,
        Touche::Effacer,
        Touche::Reponse,
        Touche::Glyphe(Glyphe::Pourcent),
        Touche::Glyphe(Glyphe::Op(Operateur::Divise)),
    ],
    [
        Touche::Glyphe(Glyphe::Chiffre(7)),
        Touche::Glyphe(Glyphe::Chiffre(8)),
        Touche::Glyphe(Glyphe::Chiffre(9)),
        Touche::Signe,
        Touche::Glyphe(Glyphe::Op(Operateur::Fois)),
    ],
    [
        Touche::Glyphe(Glyphe::Chiffre(4)),
        Touche::Glyphe(Glyphe::Chiffre(5)),
        Touche::Glyphe(Glyphe::Chiffre(6)),
        Touche::Parentheses,
        Touche::Glyphe(Glyphe::Op(Operateur::Moins)),
    ],
    [
        Touche::Glyphe(Glyphe::Chiffre(1)),
        Touche::Glyphe(Glyphe::Chiffre(2)),
        Touche::Glyphe(Glyphe::Chiffre(3)),
        Touche::Glyphe(Glyphe::Point),
        Touche::Glyphe(Glyphe::Op(Operateur::Plus)),
    ],
];

/// Dernière rangée : 0, 00, 000 puis `=`.
pub const PAVE_ZEROS: [Touche; 3] = [
    Touche::Glyphe(Glyphe::Chiffre(0)),
    Touche::Glyphe(Glyphe::DoubleZero),
    Touche::Glyphe(Glyphe::TripleZero),
];

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub editeur: Editeur,

    /// Dernier calcul réussi de la session (pour l’historique externe).
    pub dernier_calcul: Option<Calcul>,
}

impl AppCalc {
    /// Applique une touche à l’éditeur.
    pub fn appuyer(&mut self, touche: Touche) {
        log::debug!("touche {touche:?}");

        match touche {
            Touche::Glyphe(g) => self.editeur.ajouter(g),
            Touche::Parentheses => self.editeur.ouvrir_ou_fermer_parenthese(),
            Touche::Signe => self.editeur.basculer_signe(),
            Touche::Reponse => self.editeur.ajouter_derniere_reponse(),
            Touche::Effacer => self.editeur.effacer(),
            Touche::ToutEffacer => self.editeur.effacer_tout(),
            Touche::Egal => {
                if let Some(c) = self.editeur.calculer() {
                    self.dernier_calcul = Some(c);
                }
            }
        }
    }

    /// Bouton « Appliquer » de la suggestion.
    pub fn appliquer_correction(&mut self) {
        self.editeur.appliquer_correction();
    }
}
