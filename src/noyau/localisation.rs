// src/noyau/localisation.rs
//
// Localisation d’erreur : (erreur typée, expression) -> zone à surligner.
// Purement indicatif : n’influence jamais l’évaluation.
//
// Cas reconnus:
// - `%` mal placé (non précédé d’un chiffre ou d’un point)
// - `(` finale jamais refermée
// - `÷0` ou `/0` littéral (pas `÷0.5`)
// - groupe vide `()`

use super::erreur::ErreurCalcul;

/// Message dédié au `%` mal placé (plus parlant que « symbole inconnu »).
pub const MESSAGE_POURCENT: &str = "format de pourcentage invalide";

/// Rapport affiché près de l’écran après un échec.
#[derive(Clone, Debug, PartialEq)]
pub struct RapportErreur {
    pub erreur: ErreurCalcul,
    pub message: String,
    pub surlignage: Option<Surlignage>,
}

impl RapportErreur {
    pub fn construire(expr: &str, erreur: ErreurCalcul) -> RapportErreur {
        let message = if erreur.est_pourcentage_mal_place() {
            MESSAGE_POURCENT.to_string()
        } else {
            erreur.to_string()
        };

        RapportErreur {
            erreur,
            message,
            surlignage: localiser_erreur(expr, &erreur),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surlignage {
    pub avant: String,
    pub surligne: String,
    pub apres: String,
}

impl Surlignage {
    /// Découpe `expr` autour de [debut, debut + longueur) (indices en octets).
    fn autour(expr: &str, debut: usize, longueur: usize) -> Surlignage {
        Surlignage {
            avant: expr[..debut].to_string(),
            surligne: expr[debut..debut + longueur].to_string(),
            apres: expr[debut + longueur..].to_string(),
        }
    }
}

/// API publique : None si le type d’erreur n’est pas localisable.
pub fn localiser_erreur(expr: &str, erreur: &ErreurCalcul) -> Option<Surlignage> {
    match erreur {
        ErreurCalcul::SymboleInconnu('%') => localiser_pourcent(expr),
        ErreurCalcul::ParenthesesDesequilibrees => localiser_parenthese_ouverte(expr),
        ErreurCalcul::DivisionParZero => localiser_division_zero(expr),
        ErreurCalcul::ExpressionInvalide => localiser_groupe_vide(expr),
        _ => None,
    }
}

fn localiser_pourcent(expr: &str) -> Option<Surlignage> {
    let mut prev: Option<char> = None;
    for (i, c) in expr.char_indices() {
        let orphelin = prev.map_or(true, |p| !(p.is_ascii_digit() || p == '.'));
        if c == '%' && orphelin {
            return Some(Surlignage::autour(expr, i, c.len_utf8()));
        }
        prev = Some(c);
    }
    None
}

/// Seulement le cas « `(` en trop » : la dernière `(` ne doit jamais se refermer.
fn localiser_parenthese_ouverte(expr: &str) -> Option<Surlignage> {
    if solde_parentheses(expr) <= 0 {
        return None;
    }

    let debut = expr.rfind('(')?;
    if solde_parentheses(&expr[debut..]) > 0 {
        return Some(Surlignage::autour(expr, debut, 1));
    }
    None
}

fn solde_parentheses(s: &str) -> i64 {
    s.chars().fold(0, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    })
}

/// Glyphe d’affichage `÷` ou canonique `/` (chargé via `charger_expression`).
fn localiser_division_zero(expr: &str) -> Option<Surlignage> {
    expr.char_indices()
        .filter(|&(_, c)| c == '÷' || c == '/')
        .find_map(|(i, c)| {
            let reste = &expr[i + c.len_utf8()..];
            let zero_nu = reste.starts_with('0') && !reste[1..].starts_with('.');
            zero_nu.then(|| Surlignage::autour(expr, i, c.len_utf8() + 1))
        })
}

fn localiser_groupe_vide(expr: &str) -> Option<Surlignage> {
    expr.find("()").map(|i| Surlignage::autour(expr, i, 2))
}
