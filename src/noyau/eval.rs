//! Noyau : évaluation (pipeline réel)
//!
//! pourcentage -> glyphes canoniques -> jetons -> RPN -> valeur -> finitude
//!
//! Toute erreur remonte en valeur (`ErreurCalcul`), jamais en panique.

use super::erreur::ErreurCalcul;
use super::jetons::{substituer_glyphes, tokenize};
use super::pourcentage::normaliser_pourcentage;
use super::rpn::{calculer_rpn, to_rpn};

/// API publique : évalue une expression du tampon (glyphes d’affichage acceptés).
pub fn evaluer(expr: &str) -> Result<f64, ErreurCalcul> {
    let normalisee = normaliser_pourcentage(expr);
    let canonique = substituer_glyphes(&normalisee);

    let jetons = tokenize(&canonique)?;
    let rpn = to_rpn(&jetons)?;
    let v = calculer_rpn(&rpn)?;

    // NaN / ±inf (débordement) : pas un résultat affichable
    if !v.is_finite() {
        return Err(ErreurCalcul::ExpressionInvalide);
    }
    Ok(v)
}
