//! Noyau calculatrice de poche
//!
//! Organisation interne :
//! - erreur.rs       : erreurs typées (une variante par famille)
//! - pourcentage.rs  : nombre% / )% => division par 100
//! - jetons.rs       : glyphes canoniques + tokenisation (moins unaire)
//! - rpn.rs          : shunting-yard + réduction de la RPN
//! - eval.rs         : pipeline complet
//! - format.rs       : résultat affiché (10 décimales max)
//! - editeur.rs      : machine d’état de saisie
//! - correcteur.rs   : suggestion de correction après échec
//! - localisation.rs : zone fautive à surligner + rapport d’erreur

pub mod correcteur;
pub mod editeur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod localisation;
pub mod pourcentage;
pub mod rpn;

#[cfg(test)]
mod tests_editeur;


// API publique minimale
pub use correcteur::{proposer_correction, Suggestion, MESSAGE_SANS_CORRECTION};
pub use editeur::{Calcul, Editeur, Glyphe};
pub use erreur::ErreurCalcul;
pub use eval::evaluer;
pub use format::formater_resultat;
pub use jetons::Operateur;
pub use localisation::{localiser_erreur, RapportErreur, Surlignage};
pub use pourcentage::normaliser_pourcentage;
