//! Calculatrice de poche
//!
//! - `noyau` : évaluation, machine de saisie, correcteur, localisation d’erreur
//! - `app`   : UI eframe (natif + web) branchée sur le noyau

pub mod app;
pub mod noyau;
