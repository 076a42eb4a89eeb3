//! Tests de scénario : machine d’état de saisie, de la touche au "=".
//!
//! Chaque test rejoue une suite de touches comme au clavier de la calculatrice
//! et vérifie le tampon (jamais vide) et le diagnostic.

use super::editeur::{Editeur, Glyphe};
use super::erreur::ErreurCalcul;
use super::localisation::MESSAGE_POURCENT;

/// Tape une suite de glyphes simples (chiffres, point, opérateurs, %).
fn taper(ed: &mut Editeur, touches: &str) {
    for c in touches.chars() {
        let g = Glyphe::depuis_str(&c.to_string())
            .unwrap_or_else(|| panic!("touche non gérée: {c:?}"));
        ed.ajouter(g);
    }
}

fn editeur(touches: &str) -> Editeur {
    let mut ed = Editeur::new();
    taper(&mut ed, touches);
    ed
}

fn tampon_apres(touches: &str) -> String {
    editeur(touches).tampon().to_string()
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn operateurs_consecutifs_remplaces() {
    assert_eq!(tampon_apres("++"), "0+");
    assert_eq!(tampon_apres("5++"), "5+");
    assert_eq!(tampon_apres("5+×"), "5×");
    assert_eq!(tampon_apres("5×-÷"), "5÷");
}

#[test]
fn operateur_refuse_apres_ouvrante() {
    let mut ed = editeur("5");
    ed.ouvrir_ou_fermer_parenthese();
    taper(&mut ed, "+");
    assert_eq!(ed.tampon(), "5×(");
}

/* ------------------------ Segment numérique ------------------------ */

#[test]
fn zero_de_tete() {
    assert_eq!(tampon_apres("7"), "7");
    assert_eq!(tampon_apres("0007"), "7");
    assert_eq!(tampon_apres("5+03"), "5+3");
    assert_eq!(tampon_apres("0.05"), "0.05");
}

#[test]
fn zeros_multiples() {
    let mut ed = Editeur::new();
    ed.ajouter(Glyphe::TripleZero);
    ed.ajouter(Glyphe::DoubleZero);
    assert_eq!(ed.tampon(), "0");

    taper(&mut ed, "5");
    ed.ajouter(Glyphe::TripleZero);
    assert_eq!(ed.tampon(), "5000");

    taper(&mut ed, "+");
    ed.ajouter(Glyphe::DoubleZero);
    assert_eq!(ed.tampon(), "5000+0");
}

#[test]
fn point_decimal() {
    assert_eq!(tampon_apres("."), "0.");
    assert_eq!(tampon_apres("1.2."), "1.2");
    assert_eq!(tampon_apres("1.2+."), "1.2+0.");
}

/* ------------------------ Pourcentage ------------------------ */

#[test]
fn pourcent_refuse() {
    assert_eq!(tampon_apres("%"), "0");
    assert_eq!(tampon_apres("5+%"), "5+");
    assert_eq!(tampon_apres("5%%"), "5%");
    assert_eq!(tampon_apres("5+0%"), "5+0");
}

#[test]
fn pourcent_accepte() {
    assert_eq!(tampon_apres("50%"), "50%");
    assert_eq!(tampon_apres("0.5%"), "0.5%");

    let mut ed = Editeur::new();
    ed.ouvrir_ou_fermer_parenthese();
    taper(&mut ed, "2+3");
    ed.ouvrir_ou_fermer_parenthese();
    taper(&mut ed, "%");
    assert_eq!(ed.tampon(), "(2+3)%");
    let c = ed.calculer().unwrap();
    assert_eq!(c.resultat, "0.05");
}

#[test]
fn pourcent_sur_segment_negatif() {
    let mut ed = editeur("5");
    ed.basculer_signe();
    taper(&mut ed, "%");
    assert_eq!(ed.tampon(), "-5%");
    assert_eq!(ed.calculer().unwrap().resultat, "-0.05");
}

#[test]
fn multiplication_implicite_apres_pourcent() {
    assert_eq!(tampon_apres("5%3"), "5%×3");
    let mut ed = editeur("50%4");
    assert_eq!(ed.calculer().unwrap().resultat, "2");
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn parenthese_implicite_apres_nombre() {
    let mut ed = editeur("5");
    ed.ouvrir_ou_fermer_parenthese();
    assert_eq!(ed.tampon(), "5×(");
}

#[test]
fn parenthese_ferme_le_groupe() {
    let mut ed = Editeur::new();
    ed.ouvrir_ou_fermer_parenthese();
    assert_eq!(ed.tampon(), "(");
    taper(&mut ed, "5+");
    ed.ouvrir_ou_fermer_parenthese();
    // finit par un opérateur : on ouvre
    assert_eq!(ed.tampon(), "(5+(");
    taper(&mut ed, "1");
    ed.ouvrir_ou_fermer_parenthese();
    ed.ouvrir_ou_fermer_parenthese();
    assert_eq!(ed.tampon(), "(5+(1))");
    assert_eq!(ed.calculer().unwrap().resultat, "6");
}

#[test]
fn au_plus_deux_ouvrantes_consecutives() {
    let mut ed = Editeur::new();
    for _ in 0..5 {
        ed.ouvrir_ou_fermer_parenthese();
    }
    assert_eq!(ed.tampon(), "((");
}

#[test]
fn chiffre_apres_fermante() {
    let mut ed = Editeur::new();
    ed.ouvrir_ou_fermer_parenthese();
    taper(&mut ed, "2");
    ed.ouvrir_ou_fermer_parenthese();
    taper(&mut ed, "3");
    assert_eq!(ed.tampon(), "(2)×3");
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn effacer_termine_a_zero() {
    let mut ed = Editeur::new();
    ed.charger_expression("12×(3+4)÷5%");
    for _ in 0..30 {
        ed.effacer();
        assert!(!ed.tampon().is_empty());
    }
    assert_eq!(ed.tampon(), "0");
}

#[test]
fn effacer_glyphe_multi_octets() {
    let mut ed = editeur("5×");
    ed.effacer();
    assert_eq!(ed.tampon(), "5");
}

#[test]
fn effacer_annule_resultat_et_erreur() {
    let mut ed = editeur("12+3");
    ed.calculer();
    assert!(ed.est_execute());
    ed.effacer();
    assert!(!ed.est_execute());
    assert_eq!(ed.tampon(), "1");

    ed.charger_expression("5÷0");
    ed.calculer();
    assert!(ed.erreur().is_some());
    ed.effacer();
    assert!(ed.erreur().is_none());
    assert_eq!(ed.tampon(), "5÷");
}

/* ------------------------ Signe ------------------------ */

#[test]
fn signe_sur_nombre_nu() {
    let mut ed = editeur("5");
    ed.basculer_signe();
    assert_eq!(ed.tampon(), "-5");
    ed.basculer_signe();
    assert_eq!(ed.tampon(), "5");
}

#[test]
fn signe_refuse_sur_expression() {
    let mut ed = editeur("5+3");
    ed.basculer_signe();
    assert_eq!(ed.tampon(), "5+3");

    let mut ed = Editeur::new();
    ed.basculer_signe();
    assert_eq!(ed.tampon(), "0");
}

#[test]
fn signe_sur_resultat() {
    let mut ed = editeur("5+3");
    ed.calculer();
    ed.basculer_signe();
    assert_eq!(ed.tampon(), "-8");
    assert!(!ed.est_execute());
}

/* ------------------------ Résultat (execute) ------------------------ */

#[test]
fn operateur_prolonge_le_resultat() {
    let mut ed = editeur("2+3");
    let c = ed.calculer().unwrap();
    assert_eq!(c.expression, "2+3");
    assert_eq!(c.resultat, "5");
    assert_eq!(ed.derniere_expression(), Some("2+3"));

    taper(&mut ed, "×");
    assert_eq!(ed.tampon(), "5×");
    assert!(!ed.est_execute());
    assert_eq!(ed.derniere_expression(), None);
}

#[test]
fn chiffre_repart_de_zero() {
    let mut ed = editeur("2+3");
    ed.calculer();
    taper(&mut ed, "7");
    assert_eq!(ed.tampon(), "7");

    let mut ed = editeur("2+3");
    ed.calculer();
    taper(&mut ed, ".");
    assert_eq!(ed.tampon(), "0.");

    let mut ed = editeur("2+3");
    ed.calculer();
    ed.ouvrir_ou_fermer_parenthese();
    assert_eq!(ed.tampon(), "(");
}

#[test]
fn calculer_sans_effet() {
    let mut ed = Editeur::new();
    assert_eq!(ed.calculer(), None);
    assert!(ed.erreur().is_none());

    let mut ed = editeur("1+1");
    assert!(ed.calculer().is_some());
    // déjà un résultat
    assert_eq!(ed.calculer(), None);
    assert_eq!(ed.tampon(), "2");
}

#[test]
fn resultat_dix_decimales() {
    let mut ed = editeur("2÷3");
    assert_eq!(ed.calculer().unwrap().resultat, "0.6666666667");
}

/* ------------------------ Ans ------------------------ */

#[test]
fn derniere_reponse() {
    let mut ed = editeur("2+3");
    ed.calculer();
    assert_eq!(ed.derniere_reponse(), "5");

    taper(&mut ed, "2");
    ed.ajouter_derniere_reponse();
    assert_eq!(ed.tampon(), "2×5");
    assert_eq!(ed.calculer().unwrap().resultat, "10");

    taper(&mut ed, "+");
    ed.ajouter_derniere_reponse();
    assert_eq!(ed.tampon(), "10+10");
}

#[test]
fn derniere_reponse_remplace_resultat_et_zero() {
    let mut ed = editeur("4×4");
    ed.calculer();
    ed.ajouter_derniere_reponse();
    assert_eq!(ed.tampon(), "16");

    ed.effacer_tout();
    assert_eq!(ed.tampon(), "0");
    ed.ajouter_derniere_reponse();
    assert_eq!(ed.tampon(), "16");
}

/* ------------------------ Erreurs + corrections ------------------------ */

#[test]
fn echec_laisse_le_tampon() {
    let mut ed = editeur("5÷0");
    assert_eq!(ed.calculer(), None);
    assert_eq!(ed.tampon(), "5÷0");
    assert!(!ed.est_execute());

    let r = ed.erreur().unwrap();
    assert_eq!(r.erreur, ErreurCalcul::DivisionParZero);
    assert_eq!(r.surlignage.as_ref().unwrap().surligne, "÷0");
    // aucune règle ne répare une division par zéro
    assert!(ed.suggestion().is_none());
}

#[test]
fn saisie_apres_erreur_repart_de_zero() {
    let mut ed = editeur("5÷0");
    ed.calculer();
    taper(&mut ed, "7");
    assert_eq!(ed.tampon(), "7");
    assert!(ed.erreur().is_none());

    let mut ed = editeur("5÷0");
    ed.calculer();
    taper(&mut ed, "+");
    assert_eq!(ed.tampon(), "0");
}

#[test]
fn correction_operateur_double() {
    let mut ed = Editeur::new();
    ed.charger_expression("5++3");
    ed.calculer();
    assert_eq!(ed.erreur().unwrap().erreur, ErreurCalcul::ExpressionInvalide);
    assert_eq!(ed.suggestion().unwrap().fix, "5+3");

    assert!(ed.appliquer_correction());
    assert_eq!(ed.tampon(), "5+3");
    assert!(ed.erreur().is_none());
    assert!(ed.suggestion().is_none());
    assert_eq!(ed.calculer().unwrap().resultat, "8");
}

#[test]
fn correction_parenthese_ouverte() {
    let mut ed = Editeur::new();
    ed.charger_expression("(5");
    ed.calculer();
    let r = ed.erreur().unwrap();
    assert_eq!(r.erreur, ErreurCalcul::ParenthesesDesequilibrees);
    assert_eq!(r.surlignage.as_ref().unwrap().surligne, "(");

    ed.appliquer_correction();
    assert_eq!(ed.tampon(), "(5)");
    assert_eq!(ed.calculer().unwrap().resultat, "5");
}

#[test]
fn correction_groupe_vide() {
    let mut ed = Editeur::new();
    ed.charger_expression("6×()");
    ed.calculer();
    assert_eq!(ed.suggestion().unwrap().fix, "6");
    ed.appliquer_correction();
    assert_eq!(ed.calculer().unwrap().resultat, "6");
}

#[test]
fn correction_pourcent_mal_place() {
    let mut ed = Editeur::new();
    ed.charger_expression("%5");
    ed.calculer();
    let r = ed.erreur().unwrap();
    assert_eq!(r.message, MESSAGE_POURCENT);
    assert_eq!(r.surlignage.as_ref().unwrap().surligne, "%");

    ed.appliquer_correction();
    assert_eq!(ed.tampon(), "5%");
    assert_eq!(ed.calculer().unwrap().resultat, "0.05");
}

#[test]
fn correction_absente() {
    let mut ed = Editeur::new();
    assert!(!ed.appliquer_correction());
    assert_eq!(ed.tampon(), "0");
}

/* ------------------------ Chargement + aperçu ------------------------ */

#[test]
fn charger_expression_vide() {
    let mut ed = editeur("5");
    ed.charger_expression("");
    assert_eq!(ed.tampon(), "0");
    assert!(!ed.est_execute());
}

#[test]
fn apercu_sans_modifier() {
    let ed = editeur("2+3×4");
    assert_eq!(ed.apercu().as_deref(), Some("14"));
    assert_eq!(ed.tampon(), "2+3×4");

    assert_eq!(editeur("5").apercu(), None);
    assert_eq!(editeur("5÷0").apercu(), None);
    assert_eq!(editeur("5+").apercu(), None);
}
