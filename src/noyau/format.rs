// src/noyau/format.rs
//
// Affichage du résultat : format figé, consommé tel quel par l’historique.
// - au plus CHIFFRES_FRACTION_MAX décimales (arrondi), zéros finaux retirés
// - pas de séparateur de milliers, pas d’exposant, point décimal '.'
// - "-0" => "0"

/// Nombre maximal de décimales affichées.
pub const CHIFFRES_FRACTION_MAX: usize = 10;

/// Formate une valeur finie pour le tampon / l’historique.
pub fn formater_resultat(v: f64) -> String {
    let mut s = format!("{v:.prec$}", prec = CHIFFRES_FRACTION_MAX);

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    if s == "-0" {
        s = "0".to_string();
    }
    s
}
