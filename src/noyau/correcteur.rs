// src/noyau/correcteur.rs
//
// Correcteur heuristique : une expression en échec -> UNE proposition complète.
//
// Règles, dans l’ordre; la première qui MODIFIE la chaîne gagne
// (une seule règle par appel, jamais de réparation en boucle) :
//   1. opérateurs identiques répétés       5++3   => 5+3
//   2. groupe vide (avec son opérateur)    6×()   => 6      (tout vide => 0)
//   3. `%` orphelin avant un chiffre       ÷%2    => ÷2%
//   4. opérateurs / `%` en fin             5+     => 5      (tout vide => 0)
//   5. parenthèses manquantes              (9-2   => (9-2)

/// Proposition de correction (jamais appliquée automatiquement).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Expression de remplacement complète (pas un diff).
    pub fix: String,
    pub message: String,
}

/// Message quand aucune règle ne s’applique.
pub const MESSAGE_SANS_CORRECTION: &str = "L’expression contient une erreur.";

const GLYPHES_OPERATEURS: [char; 6] = ['+', '-', '×', '÷', '*', '/'];

fn est_operateur(c: char) -> bool {
    GLYPHES_OPERATEURS.contains(&c)
}

/// API publique : première règle qui change l’expression, sinon None.
pub fn proposer_correction(expr: &str) -> Option<Suggestion> {
    let regles: [(fn(&str) -> String, &str); 5] = [
        (fusionner_operateurs_repetes, "Opérateur en double supprimé."),
        (retirer_groupes_vides, "Parenthèses vides supprimées."),
        (deplacer_pourcent_orphelin, "Signe % replacé après le nombre."),
        (retirer_operateurs_finaux, "Opérateur final supprimé."),
        (fermer_parentheses, "Parenthèse fermante ajoutée."),
    ];

    for (regle, message) in regles {
        let fix = regle(expr);
        if fix != expr {
            log::debug!("correction {expr:?} => {fix:?}");
            return Some(Suggestion {
                fix,
                message: message.to_string(),
            });
        }
    }

    None
}

/// Règle 1 : une suite d’opérateurs IDENTIQUES devient un seul.
/// (`5+-3` n’est pas touché : opérateurs différents.)
fn fusionner_operateurs_repetes(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    for c in expr.chars() {
        if est_operateur(c) && out.ends_with(c) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Règle 2 : retire chaque `()` et, s’il y en a un, l’opérateur qui le précède.
fn retirer_groupes_vides(expr: &str) -> String {
    if !expr.contains("()") {
        return expr.to_string();
    }

    let chars: Vec<char> = expr.chars().collect();
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '(' && chars.get(i + 1) == Some(&')') {
            // l’opérateur collé avant appartient au groupe supprimé
            if out.last().is_some_and(|&c| est_operateur(c)) {
                out.pop();
            }
            i += 2;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }

    let s: String = out.into_iter().collect();
    if s.is_empty() {
        "0".to_string()
    } else {
        s
    }
}

/// Règle 3 : `%` non précédé d’un chiffre ou d’un point, et suivi d’un chiffre,
/// passe derrière ce chiffre.
fn deplacer_pourcent_orphelin(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let orphelin = c == '%'
            && i.checked_sub(1)
                .map(|p| !(chars[p].is_ascii_digit() || chars[p] == '.'))
                .unwrap_or(true);

        if orphelin {
            if let Some(&d) = chars.get(i + 1).filter(|d| d.is_ascii_digit()) {
                out.push(d);
                out.push('%');
                i += 2;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Règle 4 : retire opérateurs et `%` en fin d’expression.
fn retirer_operateurs_finaux(expr: &str) -> String {
    let t = expr.trim();
    let nettoye = t.trim_end_matches(|c: char| est_operateur(c) || c == '%');

    if nettoye == t {
        return expr.to_string();
    }
    if nettoye.is_empty() {
        return "0".to_string();
    }
    nettoye.to_string()
}

/// Règle 5 : ajoute autant de `)` que de `(` non fermées (compte global).
fn fermer_parentheses(expr: &str) -> String {
    let ouvrantes = expr.chars().filter(|&c| c == '(').count();
    let fermantes = expr.chars().filter(|&c| c == ')').count();

    let mut out = expr.to_string();
    if ouvrantes > fermantes {
        out.push_str(&")".repeat(ouvrantes - fermantes));
    }
    out
}
