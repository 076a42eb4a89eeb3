// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

/// Opérateur binaire (forme canonique).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Glyphe d’affichage (celui du tampon éditable).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Accepte les glyphes d’affichage ET canoniques.
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' | '*' => Some(Operateur::Fois),
            '÷' | '/' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    /// Moins unaire (précédence la plus haute).
    Neg,
    LPar,
    RPar,
}

/// Glyphes d’affichage -> forme canonique.
/// - × => *, ÷ => /
/// - `+` unaire en tête ou juste après `(` : retiré
pub fn substituer_glyphes(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());

    for c in expr.chars() {
        let c = match c {
            '×' => '*',
            '÷' => '/',
            autre => autre,
        };

        if c == '+' && (out.is_empty() || out.ends_with('(')) {
            continue;
        }
        out.push(c);
    }

    out
}

/// Tokenize une expression déjà normalisée (pourcentage) et canonique (* /).
///
/// Règles:
/// - suite [0-9.] => un seul Num ; deux points ou plus => Decimal
/// - `-` en tête, ou après un opérateur ou `(` => Neg ; sinon soustraction
/// - `(` suivie directement de `)` => ExpressionInvalide (groupe vide)
/// - tout autre caractère => SymboleInconnu
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let run: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&run)?));
            continue;
        }

        match c {
            '(' => {
                if chars.get(i + 1) == Some(&')') {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }
                out.push(Tok::LPar);
            }
            ')' => out.push(Tok::RPar),
            '-' if est_position_unaire(&chars, i) => out.push(Tok::Neg),
            '+' | '-' | '*' | '/' => {
                // depuis_char couvre ces quatre glyphes
                let op = Operateur::depuis_char(c).ok_or(ErreurCalcul::SymboleInconnu(c))?;
                out.push(Tok::Op(op));
            }
            autre => return Err(ErreurCalcul::SymboleInconnu(autre)),
        }
        i += 1;
    }

    log::trace!("jetons({s:?}) = {}", format_tokens(&out));
    Ok(out)
}

fn lire_nombre(run: &str) -> Result<f64, ErreurCalcul> {
    if run.chars().filter(|&c| c == '.').count() > 1 {
        return Err(ErreurCalcul::Decimal);
    }
    // "5." et ".5" sont acceptés par f64 ; "." seul ne l’est pas
    run.parse::<f64>()
        .map_err(|_| ErreurCalcul::ExpressionInvalide)
}

fn est_position_unaire(chars: &[char], i: usize) -> bool {
    match i.checked_sub(1).map(|p| chars[p]) {
        None => true,
        Some(prev) => matches!(prev, '+' | '-' | '*' | '/' | '('),
    }
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(Operateur::Plus) => "+".to_string(),
            Tok::Op(Operateur::Moins) => "-".to_string(),
            Tok::Op(Operateur::Fois) => "*".to_string(),
            Tok::Op(Operateur::Divise) => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
