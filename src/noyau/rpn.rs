// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis réduire la RPN avec une pile de valeurs
//
// Règles:
// - précédence : + - = 1 ; * / = 2 ; Neg = 3
// - binaires ET Neg : on dépile tant que top >= tok (associatifs à gauche)
// - Neg dépile un opérande ; un binaire en dépile deux (le 2e dépilé est à gauche)
// - conséquence : `--5` donne `neg 5 neg`, rejeté à l’évaluation

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, Operateur, Tok};

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Op(Operateur::Plus | Operateur::Moins) => 1,
        Tok::Op(Operateur::Fois | Operateur::Divise) => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(Fois), LPar, Num(3), Op(Plus), Num(4), RPar]
///   rpn:    [Num(2), Num(3), Num(4), Op(Plus), Op(Fois)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (qui est jetée)
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                    }
                }
            }

            Tok::Op(_) | Tok::Neg => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    log::trace!("rpn = {}", format_tokens(&out));
    Ok(out)
}

/// Réduit une RPN en une seule valeur.
///
/// Ne vérifie PAS la finitude du résultat (voir eval::evaluer).
pub fn calculer_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                st.push(-x);
            }

            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;

                let v = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b == 0.0 {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ParenthesesDesequilibrees),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}
