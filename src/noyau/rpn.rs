// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), priorité usuelle (* / avant + -)
// - Puis reconstruire Expr
//
// Signes unaires:
// - '-' quand on attend une valeur => Tok::Neg (préfixe, associatif à droite, priorité max)
// - '+' quand on attend une valeur => ignoré
//   "3*-2" => "3 2 neg *", "3--2" => "3 2 neg -"

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Num(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Plus, Num(4), Star, Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // Sert à détecter les signes unaires.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    // deux nombres collés : impossible depuis tokenize, mais on refuse
                    return Err(ErreurEval::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // préfixe : rien à dépiler (associatif à droite)
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Neg => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                ops.push(Tok::Neg);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    // '*' ou '/' sans opérande gauche
                    return Err(ErreurEval::OperandeManquant);
                }

                let p_tok = precedence(&tok);
                while let Some(top) = ops.last() {
                    if precedence(top) >= p_tok {
                        if let Some(op) = ops.pop() {
                            out.push(op);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // opérateur (ou signe) en fin d'entrée : il lui manque son opérande
    if !tokens.is_empty() && !prev_was_value {
        return Err(ErreurEval::OperandeManquant);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(Expr::Rat(r)),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                let (a, b) = (Box::new(a), Box::new(b));

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    _ => Expr::Div(a, b),
                };
                st.push(e);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        (None, _) => Err(ErreurEval::Vide),
        (Some(_), false) => Err(ErreurEval::ExpressionInvalide),
    }
}
