//! Noyau — évaluation (bouton "=")
//!
//! tokenize -> RPN -> Expr -> valeur exacte (BigRational) -> décimal canonique
//!
//! Priorité usuelle : `*` et `/` avant `+` et `-` ("3+4*2" = 11).

use super::erreur::ErreurEval;
use super::format::format_decimal;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Résultat d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Texte canonique à remettre à l’écran.
    pub texte: String,
    /// Trace : jetons lus.
    pub jetons: String,
    /// Trace : forme postfixée.
    pub rpn: String,
}

/// API publique : évalue l’écran et retourne le texte du résultat (+ traces).
pub fn evaluer(expr_str: &str, digits: usize) -> Result<Evaluation, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::Vide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);

    // 3) AST puis valeur exacte
    let valeur = from_rpn(&rpn)?.valeur()?;

    Ok(Evaluation {
        texte: format_decimal(&valeur, digits),
        jetons: jetons_txt,
        rpn: rpn_txt,
    })
}
