// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : produit seulement par rpn.rs (jamais par tokenize)
    Neg,
}

/// Tokenize une chaîne d’écran en jetons.
/// Supporte:
/// - entiers (ex: 12, 007)
/// - décimaux exacts (ex: 1.5, .5, 5.) -> Num(3/2), Num(1/2), Num(5)
/// - opérateurs + - * /
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral : suite maximale de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_decimal(&lit)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// "12.34" -> 1234/100 (exact). Au plus un point, au moins un chiffre.
fn parse_decimal(lit: &str) -> Result<BigRational, ErreurEval> {
    let invalide = || ErreurEval::LitteralInvalide(lit.to_string());

    let (ent, frac) = match lit.split_once('.') {
        Some((e, f)) => (e, f),
        None => (lit, ""),
    };
    if frac.contains('.') || (ent.is_empty() && frac.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let d = if frac.is_empty() {
        BigInt::one()
    } else {
        BigInt::from(10).pow(frac.len() as u32)
    };

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (trace) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() || n.is_zero() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
