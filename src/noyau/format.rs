// src/noyau/format.rs
//
// Affichage d’un résultat exact en décimal canonique :
// - entier => pas de ".0"
// - fraction décimale finie => exacte (0.5, -2.25)
// - fraction infinie => arrondie à `digits` décimales, zéros finaux retirés

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = round(r * 10^digits), demi-unité arrondie loin de zéro.
fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let n = r.numer().abs() * pow10(digits);
    let d = r.denom();

    let mut q = &n / d;
    let reste: BigInt = &n % d;
    if reste * 2 >= *d {
        q += 1u32;
    }

    if r.is_negative() {
        -q
    } else {
        q
    }
}

/// Texte canonique d’un résultat.
pub fn format_decimal(r: &BigRational, digits: usize) -> String {
    if r.is_integer() {
        return r.numer().to_string();
    }

    let scaled = rational_scaled_arrondi(r, digits);
    if scaled.is_zero() {
        // jamais "-0"
        return "0".to_string();
    }

    let txt = scaled_to_decimal(scaled, digits);
    if txt.contains('.') {
        txt.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        txt
    }
}
