//! Noyau de la calculatrice (pur, sans UI)
//!
//! Organisation interne :
//! - saisie.rs   : normalisation de l’écran touche par touche
//! - jetons.rs   : tokenisation (décimaux exacts)
//! - rpn.rs      : shunting-yard + construction Expr
//! - expr.rs     : AST exact + valeur
//! - format.rs   : décimal canonique (pas de ".0", arrondi borné)
//! - erreur.rs   : erreurs d’évaluation
//! - eval.rs     : pipeline complet du bouton "="

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::evaluer;
pub use saisie::{appliquer, appliquer_car, effacer, Operateur, Touche};
