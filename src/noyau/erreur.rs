// src/noyau/erreur.rs
//
// Erreurs d’évaluation (bouton "=").
// Une saisie refusée (zéro initial, second point) n’est PAS une erreur : l’affichage reste inchangé.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    LitteralInvalide(String),

    /// Opérateur sans opérande (ex: "3+", "*", "-").
    #[error("opérande manquant")]
    OperandeManquant,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,
}
