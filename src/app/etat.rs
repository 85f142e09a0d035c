//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique écran de la calculatrice et n’y toucher que par
//! trois entrées : `appuyer` (touche), `clear` (AC), `equals` (=).
//!
//! Contrats :
//! - Aucune logique de saisie ici : tout passe par noyau::saisie.
//! - Après une erreur d’évaluation, la touche suivante repart d’un écran vide.
//! - Garde-fou : bornes sur la précision (digits).

use log::{debug, warn};

use crate::noyau::{self, ErreurEval, Touche};

/// Décimales max d’un résultat non décimal fini (1/3 => 0.333333333333).
pub const DIGITS_DEFAUT: usize = 12;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Texte affiché quand l’écran est vide.
pub const TEXTE_VIDE: &str = "0";

/// Texte affiché après une évaluation impossible.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran (= expression sérialisée) ---
    pub affichage: String,

    // --- sorties ---
    pub en_erreur: bool,

    // --- paramètres ---
    pub digits: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            en_erreur: false,
            digits: DIGITS_DEFAUT,
        }
    }
}

impl AppCalc {
    /* ------------------------ Rendu ------------------------ */

    /// Ce que l’écran montre : "Error", sinon l’expression, sinon "0".
    pub fn texte_affiche(&self) -> &str {
        if self.en_erreur {
            TEXTE_ERREUR
        } else if self.affichage.is_empty() {
            TEXTE_VIDE
        } else {
            &self.affichage
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Touche chiffre / point / opérateur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.sortir_erreur();
        let avant = std::mem::take(&mut self.affichage);
        self.affichage = noyau::appliquer(&avant, touche);
        debug!("touche {touche:?}: {avant:?} -> {:?}", self.affichage);
    }

    /// Saisie clavier : caractère brut (hors alphabet => ignoré).
    pub fn saisir_car(&mut self, c: char) {
        if Touche::depuis_car(c).is_none() {
            debug!("caractère ignoré: {c:?}");
            return;
        }
        self.sortir_erreur();
        let avant = std::mem::take(&mut self.affichage);
        self.affichage = noyau::appliquer_car(&avant, c);
        debug!("clavier {c:?}: {avant:?} -> {:?}", self.affichage);
    }

    /// AC : écran vide, erreur oubliée.
    pub fn clear(&mut self) {
        self.affichage = noyau::effacer();
        self.en_erreur = false;
        debug!("AC");
    }

    /// = : remplace l’écran par son résultat, ou passe en erreur.
    pub fn equals(&mut self) {
        if self.en_erreur || self.affichage.is_empty() {
            // rien à évaluer : l’écran montre déjà "Error" ou "0"
            return;
        }

        match noyau::evaluer(&self.affichage, self.digits) {
            Ok(ev) => {
                debug!(
                    "= {:?} -> {:?} (jetons: {}, rpn: {})",
                    self.affichage, ev.texte, ev.jetons, ev.rpn
                );
                self.affichage = ev.texte;
            }
            Err(e) => self.set_erreur(e),
        }
    }

    /// Garde-fou : limite digits (évite abus / gel plus tard).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
    }

    /* ------------------------ Utilitaires ------------------------ */

    fn set_erreur(&mut self, e: ErreurEval) {
        warn!("évaluation impossible de {:?}: {e}", self.affichage);
        self.affichage.clear();
        self.en_erreur = true;
    }

    fn sortir_erreur(&mut self) {
        if self.en_erreur {
            self.en_erreur = false;
            self.affichage.clear();
        }
    }
}
