//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline touche -> écran -> "=" sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - on accepte les erreurs attendues (division par zéro, opérateur final, point seul)
//! - invariant clé : un résultat réussi est un nombre qui se relit tel quel

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::{appliquer_car, evaluer};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const CLAVIER: [char; 15] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/',
];

fn is_erreur_attendue(e: &ErreurEval) -> bool {
    matches!(
        e,
        ErreurEval::DivisionParZero
            | ErreurEval::OperandeManquant
            | ErreurEval::LitteralInvalide(_)
    )
}

/// Simule un utilisateur qui tape `n` touches au hasard.
fn taper_au_hasard(rng: &mut Rng, n: usize) -> String {
    let mut ecran = String::new();
    for _ in 0..n {
        let c = CLAVIER[rng.pick(CLAVIER.len() as u32) as usize];
        ecran = appliquer_car(&ecran, c);
    }
    ecran
}

/// Expression entière bien formée (+ - * seulement) : jamais d’erreur.
fn gen_entiere(rng: &mut Rng, termes: usize) -> String {
    let mut s = format!("{}", 1 + rng.pick(99));
    for _ in 1..termes {
        let op = ['+', '-', '*'][rng.pick(3) as usize];
        s.push(op);
        s.push_str(&format!("{}", 1 + rng.pick(99)));
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_clavier_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let n = 1 + rng.pick(20) as usize;
        let ecran = taper_au_hasard(&mut rng, n);
        if ecran.is_empty() {
            continue;
        }

        // Même écran => même sortie
        let a = evaluer(&ecran, 12);
        let b = evaluer(&ecran, 12);
        assert_eq!(a, b, "non déterministe: {ecran:?}");

        match a {
            Ok(ev) => {
                // le résultat se relit tel quel
                let relu = evaluer(&ev.texte, 12)
                    .unwrap_or_else(|e| panic!("relecture {:?} échoue: {e}", ev.texte));
                assert_eq!(relu.texte, ev.texte, "écran={ecran:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: ecran={ecran:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entiers_toujours_ok() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let termes = 1 + rng.pick(8) as usize;
        let expr = gen_entiere(&mut rng, termes);
        let ev = evaluer(&expr, 12).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            !ev.texte.contains('.'),
            "résultat entier attendu: {expr:?} => {:?}",
            ev.texte
        );
    }
}

#[test]
fn fuzz_safe_longue_somme_sans_debordement_de_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // écran très long, chaîne gauche profonde : évaluation + libération itératives
    let expr = vec!["1"; 20_000].join("+");
    let ev = evaluer(&expr, 12).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);
    assert_eq!(ev.texte, "20000");

    let negs = format!("{}5", "-".repeat(10_001));
    assert_eq!(evaluer(&negs, 12).map(|ev| ev.texte), Ok("-5".to_string()));
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = vec!["0.5"; 800].join("+");
    let ev = evaluer(&expr, 12).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800 * 0.5 = 400
    assert_eq!(ev.texte, "400");
}
