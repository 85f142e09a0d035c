//! Propriétés de l’écran sur des suites de touches aléatoires.
//!
//! Invariants vérifiés après CHAQUE touche :
//! - deux opérateurs consécutifs => le second est '-'
//! - jamais trois opérateurs consécutifs
//! - au plus un '.' par opérande

use proptest::prelude::*;

use super::erreur::ErreurEval;
use super::evaluer;
use super::saisie::{appliquer_car, dernier_operande, effacer, est_operateur};

fn touche() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/',
    ])
}

fn taper(touches: &[char]) -> String {
    touches
        .iter()
        .fold(String::new(), |ecran, &c| appliquer_car(&ecran, c))
}

fn check_operateurs(ecran: &str) -> Result<(), TestCaseError> {
    let cs: Vec<char> = ecran.chars().collect();
    for w in cs.windows(2) {
        if est_operateur(w[0]) && est_operateur(w[1]) {
            prop_assert_eq!(w[1], '-', "paire d’opérateurs interdite dans {:?}", ecran);
        }
    }
    for w in cs.windows(3) {
        prop_assert!(
            !w.iter().all(|&c| est_operateur(c)),
            "trois opérateurs consécutifs dans {:?}",
            ecran
        );
    }
    Ok(())
}

fn check_points(ecran: &str) -> Result<(), TestCaseError> {
    for operande in ecran.split(est_operateur) {
        prop_assert!(
            operande.matches('.').count() <= 1,
            "deux points dans l’opérande {:?} de {:?}",
            operande,
            ecran
        );
    }
    Ok(())
}

proptest! {
    /// Les invariants tiennent après chaque touche.
    #[test]
    fn invariants_ecran(touches in prop::collection::vec(touche(), 0..40)) {
        let mut ecran = String::new();
        for c in touches {
            ecran = appliquer_car(&ecran, c);
            check_operateurs(&ecran)?;
            check_points(&ecran)?;
        }
    }

    /// Une touche ne modifie que la fin de l’écran (préfixe conservé à 2 caractères près).
    #[test]
    fn touche_locale(touches in prop::collection::vec(touche(), 0..30), c in touche()) {
        let avant = taper(&touches);
        let apres = appliquer_car(&avant, c);
        let garde = avant.len().saturating_sub(2);
        prop_assert!(apres.starts_with(&avant[..garde]));
        prop_assert!(apres.len() <= avant.len() + 1);
    }

    /// Un '.' refusé l’est parce que l’opérande courant en a déjà un.
    #[test]
    fn point_refuse_seulement_si_deja_present(touches in prop::collection::vec(touche(), 0..30)) {
        let avant = taper(&touches);
        let apres = appliquer_car(&avant, '.');
        prop_assert_eq!(apres == avant, dernier_operande(&avant).contains('.'));
    }

    /// "=" sur un écran tapé : un résultat qui se relit tel quel, ou une erreur attendue.
    #[test]
    fn evaluation_resultat_stable_ou_erreur_attendue(touches in prop::collection::vec(touche(), 1..25)) {
        let ecran = taper(&touches);
        prop_assume!(!ecran.is_empty());
        match evaluer(&ecran, 12) {
            Ok(ev) => {
                let relu = evaluer(&ev.texte, 12);
                prop_assert_eq!(relu.map(|r| r.texte), Ok(ev.texte.clone()), "écran {:?}", ecran);
            }
            Err(e) => prop_assert!(
                matches!(
                    e,
                    ErreurEval::DivisionParZero
                        | ErreurEval::OperandeManquant
                        | ErreurEval::LitteralInvalide(_)
                ),
                "erreur inattendue {:?} pour {:?}",
                e,
                ecran
            ),
        }
    }

    /// AC => écran vide, puis '0' reste refusé.
    #[test]
    fn effacer_puis_zero(touches in prop::collection::vec(touche(), 0..20)) {
        let _ = taper(&touches);
        let ecran = effacer();
        prop_assert_eq!(appliquer_car(&ecran, '0'), "");
    }
}
