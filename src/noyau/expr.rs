// src/noyau/expr.rs
//
// AST exact (sans flottants) des quatre opérations.

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Rat(BigRational),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

/// Parcours postfixé explicite (pas de récursion : un écran peut être très long).
enum Etape<'a> {
    Entrer(&'a Expr),
    Combiner(&'a Expr),
}

impl Expr {
    /// Valeur exacte. Seule erreur possible : division par un zéro exact.
    pub fn valeur(&self) -> Result<BigRational, ErreurEval> {
        use Expr::*;

        let mut pile = vec![Etape::Entrer(self)];
        let mut valeurs: Vec<BigRational> = Vec::new();

        while let Some(etape) = pile.pop() {
            match etape {
                Etape::Entrer(e) => match e {
                    Rat(r) => valeurs.push(r.clone()),
                    Neg(x) => {
                        pile.push(Etape::Combiner(e));
                        pile.push(Etape::Entrer(x.as_ref()));
                    }
                    Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) => {
                        // a d’abord, puis b
                        pile.push(Etape::Combiner(e));
                        pile.push(Etape::Entrer(b.as_ref()));
                        pile.push(Etape::Entrer(a.as_ref()));
                    }
                },

                Etape::Combiner(Neg(_)) => {
                    let x = valeurs.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                    valeurs.push(-x);
                }
                Etape::Combiner(e) => {
                    let vb = valeurs.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                    let va = valeurs.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                    let v = match e {
                        Add(..) => va + vb,
                        Sub(..) => va - vb,
                        Mul(..) => va * vb,
                        Div(..) => {
                            if vb.is_zero() {
                                return Err(ErreurEval::DivisionParZero);
                            }
                            va / vb
                        }
                        Rat(_) | Neg(_) => return Err(ErreurEval::ExpressionInvalide),
                    };
                    valeurs.push(v);
                }
            }
        }

        valeurs.pop().ok_or(ErreurEval::ExpressionInvalide)
    }

    /// Détache les enfants directs (remplacés par une feuille) dans `pile`.
    fn detacher_enfants(&mut self, pile: &mut Vec<Box<Expr>>) {
        fn prendre(x: &mut Box<Expr>) -> Box<Expr> {
            std::mem::replace(x, Box::new(Expr::Rat(BigRational::zero())))
        }

        match self {
            Expr::Rat(_) => {}
            Expr::Neg(x) => pile.push(prendre(x)),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                pile.push(prendre(a));
                pile.push(prendre(b));
            }
        }
    }
}

// Libération itérative : le drop dérivé récurserait une fois par opérateur.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile: Vec<Box<Expr>> = Vec::new();
        self.detacher_enfants(&mut pile);
        while let Some(mut e) = pile.pop() {
            e.detacher_enfants(&mut pile);
        }
    }
}
