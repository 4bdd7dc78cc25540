//! Tests de propriétés : précédence, associativité, signes, erreurs, déterminisme.
//!
//! Chaque test vise un comportement observable de `evaluate` (texte -> f64 / erreur),
//! sans regarder l’intérieur de l’arbre.

use super::erreur::{ErrorKind, EvalError, SyntaxError};
use super::jetons::TokenKind;
use super::{evaluate, format_general};

fn ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn err(expr: &str) -> EvalError {
    match evaluate(expr) {
        Ok(v) => panic!("expr={expr:?} devrait échouer, obtenu {v}"),
        Err(e) => e,
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn prop_precedence() {
    assert_eq!(ok("2 + 3 * 4"), 14.0);
    assert_eq!(ok("(2 + 3) * 4"), 20.0);
    assert_eq!(ok("2 * 3 + 4"), 10.0);
    assert_eq!(ok("2 + 3 ^ 2"), 11.0);
    assert_eq!(ok("2 * 3 ^ 2"), 18.0);
}

#[test]
fn prop_puissance_associative_a_droite() {
    assert_eq!(ok("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(ok("(2 ^ 3) ^ 2"), 64.0);
    assert_eq!(ok("2 ^ 2 ^ 2 ^ 2"), 65536.0);
}

#[test]
fn prop_soustraction_division_a_gauche() {
    assert_eq!(ok("10 - 4 - 3"), 3.0);
    assert_eq!(ok("100 / 10 / 5"), 2.0);
    assert_eq!(ok("100 / 2 ^ 2 / 5"), 5.0);
}

/* ------------------------ Signes unaires ------------------------ */

#[test]
fn prop_moins_unaire_et_puissance() {
    // forme historique : le signe ne prend qu’un facteur
    assert_eq!(ok("-2 ^ 2"), 4.0);
    assert_eq!(ok("(-2) ^ 2"), 4.0);
    assert_eq!(ok("-(2 ^ 2)"), -4.0);
    assert_eq!(ok("-2 ^ 3"), -8.0);
    assert_eq!(ok("2 ^ -1"), 0.5);
}

#[test]
fn prop_signes_empiles() {
    assert_eq!(ok("--3"), 3.0);
    assert_eq!(ok("---3"), -3.0);
    assert_eq!(ok("+3"), 3.0);
    assert_eq!(ok("-+-3"), 3.0);
    assert_eq!(ok("10 / -(-2)"), 5.0);
    assert_eq!(ok("5 - -5"), 10.0);
}

/* ------------------------ Nombres ------------------------ */

#[test]
fn prop_litteraux() {
    assert_eq!(ok("3."), 3.0);
    assert_eq!(ok("3.5 * 2"), 7.0);
    assert_eq!(ok("007"), 7.0);
    assert_eq!(ok("\t1 +\t 1 "), 2.0);
    assert_eq!(err(".5").kind(), ErrorKind::LexicalError);
}

#[test]
fn prop_ieee_non_piege() {
    assert_eq!(ok("10 ^ 400"), f64::INFINITY);
    assert!(ok("(-8) ^ (1 / 3)").is_nan());
    assert_eq!(ok("0 ^ 0"), 1.0);
    assert_eq!(ok("0.1 + 0.2"), 0.1 + 0.2);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn prop_division_par_zero() {
    assert_eq!(err("10 / 0").kind(), ErrorKind::ArithmeticError);
    assert_eq!(err("10 / 0").to_string(), "division by zero");
    assert_eq!(err("1 / (3 - 3)").kind(), ErrorKind::ArithmeticError);
    assert_eq!(err("1 / -0").kind(), ErrorKind::ArithmeticError);
}

#[test]
fn prop_entree_vide() {
    for s in ["", "   ", "\t\t"] {
        assert_eq!(err(s), SyntaxError::EmptyExpression.into(), "expr={s:?}");
    }
}

#[test]
fn prop_entrees_malformees() {
    assert_eq!(
        err("10 +"),
        SyntaxError::Unexpected {
            found: TokenKind::End
        }
        .into()
    );
    assert_eq!(err("(3 + 4").to_string(), "expected RPAREN, found END");
    assert_eq!(
        err("3 & 4"),
        EvalError::Lexical {
            caractere: '&',
            position: 2
        }
    );
    assert_eq!(err("2 3").kind(), ErrorKind::SyntaxError);
    assert_eq!(err("2 ^").kind(), ErrorKind::SyntaxError);
    assert_eq!(err(")").kind(), ErrorKind::SyntaxError);
    assert_eq!(err("x + 1").kind(), ErrorKind::LexicalError);
}

/* ------------------------ Déterminisme / idempotence ------------------------ */

#[test]
fn prop_determinisme_bit_a_bit() {
    let exprs = ["1.1 ^ 3.3", "2 / 3 * 3", "0.1 + 0.2 - 0.3", "-(7.25 ^ -1.5)"];
    for s in exprs {
        let a = ok(s).to_bits();
        for _ in 0..10 {
            assert_eq!(ok(s).to_bits(), a, "expr={s:?}");
        }
    }
}

#[test]
fn prop_idempotence_erreurs() {
    for s in ["10 / 0", "(3 + 4", "3 & 4", ""] {
        let a = err(s);
        for _ in 0..10 {
            assert_eq!(err(s), a, "expr={s:?}");
        }
    }
}

/* ------------------------ Affichage du résultat ------------------------ */

#[test]
fn prop_affichage_general() {
    assert_eq!(format_general(ok("2 ^ 3 ^ 2")), "512");
    assert_eq!(format_general(ok("10 / 4")), "2.5");
    assert_eq!(format_general(ok("10 ^ 6")), "1e+06");
    assert_eq!(format_general(ok("1 / 3")), "0.333333");
}
