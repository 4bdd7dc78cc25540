//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : toute erreur appartient à l’une des trois familles,
//!   et deux appels identiques donnent exactement la même sortie.

use std::time::{Duration, Instant};

use super::erreur::{ErrorKind, EvalError, SyntaxError};
use super::parser::NOEUDS_MAX;
use super::{evaluate, evaluer_avec_demarche};
use super::expr::{BinOp, Expr};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Soupe de caractères : valide ou non, peu importe.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '7', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', '\t', '&', 'x',
    ];
    let n = rng.pick(24) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(10);
    if rng.pick(4) == 0 {
        format!("{n}.{}", rng.pick(100))
    } else {
        format!("{n}")
    }
}

/// Expression bien formée (les erreurs possibles sont seulement arithmétiques).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("{} + {}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("{} - {}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{} * {}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("{} / {}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("{} ^ {}", gen_nombre(rng), gen_nombre(rng)),
        6 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => format!("({})", gen_expr(rng, depth - 1)),
    }
}

/// Arbre de sommes de forme aléatoire ; rend aussi la somme attendue des feuilles.
fn gen_arbre_somme(rng: &mut Rng, depth: usize) -> (Expr, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        let v = rng.pick(1000) as f64;
        return (Expr::constant(v), v);
    }
    let (a, sa) = gen_arbre_somme(rng, depth - 1);
    let (b, sb) = gen_arbre_somme(rng, depth - 1);
    if rng.coin() {
        (Expr::binary(BinOp::Add, a, b), sa + sb)
    } else {
        (Expr::binary(BinOp::Add, b, a), sa + sb)
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soupe_sans_panique_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_soupe(&mut rng);
        let a = evaluate(&expr);
        let b = evaluate(&expr);

        match (&a, &b) {
            (Ok(x), Ok(y)) => {
                assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}");
                seen_ok += 1;
            }
            (Err(e), Err(f)) => {
                assert_eq!(e, f, "expr={expr:?}");
                assert!(matches!(
                    e.kind(),
                    ErrorKind::LexicalError | ErrorKind::SyntaxError | ErrorKind::ArithmeticError
                ));
                assert!(!e.to_string().is_empty());
                seen_err += 1;
            }
            _ => panic!("sorties différentes pour expr={expr:?}: {a:?} / {b:?}"),
        }
    }

    assert!(seen_ok + seen_err == 400);
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_ok = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match evaluate(&expr) {
            Ok(_) => seen_ok += 1,
            // Seule faute possible sur une expression bien formée : le zéro au dénominateur.
            Err(e) => assert_eq!(
                e.kind(),
                ErrorKind::ArithmeticError,
                "erreur non attendue: expr={expr:?} err={e}"
            ),
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_somme_independante_de_la_forme() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        let (arbre, attendu) = gen_arbre_somme(&mut rng, 8);
        // entiers < 2^53 : sommes exactes quelle que soit la forme de l’arbre
        assert_eq!(arbre.resolve(), Ok(attendu), "arbre={arbre}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = somme_balancee("1.5", 800);
    budget(t0, max);

    // 800 * 1.5 = 1200
    assert_eq!(evaluate(&expr), Ok(1200.0));
}

#[test]
fn fuzz_safe_longue_chaine_a_gauche() {
    let expr = vec!["1"; 2000].join(" + ");
    assert_eq!(evaluate(&expr), Ok(2000.0));
}

#[test]
fn fuzz_safe_chaine_geante_refusee_proprement() {
    // au-delà de la limite de taille : erreur typée, jamais de débordement de pile
    let expr = vec!["1"; 200_000].join("+");
    assert_eq!(
        evaluate(&expr),
        Err(EvalError::Syntax(SyntaxError::TooLong { limit: NOEUDS_MAX }))
    );

    let expr = vec!["2"; 200_000].join("*");
    assert_eq!(evaluate(&expr).unwrap_err().kind(), ErrorKind::SyntaxError);
}

#[test]
fn fuzz_safe_chaine_longue_sous_la_limite() {
    let expr = vec!["1"; 90_000].join(" * ");
    let (v, d) = evaluer_avec_demarche(&expr).unwrap();
    assert_eq!(v, 1.0);
    assert_eq!(d.profondeur, 90_000);
    assert_eq!(d.noeuds, 179_999);
    assert!(d.infixe.starts_with("(((("));
    assert!(d.arbre.starts_with("Mul(Mul("));
}

#[test]
fn fuzz_safe_chaine_mixte_aleatoire() {
    let t0 = Instant::now();
    let max = Duration::from_secs(4);
    let mut rng = Rng::new(0x1DEA_u64);

    for _ in 0..3 {
        budget(t0, max);

        let mut expr = gen_nombre(&mut rng);
        for _ in 0..30_000 {
            let op = ["+", "-", "*", "/"][rng.pick(4) as usize];
            expr.push_str(&format!(" {op} {}", gen_nombre(&mut rng)));
        }
        match evaluate(&expr) {
            Ok(_) => {}
            Err(e) => assert_eq!(e.kind(), ErrorKind::ArithmeticError, "err={e}"),
        }
    }
}
