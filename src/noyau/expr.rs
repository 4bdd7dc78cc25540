// src/noyau/expr.rs
//
// AST flottant (f64, IEEE 754).
// - Constant : feuille
// - Negate   : moins unaire
// - Binary   : + - * / ^
//
// Arbre strict : chaque noeud possède ses enfants (Box), aucun partage.
// Construit une fois par le parser, jamais modifié ensuite.

use std::fmt;
use std::mem;

use super::erreur::{ArithmeticError, EvalError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    /// Symbole entouré d’espaces, pour l’infixe.
    pub fn infixe(self) -> &'static str {
        match self {
            BinOp::Add => " + ",
            BinOp::Sub => " - ",
            BinOp::Mul => " * ",
            BinOp::Div => " / ",
            BinOp::Pow => " ^ ",
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            BinOp::Add => "Add",
            BinOp::Sub => "Sub",
            BinOp::Mul => "Mul",
            BinOp::Div => "Div",
            BinOp::Pow => "Pow",
        }
    }
}

#[derive(Debug)]
pub enum Expr {
    Constant(f64),
    Negate(Box<Expr>),
    Binary {
        op: BinOp,
        gauche: Box<Expr>,
        droite: Box<Expr>,
    },
}

/// Morceau de sortie pour les parcours textuels itératifs (Display, format_arbre).
#[derive(Copy, Clone)]
pub(crate) enum Morceau<'a> {
    Noeud(&'a Expr),
    Texte(&'static str),
}

impl Expr {
    pub fn constant(v: f64) -> Expr {
        Expr::Constant(v)
    }

    pub fn negate(e: Expr) -> Expr {
        Expr::Negate(Box::new(e))
    }

    pub fn binary(op: BinOp, gauche: Expr, droite: Expr) -> Expr {
        Expr::Binary {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Évaluation post-ordre. Pure : l’arbre n’est jamais modifié.
    ///
    /// Itératif (pile explicite) : une chaîne `1 + 1 + ...` donne un arbre
    /// aussi profond qu’elle est longue.
    ///
    /// Division : droite d’abord, test du zéro, puis gauche.
    pub fn resolve(&self) -> Result<f64, EvalError> {
        // Ce qui reste à faire quand la valeur courante est connue.
        enum Suite<'a> {
            Negate,
            Droite(BinOp, &'a Expr),
            Appliquer(BinOp, f64),
            Dividende(&'a Expr),
            Diviser(f64),
        }

        let mut pile: Vec<Suite<'_>> = Vec::with_capacity(64);
        let mut noeud = self;

        loop {
            // descente jusqu’à une feuille
            let mut v = loop {
                match noeud {
                    Expr::Constant(c) => break *c,
                    Expr::Negate(x) => {
                        pile.push(Suite::Negate);
                        noeud = x.as_ref();
                    }
                    Expr::Binary {
                        op: BinOp::Div,
                        gauche,
                        droite,
                    } => {
                        pile.push(Suite::Dividende(gauche.as_ref()));
                        noeud = droite.as_ref();
                    }
                    Expr::Binary { op, gauche, droite } => {
                        pile.push(Suite::Droite(*op, droite.as_ref()));
                        noeud = gauche.as_ref();
                    }
                }
            };

            // remontée tant que `v` complète un noeud
            loop {
                match pile.pop() {
                    None => return Ok(v),
                    Some(Suite::Negate) => v = -v,
                    Some(Suite::Droite(op, droite)) => {
                        pile.push(Suite::Appliquer(op, v));
                        noeud = droite;
                        break;
                    }
                    Some(Suite::Appliquer(op, g)) => v = applique(op, g, v),
                    Some(Suite::Dividende(gauche)) => {
                        // -0.0 == 0.0 aussi
                        if v == 0.0 {
                            return Err(ArithmeticError::DivisionByZero.into());
                        }
                        pile.push(Suite::Diviser(v));
                        noeud = gauche;
                        break;
                    }
                    Some(Suite::Diviser(d)) => v /= d,
                }
            }
        }
    }

    /// Profondeur de l’arbre (feuille = 1).
    pub fn profondeur(&self) -> usize {
        let mut pile: Vec<(&Expr, usize)> = vec![(self, 1)];
        let mut max = 0;
        while let Some((e, p)) = pile.pop() {
            max = max.max(p);
            match e {
                Expr::Constant(_) => {}
                Expr::Negate(x) => pile.push((x.as_ref(), p + 1)),
                Expr::Binary { gauche, droite, .. } => {
                    pile.push((gauche.as_ref(), p + 1));
                    pile.push((droite.as_ref(), p + 1));
                }
            }
        }
        max
    }

    /// Nombre total de noeuds.
    pub fn noeuds(&self) -> usize {
        let mut pile: Vec<&Expr> = vec![self];
        let mut n = 0;
        while let Some(e) = pile.pop() {
            n += 1;
            match e {
                Expr::Constant(_) => {}
                Expr::Negate(x) => pile.push(x.as_ref()),
                Expr::Binary { gauche, droite, .. } => {
                    pile.push(gauche.as_ref());
                    pile.push(droite.as_ref());
                }
            }
        }
        n
    }

    /// Sort les enfants non triviaux (remplacés par une constante) vers `pile`.
    fn detache_enfants(&mut self, pile: &mut Vec<Expr>) {
        fn detache(enfant: &mut Box<Expr>, pile: &mut Vec<Expr>) {
            if !matches!(**enfant, Expr::Constant(_)) {
                pile.push(mem::replace(enfant.as_mut(), Expr::Constant(0.0)));
            }
        }

        match self {
            Expr::Constant(_) => {}
            Expr::Negate(x) => detache(x, pile),
            Expr::Binary { gauche, droite, .. } => {
                detache(gauche, pile);
                detache(droite, pile);
            }
        }
    }
}

fn applique(op: BinOp, g: f64, d: f64) -> f64 {
    match op {
        BinOp::Add => g + d,
        BinOp::Sub => g - d,
        BinOp::Mul => g * d,
        BinOp::Div => g / d,
        BinOp::Pow => g.powf(d),
    }
}

/// Libération itérative : le drop par défaut de `Box<Expr>` récurse sur toute la profondeur.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile = Vec::new();
        self.detache_enfants(&mut pile);
        while let Some(mut e) = pile.pop() {
            e.detache_enfants(&mut pile);
        }
    }
}

/// Égalité structurelle (constantes comparées en f64), sans récursion.
impl PartialEq for Expr {
    fn eq(&self, autre: &Self) -> bool {
        let mut pile: Vec<(&Expr, &Expr)> = vec![(self, autre)];
        while let Some(paire) = pile.pop() {
            match paire {
                (Expr::Constant(a), Expr::Constant(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Expr::Negate(a), Expr::Negate(b)) => pile.push((a.as_ref(), b.as_ref())),
                (
                    Expr::Binary {
                        op: o1,
                        gauche: g1,
                        droite: d1,
                    },
                    Expr::Binary {
                        op: o2,
                        gauche: g2,
                        droite: d2,
                    },
                ) => {
                    if o1 != o2 {
                        return false;
                    }
                    pile.push((g1.as_ref(), g2.as_ref()));
                    pile.push((d1.as_ref(), d2.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

/// Infixe entièrement parenthésé : "(2 + (3 * 4))", "-(2 ^ 2)", "((-2) ^ 2)".
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Morceau::*;

        let mut pile = vec![Noeud(self)];
        while let Some(m) = pile.pop() {
            let e = match m {
                Texte(t) => {
                    f.write_str(t)?;
                    continue;
                }
                Noeud(e) => e,
            };
            match e {
                Expr::Constant(v) if *v < 0.0 => write!(f, "({v})")?,
                Expr::Constant(v) => write!(f, "{v}")?,
                Expr::Negate(x) => {
                    f.write_str("-")?;
                    pile.push(Noeud(x.as_ref()));
                }
                Expr::Binary { op, gauche, droite } => {
                    pile.push(Texte(")"));
                    pile.push(Noeud(droite.as_ref()));
                    pile.push(Texte(op.infixe()));
                    // base négée : "(-2) ^ 2", pas "-2 ^ 2"
                    if *op == BinOp::Pow && matches!(**gauche, Expr::Negate(_)) {
                        pile.push(Texte(")"));
                        pile.push(Noeud(gauche.as_ref()));
                        pile.push(Texte("(("));
                    } else {
                        pile.push(Noeud(gauche.as_ref()));
                        pile.push(Texte("("));
                    }
                }
            }
        }
        Ok(())
    }
}
