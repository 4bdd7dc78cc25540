//! Noyau : évaluateur d’expressions arithmétiques (f64)
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation paresseuse (Tokenizer, Token, TokenKind)
//! - parser.rs  : descente récursive -> Expr
//! - expr.rs    : AST + resolve (évaluation)
//! - erreur.rs  : LexicalError / SyntaxError / ArithmeticError
//! - format.rs  : affichage "général" du résultat, arbre structurel
//! - eval.rs    : pipeline complet (+ démarche)

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod parser;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErrorKind, EvalError};
pub use eval::{evaluate, evaluer_avec_demarche, DemarcheNoyau};
pub use format::format_general;
