//! Calculatrice d’expressions : bibliothèque.
//!
//! Seul le noyau est exposé ici ; l’UI (eframe) vit dans le binaire.

pub mod noyau;

pub use noyau::{evaluate, format_general, ErrorKind, EvalError};
