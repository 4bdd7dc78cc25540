// src/app/exemples.rs
//
// Table "Exemples" : expressions de référence + résultat (ou erreur) formaté.
// Partagée par l’onglet Exemples et par `--exemples` en ligne de commande.

use calculatrice_expr::noyau::{evaluate, format_general};

/// Expressions de référence (succès ET échecs, volontairement).
pub const EXEMPLES: [&str; 17] = [
    "3 + 4 * 5",
    "10 / 2 + 3",
    "1 + 2 - 3 * 4 / 2 + 5",
    "-5 + 10",
    "10 / -(-2)",
    "2 ^ 3",
    "2 * 3 ^ 2",
    "(2 * 3) ^ 2",
    "2 ^ 3 ^ 2",
    "100 / 2 ^ 2 / 5",
    "-2 ^ 4",
    "(-2) ^ 4",
    "10 / 0",
    "",
    "10 +",
    "(3 + 4",
    "3 & 4",
];

#[derive(Clone, Debug, PartialEq)]
pub struct LigneExemple {
    pub expression: String,
    pub texte: String,
    pub ok: bool,
}

pub fn ligne_exemple(expr: &str) -> LigneExemple {
    let expression = if expr.is_empty() {
        "'' (vide)".to_string()
    } else {
        expr.to_string()
    };

    match evaluate(expr) {
        Ok(v) => LigneExemple {
            expression,
            texte: format_general(v),
            ok: true,
        },
        Err(e) => LigneExemple {
            expression,
            texte: e.affichage(),
            ok: false,
        },
    }
}

pub fn tableau_exemples() -> Vec<LigneExemple> {
    EXEMPLES.iter().map(|e| ligne_exemple(e)).collect()
}
