//! Noyau : évaluation (pipeline réel)
//!
//! texte -> Tokenizer (paresseux) -> Parser (descente récursive) -> Expr -> resolve -> f64
//!
//! Aucun état partagé entre deux appels : chaque appel crée son tokenizer,
//! son parser et son arbre, puis les jette.

use log::{debug, warn};

use super::erreur::EvalError;
use super::expr::Expr;
use super::format::format_arbre;
use super::jetons::{format_tokens, tokenize, Tokenizer};
use super::parser::Parser;

/// Rapport d’étapes (panneau "Démarche" de l’UI, option --demarche du CLI).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub infixe: String,
    pub arbre: String,
    pub profondeur: usize,
    pub noeuds: usize,
}

/// API publique : texte -> nombre (ou première erreur rencontrée).
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let ast = construit_arbre(expression)?;
    resout(expression, &ast)
}

/// Même pipeline, avec la démarche en plus.
pub fn evaluer_avec_demarche(expression: &str) -> Result<(f64, DemarcheNoyau), EvalError> {
    let ast = construit_arbre(expression)?;

    // L’analyse a réussi : la lecture complète des jetons ne peut plus échouer.
    let jetons = tokenize(expression)?;

    let valeur = resout(expression, &ast)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        infixe: ast.to_string(),
        arbre: format_arbre(&ast),
        profondeur: ast.profondeur(),
        noeuds: ast.noeuds(),
    };

    Ok((valeur, d))
}

fn construit_arbre(expression: &str) -> Result<Expr, EvalError> {
    debug!("analyse de {expression:?}");

    let parser =
        Parser::new(Tokenizer::new(expression)).inspect_err(|e| trace_echec(expression, e))?;
    let ast = parser.parse().inspect_err(|e| trace_echec(expression, e))?;

    debug!("arbre: {ast}");
    Ok(ast)
}

fn resout(expression: &str, ast: &Expr) -> Result<f64, EvalError> {
    let v = ast.resolve().inspect_err(|e| trace_echec(expression, e))?;
    debug!("résultat {expression:?} = {v}");
    Ok(v)
}

fn trace_echec(expression: &str, e: &EvalError) {
    warn!("échec de {expression:?}: {}", e.affichage());
}
