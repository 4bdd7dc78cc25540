// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// Trois familles seulement (lexicale / syntaxique / arithmétique) :
// la première faute rencontrée interrompt tout le pipeline, sans reprise.

use std::fmt;

use thiserror::Error;

use super::jetons::TokenKind;

/// Famille d’erreur, pour l’affichage côté UI ("SyntaxError: ...").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    LexicalError,
    SyntaxError,
    ArithmeticError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nom = match self {
            ErrorKind::LexicalError => "LexicalError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ArithmeticError => "ArithmeticError",
        };
        f.write_str(nom)
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SyntaxError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("trailing tokens after expression (found {found})")]
    TrailingTokens { found: TokenKind },
    #[error("expected {expected}, found {found}")]
    Expected { expected: TokenKind, found: TokenKind },
    #[error("unexpected token {found}")]
    Unexpected { found: TokenKind },
    #[error("expression nested too deeply (limit {limit})")]
    TooDeep { limit: usize },
    #[error("expression too long (more than {limit} nodes)")]
    TooLong { limit: usize },
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// `position` : index (0-based) du caractère fautif, compté en caractères.
    #[error("invalid character '{caractere}' at position {position}")]
    Lexical { caractere: char, position: usize },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Lexical { .. } => ErrorKind::LexicalError,
            EvalError::Syntax(_) => ErrorKind::SyntaxError,
            EvalError::Arithmetic(_) => ErrorKind::ArithmeticError,
        }
    }

    /// Texte complet pour l’utilisateur : "Kind: message".
    pub fn affichage(&self) -> String {
        format!("{}: {self}", self.kind())
    }
}
