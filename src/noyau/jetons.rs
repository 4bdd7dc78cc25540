// src/noyau/jetons.rs
//
// Tokenisation paresseuse (un jeton à la fois).
// Table de règles, dans l’ordre (la première qui matche gagne) :
//   [ \t]+            -> ignoré
//   \d+(\.\d*)?       -> NUMBER
//   + - * / ^ ( )     -> opérateurs / parenthèses
// Fin du texte -> END. Tout le reste -> erreur lexicale.

use std::fmt;

use super::erreur::EvalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    LParen,
    RParen,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nom = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Caret => "CARET",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::End => "END",
        };
        f.write_str(nom)
    }
}

/// Jeton. Seul NUMBER porte une valeur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    End,
}

impl Token {
    /// Genre seul (messages d’erreur).
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Star => TokenKind::Star,
            Token::Slash => TokenKind::Slash,
            Token::Caret => TokenKind::Caret,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::End => TokenKind::End,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Token::End)
    }
}

/// Curseur sur le texte d’entrée. Aucun retour arrière.
pub struct Tokenizer<'a> {
    texte: &'a str,
    curseur: usize, // en octets
    termine: bool,  // END déjà rendu (ou erreur) => l’itérateur s’arrête
}

impl<'a> Tokenizer<'a> {
    pub fn new(texte: &'a str) -> Self {
        Self {
            texte,
            curseur: 0,
            termine: false,
        }
    }

    fn reste(&self) -> &'a [u8] {
        &self.texte.as_bytes()[self.curseur..]
    }

    fn saute_blancs(&mut self) {
        let n = self
            .reste()
            .iter()
            .take_while(|b| **b == b' ' || **b == b'\t')
            .count();
        self.curseur += n;
    }

    /// Jeton suivant. Une fois END atteint, on continue de rendre END.
    pub fn next_token(&mut self) -> Result<Token, EvalError> {
        self.saute_blancs();

        let Some(&c) = self.reste().first() else {
            return Ok(Token::End);
        };

        if c.is_ascii_digit() {
            return self.lit_nombre();
        }

        let tok = match c {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'^' => Token::Caret,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            _ => return Err(self.erreur_ici()),
        };
        self.curseur += 1;
        Ok(tok)
    }

    /// \d+(\.\d*)? : "3." est accepté (= 3.0), ".5" ne l’est pas.
    fn lit_nombre(&mut self) -> Result<Token, EvalError> {
        let debut = self.curseur;
        let reste = self.reste();

        let mut fin = reste.iter().take_while(|b| b.is_ascii_digit()).count();
        if reste.get(fin) == Some(&b'.') {
            fin += 1;
            fin += reste[fin..].iter().take_while(|b| b.is_ascii_digit()).count();
        }

        let litteral = &self.texte[debut..debut + fin];
        // "3." -> "3"
        let v: f64 = litteral
            .trim_end_matches('.')
            .parse()
            .map_err(|_| self.erreur_ici())?;

        self.curseur += fin;
        Ok(Token::Number(v))
    }

    fn erreur_ici(&self) -> EvalError {
        let caractere = self.texte[self.curseur..].chars().next().unwrap_or('\0');
        let position = self.texte[..self.curseur].chars().count();
        EvalError::Lexical {
            caractere,
            position,
        }
    }
}

/// Séquence finie : tous les jetons, END compris (une seule fois), puis None.
/// Après une erreur, l’itérateur s’arrête aussi.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termine {
            return None;
        }
        let r = self.next_token();
        match &r {
            Ok(t) if t.is_end() => self.termine = true,
            Err(_) => self.termine = true,
            Ok(_) => {}
        }
        Some(r)
    }
}

/// Matérialise toute la séquence (END inclus).
pub fn tokenize(s: &str) -> Result<Vec<Token>, EvalError> {
    Tokenizer::new(s).collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Number(v) => format!("{v}"),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Caret => "^".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::End => "END".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
