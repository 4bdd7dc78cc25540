// src/noyau/parser.rs
//
// Descente récursive -> Expr
//
// Grammaire (du moins prioritaire au plus prioritaire) :
//   expression := term (('+' | '-') term)*      gauche
//   term       := power (('*' | '/') power)*    gauche
//   power      := factor ('^' power)?           droite
//   factor     := '-' factor | '+' factor | NUMBER | '(' expression ')'
//
// NOTE: le signe unaire ne consomme qu’un `factor`, donc "-2^2" donne
// Pow(Negate(2), 2) = 4 (et non -(2^2)). Comportement historique, conservé.

use super::erreur::{EvalError, SyntaxError};
use super::expr::{BinOp, Expr};
use super::jetons::{Token, TokenKind, Tokenizer};

/// Garde-fou : appels factor/power imbriqués au-delà => SyntaxError (pas de débordement de pile).
pub const PROFONDEUR_MAX: usize = 512;

/// Garde-fou : taille de l’arbre (les chaînes plates `1 + 1 + ...` ne sont pas bornées par la profondeur).
pub const NOEUDS_MAX: usize = 200_000;

pub struct Parser<'a> {
    jetons: Tokenizer<'a>,
    courant: Token,
    profondeur: usize,
    noeuds: usize,
}

impl<'a> Parser<'a> {
    /// Lit déjà le premier jeton (peut échouer en lexical).
    pub fn new(mut jetons: Tokenizer<'a>) -> Result<Self, EvalError> {
        let courant = jetons.next_token()?;
        Ok(Self {
            jetons,
            courant,
            profondeur: 0,
            noeuds: 0,
        })
    }

    pub fn courant(&self) -> Token {
        self.courant
    }

    fn advance(&mut self) -> Result<(), EvalError> {
        self.courant = self.jetons.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), EvalError> {
        if self.courant.kind() == kind {
            self.advance()
        } else {
            Err(SyntaxError::Expected {
                expected: kind,
                found: self.courant.kind(),
            }
            .into())
        }
    }

    pub fn parse(mut self) -> Result<Expr, EvalError> {
        if self.courant.is_end() {
            return Err(SyntaxError::EmptyExpression.into());
        }
        let ast = self.expression()?;
        if !self.courant.is_end() {
            return Err(SyntaxError::TrailingTokens {
                found: self.courant.kind(),
            }
            .into());
        }
        Ok(ast)
    }

    fn expression(&mut self) -> Result<Expr, EvalError> {
        let mut gauche = self.term()?;
        loop {
            let op = match self.courant {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance()?;
            let droite = self.term()?;
            self.compte()?;
            gauche = Expr::binary(op, gauche, droite);
        }
        Ok(gauche)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut gauche = self.power()?;
        loop {
            let op = match self.courant {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                _ => break,
            };
            self.advance()?;
            let droite = self.power()?;
            self.compte()?;
            gauche = Expr::binary(op, gauche, droite);
        }
        Ok(gauche)
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        self.entre()?;
        let base = self.factor()?;
        let e = if self.courant == Token::Caret {
            self.advance()?;
            // récursif à droite : 2^3^2 = 2^(3^2)
            let exposant = self.power()?;
            self.compte()?;
            Expr::binary(BinOp::Pow, base, exposant)
        } else {
            base
        };
        self.sort();
        Ok(e)
    }

    fn factor(&mut self) -> Result<Expr, EvalError> {
        self.entre()?;
        let e = match self.courant {
            Token::Minus => {
                self.advance()?;
                let x = self.factor()?;
                self.compte()?;
                Expr::negate(x)
            }
            // plus unaire : sans effet
            Token::Plus => {
                self.advance()?;
                self.factor()?
            }
            Token::Number(v) => {
                self.advance()?;
                self.compte()?;
                Expr::constant(v)
            }
            Token::LParen => {
                self.advance()?;
                let e = self.expression()?;
                self.expect(TokenKind::RParen)?;
                e
            }
            autre => {
                return Err(SyntaxError::Unexpected {
                    found: autre.kind(),
                }
                .into())
            }
        };

        self.sort();
        Ok(e)
    }

    fn entre(&mut self) -> Result<(), EvalError> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(SyntaxError::TooDeep {
                limit: PROFONDEUR_MAX,
            }
            .into());
        }
        Ok(())
    }

    fn sort(&mut self) {
        self.profondeur -= 1;
    }

    /// Un noeud de plus dans l’arbre.
    fn compte(&mut self) -> Result<(), EvalError> {
        self.noeuds += 1;
        if self.noeuds > NOEUDS_MAX {
            return Err(SyntaxError::TooLong { limit: NOEUDS_MAX }.into());
        }
        Ok(())
    }
}

/// Raccourci : texte -> AST.
pub fn parse_str(s: &str) -> Result<Expr, EvalError> {
    Parser::new(Tokenizer::new(s))?.parse()
}
