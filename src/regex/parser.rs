//! Recursive-descent parser implementing the grammar:
//!
//! ```text
//! union   -> union "|" concat | concat
//! concat  -> concat "." atom | atom
//! atom    -> atom "*" | atom "?" | "(" union ")" | SYMBOL
//! ```
//!
//! Concatenation is explicit (`.`). The grammar forbids stacking two postfix
//! operators directly on the same atom (`a**`); a single postfix application
//! is allowed, and a second one requires parentheses (`(a*)*`).

use crate::error::AutomataError;

use super::ast::Ast;
use super::tokens::{Token, TokenKind};

pub fn parse(tokens: &[Token]) -> Result<Ast, AutomataError> {
    let mut parser = Parser { tokens, pos: 0 };
    let ast = parser.parse_union()?;
    parser.expect(TokenKind::Eos)?;
    Ok(ast)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn parse_union(&mut self) -> Result<Ast, AutomataError> {
        let mut node = self.parse_concat()?;
        while self.matches(TokenKind::Union) {
            let rhs = self.parse_concat()?;
            node = Ast::union(node, rhs);
        }
        Ok(node)
    }

    fn parse_concat(&mut self) -> Result<Ast, AutomataError> {
        let mut node = self.parse_atom()?;
        while self.matches(TokenKind::Concat) {
            let rhs = self.parse_atom()?;
            node = Ast::concatenation(node, rhs);
        }
        Ok(node)
    }

    fn parse_atom(&mut self) -> Result<Ast, AutomataError> {
        let base = self.parse_atom_base()?;
        match self.peek_kind() {
            Some(TokenKind::Star) => {
                self.pos += 1;
                Ok(Ast::kleene_star(base))
            }
            Some(TokenKind::Option) => {
                self.pos += 1;
                Ok(Ast::option(base))
            }
            _ => Ok(base),
        }
    }

    fn parse_atom_base(&mut self) -> Result<Ast, AutomataError> {
        match self.peek_kind() {
            Some(TokenKind::Symbol(sym)) => {
                self.pos += 1;
                Ok(Ast::Symbol(sym))
            }
            Some(TokenKind::LParen) => {
                self.pos += 1;
                let node = self.parse_union()?;
                self.expect(TokenKind::RParen)?;
                Ok(node)
            }
            Some(other) => Err(self.error_here(other)),
            None => Err(AutomataError::InvalidRegex("unexpected end of input".to_string())),
        }
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), AutomataError> {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            Ok(())
        } else {
            match self.peek_kind() {
                Some(found) => Err(self.error_here(found)),
                None => Err(AutomataError::InvalidRegex(format!(
                    "expected {kind} but reached end of input"
                ))),
            }
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn error_here(&self, found: TokenKind) -> AutomataError {
        let column = self.peek().map(|t| t.column).unwrap_or(0);
        AutomataError::InvalidRegex(format!("unexpected token {found} at column {column}"))
    }
}
