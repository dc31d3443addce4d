//! Converts a regex source string into a token stream.
//!
//! Whitespace is ignored; operand atoms are a single lowercase letter or
//! decimal digit. Unknown characters surface as [`AutomataError::InvalidRegex`].

use crate::error::AutomataError;
use crate::symbol::Symbol;

use super::tokens::{Token, TokenKind};

pub fn lex(input: &str) -> Result<Vec<Token>, AutomataError> {
    let mut tokens = Vec::new();
    for (idx, ch) in input.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        let column = idx + 1;
        let kind = match ch {
            '|' => TokenKind::Union,
            '.' => TokenKind::Concat,
            '*' => TokenKind::Star,
            '?' => TokenKind::Option,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ if ch.is_ascii_lowercase() || ch.is_ascii_digit() => {
                TokenKind::Symbol(Symbol::new(ch).expect("checked lowercase/digit above"))
            }
            other => {
                return Err(AutomataError::InvalidRegex(format!(
                    "unexpected character '{other}' at column {column}"
                )));
            }
        };
        tokens.push(Token::new(kind, column));
    }
    tokens.push(Token::new(TokenKind::Eos, input.len() + 1));
    Ok(tokens)
}
