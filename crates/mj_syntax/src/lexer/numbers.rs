//! Number scanning for the MicroJava scanner.
//!
//! Numbers are unsigned decimal literals that must fit in an `i32`; the sign is a separate
//! `-` token handled by the grammar.

use mj_core::SymbolId;

use super::{Lexer, Token, TokenValue};

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize, line: u32, col: u32) -> Token {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let digits = &self.source[start..self.current_pos];
        let value = match digits.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                self.error("number too large", start, line, col);
                0
            }
        };
        self.token(SymbolId::Number, start, line, col)
            .with_value(TokenValue::Number(value))
    }
}
