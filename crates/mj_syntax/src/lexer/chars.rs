//! Character constant scanning for the MicroJava scanner.
//!
//! Supported forms: `'c'` and the escapes `'\n'`, `'\r'`, `'\t'`, `'\\'`, `'\''`. Malformed
//! constants are reported but still produce a `CharCon` token so the parser stays in step.

use mj_core::SymbolId;

use super::{Lexer, Token, TokenValue};

impl<'a> Lexer<'a> {
    /// Scan a char constant; the opening quote has already been consumed.
    pub(super) fn scan_char_constant(&mut self, start: usize, line: u32, col: u32) -> Token {
        let value = match self.peek() {
            Some('\'') => {
                self.advance();
                self.error("empty character constant", start, line, col);
                return self.char_token('\0', start, line, col);
            }
            None | Some('\n') | Some('\r') => {
                self.error("missing quote", start, line, col);
                return self.char_token('\0', start, line, col);
            }
            Some('\\') => {
                self.advance();
                self.scan_escape(start, line, col)
            }
            Some(c) => {
                self.advance();
                c
            }
        };

        if !self.match_char('\'') {
            self.error("missing quote", start, line, col);
        }
        self.char_token(value, start, line, col)
    }

    fn scan_escape(&mut self, start: usize, line: u32, col: u32) -> char {
        let escaped = match self.peek() {
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('\\') => '\\',
            Some('\'') => '\'',
            None | Some('\n') => return '\0',
            Some(other) => {
                self.advance();
                self.error(format!("invalid escape sequence '\\{}'", other), start, line, col);
                return other;
            }
        };
        self.advance();
        escaped
    }

    fn char_token(&self, value: char, start: usize, line: u32, col: u32) -> Token {
        self.token(SymbolId::CharCon, start, line, col)
            .with_value(TokenValue::Char(value))
    }
}
