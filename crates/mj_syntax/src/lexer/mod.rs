//! Scanner for MicroJava.
//!
//! Turns source text into classified tokens on demand. The scanner never fails: input it cannot
//! classify becomes a [`SymbolId::None`] token plus a lexical diagnostic, and the end of input
//! becomes an endless run of [`SymbolId::Eof`] tokens.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Token, TokenValue, Span)
//! - `numbers` - Number literal scanning
//! - `chars` - Character constant scanning

mod chars;
mod numbers;
pub mod tokens;

pub use tokens::{Span, Token, TokenValue};

use mj_core::SymbolId;
use mj_core::lang::keywords;

use crate::diagnostics::CompileError;
use crate::source::TokenSource;

/// Streaming scanner over a source string.
///
/// Lexical errors are collected rather than returned; read them with [`Lexer::errors`] once the
/// token source has been drained.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset of the next unconsumed character.
    current_pos: usize,
    line: u32,
    col: u32,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner positioned at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            col: 1,
            errors: Vec::new(),
        }
    }

    /// Scan the whole source.
    ///
    /// The token vector always ends with a single `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        let tokens = self.scan_all();
        if self.errors.is_empty() {
            Ok(tokens)
        } else {
            Err(self.errors)
        }
    }

    /// Scan the remaining input up to and including the first `Eof` token.
    ///
    /// Lexical errors stay on the scanner; invalid characters appear as `None` tokens.
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token();
            let done = token.is(SymbolId::Eof);
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Lexical errors reported so far.
    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<CompileError> {
        self.errors
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current_pos..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and `//` line comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.current_pos;
        let (line, col) = (self.line, self.col);

        let Some(c) = self.advance() else {
            return Token::new(SymbolId::Eof, line, col, Span::new(start, start));
        };

        let kind = match c {
            '+' => SymbolId::Plus,
            '-' => SymbolId::Minus,
            '*' => SymbolId::Times,
            '/' => SymbolId::Slash,
            '%' => SymbolId::Rem,
            ';' => SymbolId::Semicolon,
            ',' => SymbolId::Comma,
            '.' => SymbolId::Period,
            '(' => SymbolId::LPar,
            ')' => SymbolId::RPar,
            '[' => SymbolId::LBrack,
            ']' => SymbolId::RBrack,
            '{' => SymbolId::LBrace,
            '}' => SymbolId::RBrace,
            '=' => self.compound('=', SymbolId::Eql, SymbolId::Assign),
            '<' => self.compound('=', SymbolId::Leq, SymbolId::Lss),
            '>' => self.compound('=', SymbolId::Geq, SymbolId::Gtr),
            '!' if self.match_char('=') => SymbolId::Neq,

            '\'' => return self.scan_char_constant(start, line, col),
            '0'..='9' => return self.scan_number(start, line, col),
            _ if is_ident_start(c) => return self.scan_identifier(start, line, col),

            _ => {
                self.error(format!("invalid character '{}'", c.escape_default()), start, line, col);
                SymbolId::None
            }
        };

        self.token(kind, start, line, col)
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn token(&self, kind: SymbolId, start: usize, line: u32, col: u32) -> Token {
        Token::new(kind, line, col, Span::new(start, self.current_pos))
    }

    fn error(&mut self, message: impl Into<String>, start: usize, line: u32, col: u32) {
        let span = Span::new(start, self.current_pos);
        self.errors.push(CompileError::lexical(message, line, col, span));
    }

    /// Two-character operator if `second` follows, otherwise the single-character one.
    fn compound(&mut self, second: char, double: SymbolId, single: SymbolId) -> SymbolId {
        if self.match_char(second) { double } else { single }
    }

    fn scan_identifier(&mut self, start: usize, line: u32, col: u32) -> Token {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        match keywords::from_str(spelling) {
            Some(id) => self.token(id, start, line, col),
            None => self
                .token(SymbolId::Ident, start, line, col)
                .with_value(TokenValue::Ident(spelling.to_string())),
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        self.scan_token()
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Identifiers start with an ASCII letter.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to scan a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
