//! Token types for the MicroJava scanner.
//!
//! A token's kind is its [`SymbolId`]; the lexeme payload is carried separately in
//! [`TokenValue`] and is only present for identifiers, numbers and char constants.

use mj_core::SymbolId;

/// Byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Lexeme payload of a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenValue {
    #[default]
    None,
    Ident(String),
    Number(i32),
    Char(char),
}

/// A classified token with its source position.
///
/// Tokens are produced once by a token source and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SymbolId,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// 1-based column of the token's first character.
    pub col: u32,
    pub span: Span,
    pub value: TokenValue,
}

impl Token {
    /// Construct a token without a lexeme payload.
    pub fn new(kind: SymbolId, line: u32, col: u32, span: Span) -> Self {
        Self {
            kind,
            line,
            col,
            span,
            value: TokenValue::None,
        }
    }

    /// Attach a lexeme payload.
    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = value;
        self
    }
}
