//! Diagnostics for the MicroJava frontend.
//!
//! Every problem the scanner or parser finds becomes a [`CompileError`] carrying the 1-based
//! line/column of the offending token. The plain `Display` form is the classic one-line
//! `line <L> col <C>: <message>`; the `miette::Diagnostic` impl adds a labelled source span for
//! graphical rendering.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::{Span, Token};

/// A frontend error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {line} col {col}: {message}")]
pub struct CompileError {
    pub message: String,
    pub kind: ErrorKind,
    pub line: u32,
    pub col: u32,
    #[label("here")]
    pub span: Span,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: u32, col: u32, span: Span) -> Self {
        Self {
            message: message.into(),
            kind,
            line,
            col,
            span,
        }
    }

    /// Syntax error positioned at `token` (the parser's lookahead).
    pub fn syntax(message: impl Into<String>, token: &Token) -> Self {
        Self::new(ErrorKind::Syntax, message, token.line, token.col, token.span)
    }

    pub fn lexical(message: impl Into<String>, line: u32, col: u32, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, line, col, span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl ErrorKind {
    /// Short machine-readable name, used by the JSON message format.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "lexical",
            ErrorKind::Syntax => "syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.end.saturating_sub(span.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mj_core::SymbolId;

    #[test]
    fn display_is_the_one_line_form() {
        let err = CompileError::new(ErrorKind::Syntax, "; expected", 3, 14, Span::new(40, 41));
        assert_eq!(err.to_string(), "line 3 col 14: ; expected");
    }

    #[test]
    fn syntax_error_takes_token_position() {
        let token = Token::new(SymbolId::RBrace, 7, 2, Span::new(90, 91));
        let err = CompileError::syntax("; expected", &token);
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!((err.line, err.col), (7, 2));
        assert_eq!(err.span, Span::new(90, 91));
    }

    #[test]
    fn span_converts_to_offset_and_length() {
        let span: SourceSpan = Span::new(10, 13).into();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn kind_names() {
        assert_eq!(ErrorKind::Lexical.to_string(), "lexical error");
        assert_eq!(ErrorKind::Syntax.as_str(), "syntax");
    }
}
