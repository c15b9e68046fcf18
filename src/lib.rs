#![forbid(unsafe_code)]
//! MicroJava syntax checker.
//!
//! This crate ties the frontend crates together: [`mj_syntax`]'s scanner feeds its recovering
//! parser, and the `mjc` binary reports the result. No syntax tree is built; a program is either
//! accepted or rejected with a list of diagnostics.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use mjc::{ParserConfig, check_source};
//!
//! let outcome = check_source("program P int x ; { void m ( ) { x = 1 } }", &ParserConfig::default());
//! assert_eq!(outcome.error_count(), 1);
//! assert_eq!(outcome.report.errors[0].message, "; expected");
//! ```

pub mod cli;

pub use mj_core::SymbolId;
pub use mj_syntax::diagnostics::{self, CompileError, ErrorKind};
pub use mj_syntax::lexer::{self, Lexer, Token, TokenValue};
pub use mj_syntax::parser::{self, ParseReport, ParserConfig, TraceLine};
pub use mj_syntax::source::{TokenSource, TokenStream};

/// Everything one check of a source text produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckOutcome {
    /// Diagnostics from the scanner, in source order.
    pub lex_errors: Vec<CompileError>,
    /// The parser's report.
    pub report: ParseReport,
}

impl CheckOutcome {
    pub fn error_count(&self) -> usize {
        self.lex_errors.len() + self.report.error_count()
    }

    pub fn is_accepted(&self) -> bool {
        self.error_count() == 0
    }

    /// All diagnostics ordered by position, lexical before syntax on ties.
    pub fn diagnostics(&self) -> Vec<&CompileError> {
        let mut all: Vec<&CompileError> = self.lex_errors.iter().chain(&self.report.errors).collect();
        all.sort_by_key(|e| (e.line, e.col, e.kind != ErrorKind::Lexical));
        all
    }
}

/// Scan and parse `source` in a single pass.
///
/// The scanner is driven by the parser on demand; its diagnostics are collected once the parse
/// has finished.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn check_source(source: &str, config: &ParserConfig) -> CheckOutcome {
    let mut lexer = Lexer::new(source);
    let report = parser::parse_with_config(&mut lexer, config);
    CheckOutcome {
        lex_errors: lexer.into_errors(),
        report,
    }
}
