//! Shared syntax frontend for MicroJava: scanner, token source, diagnostics, recovering parser.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it accepts or rejects token streams and reports
//!   diagnostics. It builds no syntax tree and does no name resolution or type checking.
//! - Token kinds are the [`mj_core::SymbolId`] codes; the parser branches on them directly.
//!
//! ## Examples
//! ```rust
//! use mj_syntax::{lexer::Lexer, parser};
//!
//! let report = parser::parse(Lexer::new("program P { void main() { print(1); } }"));
//! assert!(report.is_accepted());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod symbol_set;
pub mod token_helpers;

pub use mj_core::SymbolId;
