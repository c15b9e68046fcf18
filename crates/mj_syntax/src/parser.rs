//! Recovering recursive-descent parser for MicroJava.
//!
//! Single pass, one token of lookahead, no backtracking. The parser is a grammar acceptor: it
//! reports syntax errors (debounced by error distance) and resynchronizes with panic-mode
//! recovery, but it does not build a syntax tree.
//!
//! ## Examples
//!
//! ```rust
//! use mj_syntax::{lexer::Lexer, parser};
//!
//! let report = parser::parse(Lexer::new("program P int x; { void m() { x = 1 } }"));
//! assert_eq!(report.error_count(), 1);
//! assert_eq!(report.errors[0].message, "; expected");
//! ```

use std::fmt;

use mj_core::SymbolId;

use crate::diagnostics::CompileError;
use crate::lexer::{Span, Token};
use crate::source::TokenSource;
use crate::symbol_set::SymbolSet;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/config.rs");
include!("parser/sets.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
