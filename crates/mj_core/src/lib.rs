//! Provide the canonical MicroJava vocabulary for the `mjc` frontend.
//!
//! This crate is intentionally small and dependency-free. It owns the closed set of symbol codes
//! that the scanner classifies tokens into and that the parser branches on.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no parser-specific types.
//! - Everything here is `Copy` and lives in `const` tables so it can be shared freely.

pub mod lang;

pub use lang::symbols::SymbolId;
