//! MicroJava language vocabulary registries.
//!
//! Callers work with the stable [`symbols::SymbolId`] instead of string comparisons and look up
//! display names and categories via the registry table.
//!
//! ## Examples
//! ```rust
//! use mj_core::lang::{keywords, symbols::{self, SymbolId}};
//!
//! assert_eq!(keywords::from_str("while"), Some(SymbolId::While));
//! assert_eq!(symbols::name(SymbolId::Leq), "<=");
//! ```

pub mod keywords;
pub mod symbols;
