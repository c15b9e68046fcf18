//! Reserved words of MicroJava.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `While` is an identifier.
//!
//! ## Examples
//! ```rust
//! use mj_core::lang::keywords;
//! use mj_core::SymbolId;
//!
//! assert_eq!(keywords::from_str("program"), Some(SymbolId::Program));
//! assert_eq!(keywords::from_str("Program"), None);
//! ```

use super::symbols::{self, SymbolCategory, SymbolId};

/// Resolve an identifier spelling to a reserved-word symbol, if reserved.
pub fn from_str(s: &str) -> Option<SymbolId> {
    symbols::SYMBOLS
        .iter()
        .find(|info| info.category == SymbolCategory::Keyword && info.name == s)
        .map(|info| info.id)
}

/// Iterate over every reserved-word symbol.
pub fn all() -> impl Iterator<Item = SymbolId> {
    symbols::SYMBOLS
        .iter()
        .filter(|info| info.category == SymbolCategory::Keyword)
        .map(|info| info.id)
}
