//! Define the closed symbol-code vocabulary for MicroJava.
//!
//! Every terminal the grammar references has exactly one [`SymbolId`]: the three lexical classes
//! (identifier, number, char constant), each operator and delimiter, each reserved word, plus the
//! `None` classification for invalid input and `Eof`.
//!
//! ## Notes
//! - [`SYMBOLS`] is ordered by symbol code, so `SYMBOLS[id.code()]` is the entry for `id`.
//! - Names in the registry are the ones used in diagnostics (`"; expected"`) and in the token
//!   trace, so changing one is a user-visible change.
//!
//! ## Examples
//! ```rust
//! use mj_core::lang::symbols::{self, SymbolCategory, SymbolId};
//!
//! assert_eq!(SymbolId::Semicolon.code(), 16);
//! assert_eq!(symbols::name(SymbolId::CharCon), "char constant");
//! assert_eq!(symbols::category(SymbolId::Print), SymbolCategory::Keyword);
//! ```

use std::fmt;

/// Broad grouping for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Token classes that carry a lexeme: identifiers and literals.
    Class,
    /// Arithmetic, relational and assignment operators.
    Operator,
    /// Separators, brackets and braces.
    Delimiter,
    /// Reserved words.
    Keyword,
    /// `None` (invalid input) and `Eof`.
    Special,
}

/// Stable identifier for every token kind.
///
/// The discriminants are the symbol codes; keep them dense and in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SymbolId {
    None = 0,
    Ident,
    Number,
    CharCon,

    // Operators
    Plus,
    Minus,
    Times,
    Slash,
    Rem,
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,
    Assign,

    // Delimiters
    Semicolon,
    Comma,
    Period,
    LPar,
    RPar,
    LBrack,
    RBrack,
    LBrace,
    RBrace,

    // Reserved words
    Class,
    Else,
    Final,
    If,
    New,
    Print,
    Program,
    Read,
    Return,
    Void,
    While,

    Eof,
}

impl SymbolId {
    /// Number of symbol codes.
    pub const COUNT: usize = SymbolId::Eof as usize + 1;

    /// Return the numeric symbol code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolve a numeric symbol code.
    ///
    /// ## Returns
    /// - `None` if `code` is outside the vocabulary.
    pub fn from_code(code: u8) -> Option<SymbolId> {
        SYMBOLS.get(code as usize).map(|s| s.id)
    }

    /// Iterate over every symbol in code order.
    pub fn all() -> impl Iterator<Item = SymbolId> {
        SYMBOLS.iter().map(|s| s.id)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(name(*self))
    }
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    /// Display name used in diagnostics and traces.
    pub name: &'static str,
    pub category: SymbolCategory,
}

/// Registry of all symbols, in code order.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(SymbolId::None, "none", SymbolCategory::Special),
    info(SymbolId::Ident, "identifier", SymbolCategory::Class),
    info(SymbolId::Number, "number", SymbolCategory::Class),
    info(SymbolId::CharCon, "char constant", SymbolCategory::Class),
    info(SymbolId::Plus, "+", SymbolCategory::Operator),
    info(SymbolId::Minus, "-", SymbolCategory::Operator),
    info(SymbolId::Times, "*", SymbolCategory::Operator),
    info(SymbolId::Slash, "/", SymbolCategory::Operator),
    info(SymbolId::Rem, "%", SymbolCategory::Operator),
    info(SymbolId::Eql, "==", SymbolCategory::Operator),
    info(SymbolId::Neq, "!=", SymbolCategory::Operator),
    info(SymbolId::Lss, "<", SymbolCategory::Operator),
    info(SymbolId::Leq, "<=", SymbolCategory::Operator),
    info(SymbolId::Gtr, ">", SymbolCategory::Operator),
    info(SymbolId::Geq, ">=", SymbolCategory::Operator),
    info(SymbolId::Assign, "=", SymbolCategory::Operator),
    info(SymbolId::Semicolon, ";", SymbolCategory::Delimiter),
    info(SymbolId::Comma, ",", SymbolCategory::Delimiter),
    info(SymbolId::Period, ".", SymbolCategory::Delimiter),
    info(SymbolId::LPar, "(", SymbolCategory::Delimiter),
    info(SymbolId::RPar, ")", SymbolCategory::Delimiter),
    info(SymbolId::LBrack, "[", SymbolCategory::Delimiter),
    info(SymbolId::RBrack, "]", SymbolCategory::Delimiter),
    info(SymbolId::LBrace, "{", SymbolCategory::Delimiter),
    info(SymbolId::RBrace, "}", SymbolCategory::Delimiter),
    info(SymbolId::Class, "class", SymbolCategory::Keyword),
    info(SymbolId::Else, "else", SymbolCategory::Keyword),
    info(SymbolId::Final, "final", SymbolCategory::Keyword),
    info(SymbolId::If, "if", SymbolCategory::Keyword),
    info(SymbolId::New, "new", SymbolCategory::Keyword),
    info(SymbolId::Print, "print", SymbolCategory::Keyword),
    info(SymbolId::Program, "program", SymbolCategory::Keyword),
    info(SymbolId::Read, "read", SymbolCategory::Keyword),
    info(SymbolId::Return, "return", SymbolCategory::Keyword),
    info(SymbolId::Void, "void", SymbolCategory::Keyword),
    info(SymbolId::While, "while", SymbolCategory::Keyword),
    info(SymbolId::Eof, "eof", SymbolCategory::Special),
];

/// Display name for a symbol.
pub fn name(id: SymbolId) -> &'static str {
    info_for(id).name
}

/// Category for a symbol.
pub fn category(id: SymbolId) -> SymbolCategory {
    info_for(id).category
}

/// Full metadata entry for a symbol.
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    &SYMBOLS[id as usize]
}

const fn info(id: SymbolId, name: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo { id, name, category }
}
