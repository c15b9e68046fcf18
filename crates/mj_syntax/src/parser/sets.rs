/// Synchronization sets for panic-mode recovery.
///
/// Built once per parse and read-only afterwards. After an unrecoverable mismatch the parser
/// skips input until the lookahead is in the set that fits the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSets {
    /// Symbols that can start an expression.
    pub expr_start: SymbolSet,
    /// Symbols that can start a statement.
    pub stat_start: SymbolSet,
    /// Symbols that can follow a statement sequence.
    pub stat_seq_follow: SymbolSet,
    /// Symbols that can start a global declaration.
    pub decl_start: SymbolSet,
    /// Symbols that can follow the global declarations.
    pub decl_follow: SymbolSet,
}

impl SyncSets {
    pub fn new() -> Self {
        use SymbolId::*;
        Self {
            expr_start: SymbolSet::new(&[Ident, Number, CharCon, New, LPar, Minus]),
            stat_start: SymbolSet::new(&[Ident, If, While, Read, Return, Print, LBrace, Semicolon]),
            stat_seq_follow: SymbolSet::new(&[RBrace, Eof]),
            decl_start: SymbolSet::new(&[Final, Ident, Class]),
            decl_follow: SymbolSet::new(&[LBrace, Void, Eof]),
        }
    }
}

impl Default for SyncSets {
    fn default() -> Self {
        Self::new()
    }
}

// FIRST sets of the repeated and optional constructs.
const TYPE_START: SymbolSet = SymbolSet::new(&[SymbolId::Ident]);
const METHOD_START: SymbolSet = SymbolSet::new(&[SymbolId::Ident, SymbolId::Void]);
const COMMA: SymbolSet = SymbolSet::new(&[SymbolId::Comma]);
const DESIGNATOR_SUFFIX: SymbolSet = SymbolSet::new(&[SymbolId::Period, SymbolId::LBrack]);
const ADDOPS: SymbolSet = SymbolSet::new(&[SymbolId::Plus, SymbolId::Minus]);
const MULOPS: SymbolSet = SymbolSet::new(&[SymbolId::Times, SymbolId::Slash, SymbolId::Rem]);
const RELOPS: SymbolSet = SymbolSet::new(&[
    SymbolId::Eql,
    SymbolId::Neq,
    SymbolId::Lss,
    SymbolId::Leq,
    SymbolId::Gtr,
    SymbolId::Geq,
]);

/// Token classes used to skip over one construct that is nested too deeply.
#[derive(Debug, Clone, Copy)]
struct NestingSync {
    /// Tokens that open a nested level.
    open: SymbolSet,
    /// Tokens that close one; an unmatched closer belongs to an enclosing construct.
    close: SymbolSet,
    /// Tokens that end the construct when no nested level is open.
    end: SymbolSet,
}

const STATEMENT_NESTING: NestingSync = NestingSync {
    open: SymbolSet::new(&[SymbolId::LBrace]),
    close: SymbolSet::new(&[SymbolId::RBrace]),
    end: SymbolSet::new(&[SymbolId::Semicolon]),
};

const EXPR_NESTING: NestingSync = NestingSync {
    open: SymbolSet::new(&[SymbolId::LPar, SymbolId::LBrack]),
    close: SymbolSet::new(&[SymbolId::RPar, SymbolId::RBrack]),
    end: SymbolSet::new(&[SymbolId::Semicolon, SymbolId::Comma, SymbolId::LBrace, SymbolId::RBrace]),
};
