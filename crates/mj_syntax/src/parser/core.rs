// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, its [`ParseReport`] output and the top-level
// `parse()` entrypoint.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single "god file".

/// The statement forms of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `Designator = Expr ;`
    Assign,
    /// `Designator ActPars ;`
    Call,
    If,
    While,
    Return,
    Read,
    Print,
    Block,
    /// A lone `;`.
    Empty,
}

/// One line of the opt-in token trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub line: u32,
    pub col: u32,
    /// The token as rendered by [`Token::describe`].
    pub text: String,
}

impl TraceLine {
    fn for_token(token: &Token) -> Self {
        Self {
            line: token.line,
            col: token.col,
            text: token.describe(),
        }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}: {}", self.line, self.col, self.text)
    }
}

/// Result of one parse.
///
/// A program is accepted when no syntax error was reported; there is no separate failure
/// signal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    /// Reported (non-debounced) syntax errors, in source order.
    pub errors: Vec<CompileError>,
    /// Token trace, empty unless [`ParserConfig::trace`] was set.
    pub trace: Vec<TraceLine>,
    /// Whether the lookahead was `eof` when the parse finished.
    pub reached_eof: bool,
}

impl ParseReport {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<(), Vec<CompileError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - One instance serves exactly one parse; all window, counter and set state lives here, so
///   independent parses never share anything.
/// - The grammar productions are split across the `decl`, `stmts` and `expr` chunks.
pub struct Parser<S> {
    source: S,
    config: ParserConfig,
    /// Most recently consumed token.
    current: Token,
    /// Next token, not yet consumed.
    lookahead: Token,
    /// Always `lookahead.kind`.
    sym: SymbolId,
    sets: SyncSets,
    errors: Vec<CompileError>,
    /// Tokens consumed since the last reported (or suppressed) error.
    err_dist: u32,
    /// Total number of window advances; used to detect loop iterations without progress.
    consumed: usize,
    /// Statement and expression levels currently open.
    depth: u32,
    trace: Vec<TraceLine>,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser over a token source.
    pub fn new(source: S, config: ParserConfig) -> Self {
        let placeholder = Token::new(SymbolId::None, 0, 0, Span::default());
        Self {
            source,
            config,
            current: placeholder.clone(),
            lookahead: placeholder,
            sym: SymbolId::None,
            sets: SyncSets::new(),
            errors: Vec::new(),
            err_dist: 0,
            consumed: 0,
            depth: 0,
            trace: Vec::new(),
        }
    }

    /// Parse a whole program.
    ///
    /// Never fails: every syntax problem ends up in [`ParseReport::errors`].
    pub fn parse(mut self) -> ParseReport {
        self.sets = SyncSets::new();
        self.errors.clear();
        self.trace.clear();
        self.depth = 0;
        // Start "far away" from any error so the first one is always reported.
        self.err_dist = self.config.min_error_distance;

        self.advance();
        self.program();
        if self.sym != SymbolId::Eof {
            self.report_error("end of file found before end of program");
        }

        tracing::debug!(
            errors = self.errors.len(),
            tokens = self.consumed,
            "parse finished"
        );

        ParseReport {
            reached_eof: self.sym == SymbolId::Eof,
            errors: self.errors,
            trace: self.trace,
        }
    }
}
