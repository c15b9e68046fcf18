/// Parser configuration.
///
/// ## Notes
/// - `trace` is an opt-in diagnostic: when set, every window advance records a [`TraceLine`].
///   Advances are always visible as `tracing` events at `TRACE` level regardless.
/// - `min_error_distance` is the debounce threshold: a new error is only reported once at least
///   this many tokens have been consumed since the previous one. `0` reports every error.
/// - `max_depth` bounds how deeply statements and expressions may nest. A deeper construct is
///   reported as `nesting too deep` and skipped, so the parser's recursion stays bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub trace: bool,
    pub min_error_distance: u32,
    pub max_depth: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trace: false,
            min_error_distance: 3,
            max_depth: 256,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the token trace
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set the debounce threshold
    pub fn with_min_error_distance(mut self, distance: u32) -> Self {
        self.min_error_distance = distance;
        self
    }

    /// Set the statement/expression nesting limit
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}
