/// Lookahead window, error reporting and recovery primitives.
///
/// This chunk contains the low-level operations every production builds on:
/// - Moving the window (`advance`) and the consumption primitive (`expect`)
/// - Debounced error reporting (`report_error`)
/// - Panic-mode skipping (`skip_until`, `skip_nested`)
/// - The repetition combinators (`repeat_while`, `repeat_until`) and the depth guard (`nested`)
///
/// ## Notes
/// - Productions consume tokens only through `expect`. `advance` is called directly only by
///   `expect`, priming, and recovery.
/// - A mismatched `expect` does not consume. Loops therefore go through the combinators, which
///   force one token of progress when an iteration consumed nothing.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Window
    // ========================================================================

    /// Shift the lookahead into `current` and pull the next token.
    fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.lookahead, next);
        self.sym = self.lookahead.kind;
        self.err_dist = self.err_dist.saturating_add(1);
        self.consumed += 1;

        tracing::trace!(
            line = self.lookahead.line,
            col = self.lookahead.col,
            token = %self.lookahead.describe(),
            "advance"
        );
        if self.config.trace {
            self.trace.push(TraceLine::for_token(&self.lookahead));
        }
    }

    /// Consume the lookahead if it is `expected`, otherwise report `"<expected> expected"`.
    fn expect(&mut self, expected: SymbolId) {
        if self.sym == expected {
            self.advance();
        } else {
            self.report_error(format!("{} expected", expected));
        }
    }

    // ========================================================================
    // Errors and recovery
    // ========================================================================

    /// Report a syntax error at the lookahead, unless one was reported too recently.
    fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.err_dist >= self.config.min_error_distance {
            let err = CompileError::syntax(message, &self.lookahead);
            tracing::debug!(%err, after = %self.current.describe(), "syntax error");
            self.errors.push(err);
        } else {
            tracing::trace!(%message, err_dist = self.err_dist, "suppressed follow-on error");
        }
        self.err_dist = 0;
    }

    /// Skip tokens until the lookahead is in `stop` (or is `eof`).
    fn skip_until(&mut self, stop: SymbolSet) {
        let stop = stop.with(SymbolId::Eof);
        let mut skipped = 0usize;
        while !stop.contains(self.sym) {
            self.advance();
            skipped += 1;
        }
        // Skipped tokens do not count towards the error distance.
        self.err_dist = 0;
        tracing::debug!(skipped, resume_at = %self.sym, "resynchronized");
    }

    /// Skip one construct that is nested too deeply to parse.
    ///
    /// Openers and closers are balanced, so a construct that opened levels is skipped through
    /// its matching closer. With no level open, an unmatched closer or an `end` token stops the
    /// skip without being consumed.
    fn skip_nested(&mut self, sync: NestingSync) {
        let mut open = 0usize;
        let mut skipped = 0usize;
        while self.sym != SymbolId::Eof {
            if sync.open.contains(self.sym) {
                open += 1;
            } else if sync.close.contains(self.sym) {
                if open == 0 {
                    break;
                }
                open -= 1;
                if open == 0 {
                    self.advance();
                    skipped += 1;
                    break;
                }
            } else if open == 0 && sync.end.contains(self.sym) {
                break;
            }
            self.advance();
            skipped += 1;
        }
        self.err_dist = 0;
        tracing::debug!(skipped, resume_at = %self.sym, "skipped nested construct");
    }

    // ========================================================================
    // Repetition and nesting
    // ========================================================================

    /// Run `body` one nesting level deeper.
    ///
    /// At `max_depth` the construct is reported as `nesting too deep` and skipped instead, and
    /// `None` is returned.
    fn nested<T>(&mut self, sync: NestingSync, body: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth >= self.config.max_depth {
            self.report_error("nesting too deep");
            self.skip_nested(sync);
            return None;
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        Some(result)
    }

    /// Run `body` while the lookahead is in `first`.
    fn repeat_while(&mut self, first: SymbolSet, mut body: impl FnMut(&mut Self)) {
        while first.contains(self.sym) {
            let before = self.consumed;
            body(self);
            if !self.made_progress(before) {
                break;
            }
        }
    }

    /// Run `body` until the lookahead is in `stop` (or is `eof`).
    fn repeat_until(&mut self, stop: SymbolSet, mut body: impl FnMut(&mut Self)) {
        let stop = stop.with(SymbolId::Eof);
        while !stop.contains(self.sym) {
            let before = self.consumed;
            body(self);
            if !self.made_progress(before) {
                break;
            }
        }
    }

    /// Force one token of progress if nothing was consumed since `before`.
    ///
    /// Returns `false` only when stuck at `eof`.
    fn made_progress(&mut self, before: usize) -> bool {
        if self.consumed != before {
            return true;
        }
        if self.sym == SymbolId::Eof {
            return false;
        }
        tracing::debug!(token = %self.lookahead.describe(), "no progress in loop, skipping token");
        self.advance();
        true
    }
}
