/// Statement productions.
///
/// ```text
/// Block     = "{" { Statement } "}"
/// Statement = Designator ( "=" Expr | ActPars ) ";"
///           | "if" "(" Condition ")" Statement [ "else" Statement ]
///           | "while" "(" Condition ")" Statement
///           | "return" [ Expr ] ";"
///           | "read" "(" Designator ")" ";"
///           | "print" "(" Expr [ "," number ] ")" ";"
///           | Block
///           | ";"
/// ```
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) {
        self.expect(SymbolId::LBrace);
        let follow = self.sets.stat_seq_follow;
        self.repeat_until(follow, |p| {
            p.statement();
        });
        self.expect(SymbolId::RBrace);
    }

    /// Parse one statement and return its form.
    ///
    /// Returns `None` when the lookahead cannot start a statement and recovery stopped at a
    /// token that ends the statement sequence instead, or when the statement was skipped for
    /// nesting too deeply.
    fn statement(&mut self) -> Option<StatementKind> {
        if !self.sets.stat_start.contains(self.sym) {
            self.report_error("invalid start of statement");
            let stop = self.sets.stat_start.union(self.sets.stat_seq_follow);
            self.skip_until(stop);
            if !self.sets.stat_start.contains(self.sym) {
                return None;
            }
        }

        let kind = self.nested(STATEMENT_NESTING, |p| match p.sym {
            SymbolId::Ident => p.designator_statement(),
            SymbolId::If => p.if_statement(),
            SymbolId::While => p.while_statement(),
            SymbolId::Return => p.return_statement(),
            SymbolId::Read => p.read_statement(),
            SymbolId::Print => p.print_statement(),
            SymbolId::LBrace => {
                p.block();
                StatementKind::Block
            }
            // `;` is the only member of stat_start left.
            _ => {
                p.expect(SymbolId::Semicolon);
                StatementKind::Empty
            }
        })?;
        tracing::debug!(?kind, line = self.current.line, "statement");
        Some(kind)
    }

    fn designator_statement(&mut self) -> StatementKind {
        self.designator();
        let kind = match self.sym {
            SymbolId::Assign => {
                self.expect(SymbolId::Assign);
                self.expr();
                StatementKind::Assign
            }
            SymbolId::LPar => {
                self.act_pars();
                StatementKind::Call
            }
            _ => {
                self.report_error("invalid assignment or call");
                StatementKind::Assign
            }
        };
        self.expect(SymbolId::Semicolon);
        kind
    }

    fn if_statement(&mut self) -> StatementKind {
        self.expect(SymbolId::If);
        self.expect(SymbolId::LPar);
        self.condition();
        self.expect(SymbolId::RPar);
        self.statement();
        if self.sym == SymbolId::Else {
            self.expect(SymbolId::Else);
            self.statement();
        }
        StatementKind::If
    }

    fn while_statement(&mut self) -> StatementKind {
        self.expect(SymbolId::While);
        self.expect(SymbolId::LPar);
        self.condition();
        self.expect(SymbolId::RPar);
        self.statement();
        StatementKind::While
    }

    fn return_statement(&mut self) -> StatementKind {
        self.expect(SymbolId::Return);
        if self.sets.expr_start.contains(self.sym) {
            self.expr();
        }
        self.expect(SymbolId::Semicolon);
        StatementKind::Return
    }

    fn read_statement(&mut self) -> StatementKind {
        self.expect(SymbolId::Read);
        self.expect(SymbolId::LPar);
        self.designator();
        self.expect(SymbolId::RPar);
        self.expect(SymbolId::Semicolon);
        StatementKind::Read
    }

    fn print_statement(&mut self) -> StatementKind {
        self.expect(SymbolId::Print);
        self.expect(SymbolId::LPar);
        self.expr();
        if self.sym == SymbolId::Comma {
            self.expect(SymbolId::Comma);
            self.expect(SymbolId::Number);
        }
        self.expect(SymbolId::RPar);
        self.expect(SymbolId::Semicolon);
        StatementKind::Print
    }
}
