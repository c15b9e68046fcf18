/// Expression productions.
///
/// ```text
/// Designator = ident { "." ident | "[" Expr "]" }
/// Expr       = [ "-" ] Term { ( "+" | "-" ) Term }
/// Term       = Factor { ( "*" | "/" | "%" ) Factor }
/// Factor     = Designator [ ActPars ] | number | charConst
///            | "new" ident [ "[" Expr "]" ] | "(" Expr ")"
/// ActPars    = "(" [ Expr { "," Expr } ] ")"
/// Condition  = Expr Relop Expr
/// Relop      = "==" | "!=" | "<" | "<=" | ">" | ">="
/// ```
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn designator(&mut self) {
        self.expect(SymbolId::Ident);
        self.repeat_while(DESIGNATOR_SUFFIX, |p| {
            if p.sym == SymbolId::Period {
                p.expect(SymbolId::Period);
                p.expect(SymbolId::Ident);
            } else {
                p.expect(SymbolId::LBrack);
                p.expr();
                p.expect(SymbolId::RBrack);
            }
        });
    }

    fn expr(&mut self) {
        self.nested(EXPR_NESTING, |p| {
            if p.sym == SymbolId::Minus {
                p.expect(SymbolId::Minus);
            }
            p.term();
            p.repeat_while(ADDOPS, |p| {
                let op = p.sym;
                p.expect(op);
                p.term();
            });
        });
    }

    fn term(&mut self) {
        self.factor();
        self.repeat_while(MULOPS, |p| {
            let op = p.sym;
            p.expect(op);
            p.factor();
        });
    }

    fn factor(&mut self) {
        match self.sym {
            SymbolId::Ident => {
                self.designator();
                if self.sym == SymbolId::LPar {
                    self.act_pars();
                }
            }
            SymbolId::Number | SymbolId::CharCon => {
                let literal = self.sym;
                self.expect(literal);
            }
            SymbolId::New => {
                self.expect(SymbolId::New);
                self.expect(SymbolId::Ident);
                if self.sym == SymbolId::LBrack {
                    self.expect(SymbolId::LBrack);
                    self.expr();
                    self.expect(SymbolId::RBrack);
                }
            }
            SymbolId::LPar => {
                self.expect(SymbolId::LPar);
                self.expr();
                self.expect(SymbolId::RPar);
            }
            _ => self.report_error("invalid factor"),
        }
    }

    fn act_pars(&mut self) {
        self.expect(SymbolId::LPar);
        if self.sets.expr_start.contains(self.sym) {
            self.expr();
            self.repeat_while(COMMA, |p| {
                p.expect(SymbolId::Comma);
                p.expr();
            });
        }
        self.expect(SymbolId::RPar);
    }

    fn condition(&mut self) {
        self.expr();
        self.relop();
        self.expr();
    }

    fn relop(&mut self) {
        if RELOPS.contains(self.sym) {
            let op = self.sym;
            self.expect(op);
        } else {
            self.report_error("relational operator expected");
        }
    }
}
