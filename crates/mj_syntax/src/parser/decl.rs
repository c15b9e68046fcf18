/// Declaration productions.
///
/// ```text
/// Program    = "program" ident { ConstDecl | ClassDecl | VarDecl } [ "{" { MethodDecl } "}" ]
/// ConstDecl  = "final" Type ident "=" ( number | charConst ) ";"
/// ClassDecl  = "class" ident "{" { VarDecl } "}"
/// VarDecl    = Type ident { "," ident } ";"
/// Type       = ident [ "[" "]" ]
/// MethodDecl = ( Type | "void" ) ident "(" [ FormPars ] ")" { VarDecl } Block
/// FormPars   = Type ident { "," Type ident }
/// ```
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn program(&mut self) {
        self.expect(SymbolId::Program);
        self.expect(SymbolId::Ident);

        let decl_follow = self.sets.decl_follow;
        self.repeat_until(decl_follow, |p| p.declaration());

        // A `void` here means the method section started without its brace; report the
        // missing `{` and parse the methods anyway.
        if matches!(self.sym, SymbolId::LBrace | SymbolId::Void) {
            self.expect(SymbolId::LBrace);
            self.repeat_while(METHOD_START, |p| p.method_decl());
            self.expect(SymbolId::RBrace);
        }
    }

    /// One global declaration, or recovery to the next declaration boundary.
    fn declaration(&mut self) {
        match self.sym {
            SymbolId::Final => self.const_decl(),
            SymbolId::Class => self.class_decl(),
            SymbolId::Ident => self.var_decl(),
            _ => {
                self.report_error("invalid declaration");
                let stop = self.sets.decl_start.union(self.sets.decl_follow);
                self.skip_until(stop);
            }
        }
    }

    fn const_decl(&mut self) {
        self.expect(SymbolId::Final);
        self.type_();
        self.expect(SymbolId::Ident);
        self.expect(SymbolId::Assign);
        match self.sym {
            SymbolId::Number | SymbolId::CharCon => {
                let literal = self.sym;
                self.expect(literal);
            }
            _ => self.report_error("invalid constant"),
        }
        self.expect(SymbolId::Semicolon);
    }

    fn class_decl(&mut self) {
        self.expect(SymbolId::Class);
        self.expect(SymbolId::Ident);
        self.expect(SymbolId::LBrace);
        self.repeat_while(TYPE_START, |p| p.var_decl());
        self.expect(SymbolId::RBrace);
    }

    fn var_decl(&mut self) {
        self.type_();
        self.expect(SymbolId::Ident);
        self.repeat_while(COMMA, |p| {
            p.expect(SymbolId::Comma);
            p.expect(SymbolId::Ident);
        });
        self.expect(SymbolId::Semicolon);
    }

    fn type_(&mut self) {
        self.expect(SymbolId::Ident);
        if self.sym == SymbolId::LBrack {
            self.expect(SymbolId::LBrack);
            self.expect(SymbolId::RBrack);
        }
    }

    fn method_decl(&mut self) {
        match self.sym {
            SymbolId::Void => self.expect(SymbolId::Void),
            SymbolId::Ident => self.type_(),
            _ => self.report_error("invalid method declaration"),
        }
        self.expect(SymbolId::Ident);
        self.expect(SymbolId::LPar);
        if TYPE_START.contains(self.sym) {
            self.form_pars();
        }
        self.expect(SymbolId::RPar);
        self.repeat_while(TYPE_START, |p| p.var_decl());
        self.block();
    }

    fn form_pars(&mut self) {
        self.type_();
        self.expect(SymbolId::Ident);
        self.repeat_while(COMMA, |p| {
            p.expect(SymbolId::Comma);
            p.type_();
            p.expect(SymbolId::Ident);
        });
    }
}
