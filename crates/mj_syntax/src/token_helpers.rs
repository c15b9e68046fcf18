//! Small helper APIs for working with [`Token`] and [`TokenValue`].
//!
//! These keep call sites (trace output, JSON dumps, tests) from matching on the payload enum by
//! hand.

use mj_core::SymbolId;

use crate::lexer::{Token, TokenValue};

impl TokenValue {
    /// Identifier text, if this is an identifier payload.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            TokenValue::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Numeric value of a number or char constant.
    ///
    /// Char constants report their code point, matching how they are traced.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            TokenValue::Number(n) => Some(i64::from(*n)),
            TokenValue::Char(c) => Some(i64::from(u32::from(*c))),
            _ => None,
        }
    }
}

impl Token {
    /// Return `true` if this token has the given kind.
    pub fn is(&self, kind: SymbolId) -> bool {
        self.kind == kind
    }

    /// Identifier text, if this is an identifier.
    pub fn ident(&self) -> Option<&str> {
        self.value.as_ident()
    }

    /// Render the token the way the parser trace shows it: `<name> [(<lexeme-or-value>)]`.
    pub fn describe(&self) -> String {
        match (&self.kind, &self.value) {
            (SymbolId::Ident, TokenValue::Ident(name)) => format!("{} ({})", self.kind, name),
            (SymbolId::Number | SymbolId::CharCon, value) => match value.as_number() {
                Some(n) => format!("{} ({})", self.kind, n),
                None => self.kind.to_string(),
            },
            _ => self.kind.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Span;

    #[test]
    fn describe_includes_payload_only_when_relevant() {
        let ident = Token::new(SymbolId::Ident, 1, 1, Span::new(0, 3)).with_value(TokenValue::Ident("foo".into()));
        assert_eq!(ident.describe(), "identifier (foo)");

        let number = Token::new(SymbolId::Number, 1, 5, Span::new(4, 6)).with_value(TokenValue::Number(42));
        assert_eq!(number.describe(), "number (42)");

        let ch = Token::new(SymbolId::CharCon, 1, 8, Span::new(7, 10)).with_value(TokenValue::Char('a'));
        assert_eq!(ch.describe(), "char constant (97)");

        let semi = Token::new(SymbolId::Semicolon, 1, 11, Span::new(10, 11));
        assert_eq!(semi.describe(), ";");
    }

    #[test]
    fn accessors() {
        let ident = Token::new(SymbolId::Ident, 1, 1, Span::new(0, 1)).with_value(TokenValue::Ident("x".into()));
        assert!(ident.is(SymbolId::Ident));
        assert_eq!(ident.ident(), Some("x"));
        assert_eq!(TokenValue::None.as_number(), None);
    }
}
