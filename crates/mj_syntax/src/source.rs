//! The token-source seam between the scanner and the parser.
//!
//! The parser pulls exactly one token per window advance and never looks further ahead, so it
//! only needs a "produce next token" operation. [`crate::lexer::Lexer`] implements it by scanning
//! lazily; [`TokenStream`] adapts any pre-built sequence of tokens.

use mj_core::SymbolId;

use crate::lexer::{Span, Token};

/// Pull-based producer of tokens.
///
/// ## Contract
/// - Always returns a token; end of input is signalled by an [`SymbolId::Eof`] token, never by a
///   failure.
/// - Once `Eof` has been returned, every further call returns `Eof` again.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Adapt a sequence of tokens to [`TokenSource`].
///
/// If the sequence does not end with `Eof`, a synthetic `Eof` positioned at the last token is
/// produced once it is exhausted.
#[derive(Debug, Clone)]
pub struct TokenStream<I> {
    tokens: I,
    last: Option<Token>,
    eof: Option<Token>,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            tokens: tokens.into_iter(),
            last: None,
            eof: None,
        }
    }

    fn synthetic_eof(&self) -> Token {
        match &self.last {
            Some(last) => Token::new(
                SymbolId::Eof,
                last.line,
                last.col,
                Span::new(last.span.end, last.span.end),
            ),
            None => Token::new(SymbolId::Eof, 1, 1, Span::default()),
        }
    }
}

impl From<Vec<Token>> for TokenStream<std::vec::IntoIter<Token>> {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }
        let token = match self.tokens.next() {
            Some(token) => token,
            None => self.synthetic_eof(),
        };
        if token.is(SymbolId::Eof) {
            self.eof = Some(token.clone());
        } else {
            self.last = Some(token.clone());
        }
        token
    }
}
