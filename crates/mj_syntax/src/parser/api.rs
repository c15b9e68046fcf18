/// Parse a token source with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: Any [`TokenSource`], e.g. a [`crate::lexer::Lexer`] or a
///   [`crate::source::TokenStream`].
#[tracing::instrument(skip_all)]
pub fn parse<S: TokenSource>(source: S) -> ParseReport {
    Parser::new(source, ParserConfig::default()).parse()
}

/// Parse a token source with an explicit configuration.
#[tracing::instrument(skip_all, fields(trace = config.trace, min_error_distance = config.min_error_distance))]
pub fn parse_with_config<S: TokenSource>(source: S, config: &ParserConfig) -> ParseReport {
    Parser::new(source, config.clone()).parse()
}
