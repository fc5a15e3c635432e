/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `tern_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`CompileError`] if parsing fails.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, CompileError> {
    Parser::new(tokens).parse()
}

/// Like [`parse`], with explicit [`ParseOptions`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), max_depth = options.max_depth))]
pub fn parse_with_options(tokens: &[Token], options: ParseOptions) -> Result<Program, CompileError> {
    Parser::with_options(tokens, options).parse()
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str) -> Result<Program, CompileError> {
    let tokens = crate::lexer::lex(source)?;
    parse(&tokens)
}
