/// Parser core types and entrypoint.
///
/// This chunk defines [`ParseOptions`], the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Default bound on combined nesting (parentheses, call arguments, operator chains, blocks).
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default bound on the number of binary operators in one expression chain.
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 256;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest nesting accepted before failing with [`CompileError::NestingTooDeep`].
    pub max_depth: usize,
    /// Most binary operators accepted in one chain before failing with [`CompileError::ChainTooLong`].
    pub max_chain_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum operator chain length
    pub fn with_max_chain_length(mut self, max_chain_length: usize) -> Self {
        self.max_chain_length = max_chain_length;
        self
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and stops at the first error; there is no recovery.
/// - The declaration table is owned by the parser, so independent parses never share state.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    declarations: DeclarationTable,
    options: ParseOptions,
    /// Current nesting depth, checked against `options.max_depth`
    depth: usize,
    /// Number of enclosing `if`/`else` blocks within the current function body
    branch_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `tern_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: &'a [Token], options: ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            declarations: DeclarationTable::new(),
            options,
            depth: 0,
            branch_depth: 0,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] encountered.
    pub fn parse(mut self) -> Result<Program, CompileError> {
        let body = self.program_block()?;
        Ok(Program { body })
    }
}
