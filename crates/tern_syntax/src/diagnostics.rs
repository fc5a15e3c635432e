//! Compile-time diagnostics for Tern
//!
//! Lexing and parsing stop at the first error: there is no recovery, so every fallible
//! frontend entry point returns a single [`CompileError`]. Each variant carries the [`Span`] of the
//! offending token, which doubles as a `miette` label for rendering.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;

/// A lexing or parsing failure with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    /// The source contains a character sequence that is not a token.
    #[error("{message}")]
    #[diagnostic(code(tern::lex))]
    Lex {
        message: String,
        #[label("here")]
        span: Span,
    },

    /// The token stream does not match the grammar.
    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(tern::syntax))]
    Syntax {
        expected: String,
        found: String,
        #[label("unexpected token")]
        span: Span,
    },

    /// A name was used before any visible declaration.
    #[error("use of undeclared identifier '{name}'")]
    #[diagnostic(
        code(tern::undeclared_identifier),
        help("names must be declared before use, in this block or an enclosing one")
    )]
    UndeclaredIdentifier {
        name: String,
        #[label("not declared in this scope")]
        span: Span,
    },

    /// Parentheses, call arguments, operator chains or blocks nest deeper than the configured limit.
    #[error("nesting exceeds the limit of {limit} levels")]
    #[diagnostic(code(tern::nesting_too_deep))]
    NestingTooDeep {
        limit: usize,
        #[label("too deeply nested")]
        span: Span,
    },

    /// One expression strings together more binary operators than the configured limit.
    #[error("expression has more than {limit} binary operators")]
    #[diagnostic(code(tern::chain_too_long), help("split the expression over several statements"))]
    ChainTooLong {
        limit: usize,
        #[label("operator past the limit")]
        span: Span,
    },
}

impl CompileError {
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        CompileError::Lex {
            message: message.into(),
            span,
        }
    }

    pub fn syntax(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        CompileError::Syntax {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    pub fn undeclared(name: impl Into<String>, span: Span) -> Self {
        CompileError::UndeclaredIdentifier {
            name: name.into(),
            span,
        }
    }

    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            CompileError::Lex { span, .. }
            | CompileError::Syntax { span, .. }
            | CompileError::UndeclaredIdentifier { span, .. }
            | CompileError::NestingTooDeep { span, .. }
            | CompileError::ChainTooLong { span, .. } => *span,
        }
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> usize {
        self.span().line
    }

    /// 1-based column of the offending token.
    pub fn column(&self) -> usize {
        self.span().column
    }
}
