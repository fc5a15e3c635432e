//! Token types for the Tern lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Type(DataTypeId)` for data type names
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for parentheses and the list separator

use std::fmt;

use crate::ast::Span;
use tern_core::lang::keywords::{self, KeywordId};
use tern_core::lang::operators::{self, OperatorId};
use tern_core::lang::punctuation::{self, PunctuationId};
use tern_core::lang::types::{self, DataTypeId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    Type(DataTypeId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Number(i64),

    // ========== Layout ==========
    Newline,
    Eof,
}

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }
}

/// Human-readable description used in "expected X, found Y" diagnostics.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Type(id) => write!(f, "type '{}'", types::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Classify a word: keyword, data type name, or plain identifier.
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(id) = keywords::from_str(word) {
        TokenKind::Keyword(id)
    } else if let Some(id) = types::from_str(word) {
        TokenKind::Type(id)
    } else {
        TokenKind::Ident(word.to_string())
    }
}
