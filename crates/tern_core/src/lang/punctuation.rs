//! Punctuation vocabulary.
//!
//! This module defines the non-operator punctuation tokens used by the lexer/parser: the
//! parenthesis pair and the list separator.
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(","), Some(PunctuationId::Comma));
//! assert_eq!(punctuation::as_str(PunctuationId::LParen), "(");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    /// List separator in argument and parameter lists.
    Comma,
    LParen,
    RParen,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo {
        id: PunctuationId::Comma,
        canonical: ",",
    },
    PunctuationInfo {
        id: PunctuationId::LParen,
        canonical: "(",
    },
    PunctuationInfo {
        id: PunctuationId::RParen,
        canonical: ")",
    },
];

/// Return the canonical spelling for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: PunctuationId) -> &'static str {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.canonical)
        .expect("punctuation info missing")
}

/// Resolve a spelling to a punctuation id.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}
