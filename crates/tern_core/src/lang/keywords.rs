//! Define the reserved keyword vocabulary for the Tern language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings
//! and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Data type names (`int`, `bool`, …) are not keywords; they live in [`crate::lang::types`].
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("then"), Some(KeywordId::Then));
//! assert_eq!(keywords::as_str(KeywordId::Global), "global");
//! assert_eq!(keywords::from_str("If"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Then,
    Else,
    End,
    Do,
    Return,
    Break,

    // Bindings
    Global,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    /// Keywords that open or close a block (`then`, `do`, `else`, `end`).
    BlockDelimiter,
    Binding,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    // Block delimiters
    info(KeywordId::Then, "then", KeywordCategory::BlockDelimiter),
    info(KeywordId::Else, "else", KeywordCategory::BlockDelimiter),
    info(KeywordId::End, "end", KeywordCategory::BlockDelimiter),
    info(KeywordId::Do, "do", KeywordCategory::BlockDelimiter),
    // Bindings
    info(KeywordId::Global, "global", KeywordCategory::Binding),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a spelling to a keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_delimiters() {
        for id in [KeywordId::Then, KeywordId::Else, KeywordId::End, KeywordId::Do] {
            assert_eq!(category(id), KeywordCategory::BlockDelimiter);
        }
    }

    #[test]
    fn test_type_names_are_not_keywords() {
        assert_eq!(from_str("int"), None);
        assert_eq!(from_str("bool"), None);
    }
}
