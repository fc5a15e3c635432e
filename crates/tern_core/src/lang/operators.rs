//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the parser and
//! interpreter share: the fixed binary precedence table and the operator class (arithmetic,
//! comparison, assignment). Every binary operator is left-associative.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Precedence is a relative ordering where higher binds tighter:
//!   comparisons `1`, additive `2`, multiplicative `3`.
//! - `=` is an operator token but not a binary operator; [`binary_precedence`] returns `None` for it.
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::binary_precedence(OperatorId::Star), Some(3));
//! assert_eq!(operators::binary_precedence(OperatorId::Eq), None);
//! ```

/// Broad semantic class of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `+ - * /`: integer operands, integer result.
    Arithmetic,
    /// `== != < > <= >=`: integer operands, boolean result.
    Comparison,
    /// `=`: binds a value to a name; never appears inside an expression.
    Assignment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Eq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is `0` for operators that are not binary operators.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub class: OperatorClass,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", 2, OperatorClass::Arithmetic),
    op(OperatorId::Minus, "-", 2, OperatorClass::Arithmetic),
    op(OperatorId::Star, "*", 3, OperatorClass::Arithmetic),
    op(OperatorId::Slash, "/", 3, OperatorClass::Arithmetic),
    // Comparison
    op(OperatorId::EqEq, "==", 1, OperatorClass::Comparison),
    op(OperatorId::NotEq, "!=", 1, OperatorClass::Comparison),
    op(OperatorId::Lt, "<", 1, OperatorClass::Comparison),
    op(OperatorId::LtEq, "<=", 1, OperatorClass::Comparison),
    op(OperatorId::Gt, ">", 1, OperatorClass::Comparison),
    op(OperatorId::GtEq, ">=", 1, OperatorClass::Comparison),
    // Assignment
    op(OperatorId::Eq, "=", 0, OperatorClass::Assignment),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the fixed precedence of a binary operator, or `None` if `id` is not a binary operator.
pub fn binary_precedence(id: OperatorId) -> Option<u8> {
    let info = info_for(id);
    match info.class {
        OperatorClass::Arithmetic | OperatorClass::Comparison => Some(info.precedence),
        OperatorClass::Assignment => None,
    }
}

/// Return `true` if `id` can join two operands inside an expression.
pub fn is_binary(id: OperatorId) -> bool {
    binary_precedence(id).is_some()
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    class: OperatorClass,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        for id in [OperatorId::EqEq, OperatorId::NotEq, OperatorId::Lt, OperatorId::LtEq, OperatorId::Gt, OperatorId::GtEq] {
            assert_eq!(binary_precedence(id), Some(1), "{id:?}");
        }
        assert_eq!(binary_precedence(OperatorId::Plus), Some(2));
        assert_eq!(binary_precedence(OperatorId::Minus), Some(2));
        assert_eq!(binary_precedence(OperatorId::Star), Some(3));
        assert_eq!(binary_precedence(OperatorId::Slash), Some(3));
    }

    #[test]
    fn test_assignment_is_not_binary() {
        assert!(!is_binary(OperatorId::Eq));
        assert_eq!(info_for(OperatorId::Eq).class, OperatorClass::Assignment);
    }

    #[test]
    fn test_comparisons_share_lowest_precedence() {
        for info in OPERATORS.iter().filter(|o| o.class == OperatorClass::Comparison) {
            assert_eq!(binary_precedence(info.id), Some(1), "{:?}", info.id);
        }
    }
}
