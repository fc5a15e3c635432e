//! Builtin data type names.
//!
//! Type names are lexed as their own token class (not identifiers, not keywords). Only `int` and
//! `bool` have runtime storage; `float` and `string` are recognised so programs using them fail
//! with a precise "unsupported type" error instead of an "unknown identifier" one.
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::types::{self, DataTypeId};
//!
//! assert_eq!(types::from_str("bool"), Some(DataTypeId::Bool));
//! assert!(DataTypeId::Int.is_supported());
//! assert!(!DataTypeId::Float.is_supported());
//! ```

use std::fmt;

/// Stable identifier for every builtin data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeId {
    Int,
    Bool,
    Float,
    String,
}

impl DataTypeId {
    /// Return `true` if values of this type can be stored at runtime.
    pub fn is_supported(self) -> bool {
        info_for(self).supported
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a data type.
#[derive(Debug, Clone, Copy)]
pub struct DataTypeInfo {
    pub id: DataTypeId,
    pub canonical: &'static str,
    pub supported: bool,
}

/// Registry of all builtin data types.
pub const DATA_TYPES: &[DataTypeInfo] = &[
    DataTypeInfo {
        id: DataTypeId::Int,
        canonical: "int",
        supported: true,
    },
    DataTypeInfo {
        id: DataTypeId::Bool,
        canonical: "bool",
        supported: true,
    },
    DataTypeInfo {
        id: DataTypeId::Float,
        canonical: "float",
        supported: false,
    },
    DataTypeInfo {
        id: DataTypeId::String,
        canonical: "string",
        supported: false,
    },
];

/// Return the full metadata entry for a data type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DataTypeId) -> &'static DataTypeInfo {
    DATA_TYPES.iter().find(|t| t.id == id).expect("data type info missing")
}

/// Return the canonical spelling for a data type.
pub fn as_str(id: DataTypeId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a spelling to a data type id.
pub fn from_str(s: &str) -> Option<DataTypeId> {
    DATA_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}
