//! Runtime values.

use std::fmt;

use tern_core::lang::types::DataTypeId;

/// A value held in a variable cell or produced by an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
}

impl Value {
    /// The value a declaration without initializer starts with, or `None` if `ty` has no runtime storage.
    pub fn zero(ty: DataTypeId) -> Option<Value> {
        match ty {
            DataTypeId::Int => Some(Value::Int(0)),
            DataTypeId::Bool => Some(Value::Bool(false)),
            DataTypeId::Float | DataTypeId::String => None,
        }
    }

    pub fn data_type(self) -> DataTypeId {
        match self {
            Value::Int(_) => DataTypeId::Int,
            Value::Bool(_) => DataTypeId::Bool,
        }
    }

    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n),
            Value::Bool(_) => None,
        }
    }

    /// Branch truth: `true`, or any nonzero integer.
    pub fn is_truthy(self) -> bool {
        match self {
            Value::Int(n) => n != 0,
            Value::Bool(b) => b,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(Value::zero(DataTypeId::Int), Some(Value::Int(0)));
        assert_eq!(Value::zero(DataTypeId::Bool), Some(Value::Bool(false)));
        assert_eq!(Value::zero(DataTypeId::Float), None);
        assert_eq!(Value::zero(DataTypeId::String), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Int(-3).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn test_accessors_are_type_checked() {
        assert_eq!(Value::Int(4).as_int(), Some(4));
        assert_eq!(Value::Bool(true).as_int(), None);
        assert_eq!(Value::Bool(true).data_type(), DataTypeId::Bool);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }
}
