//! Runtime errors.
//!
//! Evaluation stops at the first error and the error is returned to the caller; the interpreter never
//! terminates the process. Every variant carries the [`Span`] of the statement or expression at fault.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;
use crate::diagnostics::CompileError;
use tern_core::lang::types::DataTypeId;

/// What went wrong in an integer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    DivisionByZero,
    Overflow,
}

impl fmt::Display for ArithmeticFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticFault::DivisionByZero => f.write_str("division by zero"),
            ArithmeticFault::Overflow => f.write_str("integer overflow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("variable '{name}' is not bound in any enclosing scope")]
    #[diagnostic(code(tern::unbound_variable))]
    UnboundVariable {
        name: String,
        #[label("not in scope here")]
        span: Span,
    },

    #[error("function '{name}' is not bound in any enclosing scope")]
    #[diagnostic(code(tern::unbound_function))]
    UnboundFunction {
        name: String,
        #[label("not in scope here")]
        span: Span,
    },

    #[error("type mismatch: expected {expected}, found {found}")]
    #[diagnostic(code(tern::type_mismatch))]
    TypeMismatch {
        expected: DataTypeId,
        found: DataTypeId,
        #[label("this is {found}")]
        span: Span,
    },

    #[error("arithmetic error: {fault}")]
    #[diagnostic(code(tern::arithmetic))]
    Arithmetic {
        fault: ArithmeticFault,
        #[label("{fault}")]
        span: Span,
    },

    #[error("type '{ty}' has no runtime representation")]
    #[diagnostic(code(tern::unsupported_type), help("only 'int' and 'bool' values can be stored"))]
    UnsupportedType {
        ty: DataTypeId,
        #[label("declared here")]
        span: Span,
    },

    #[error("function '{name}' takes {expected} argument(s) but {found} were given")]
    #[diagnostic(code(tern::arity_mismatch))]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        #[label("called here")]
        span: Span,
    },

    #[error("function '{name}' finished without returning a value")]
    #[diagnostic(code(tern::missing_return))]
    MissingReturn {
        name: String,
        #[label("called here")]
        span: Span,
    },

    #[error("call depth exceeds the limit of {limit}")]
    #[diagnostic(code(tern::call_depth_exceeded))]
    CallDepthExceeded {
        limit: usize,
        #[label("too deeply nested call")]
        span: Span,
    },

    /// Expressions, blocks and call bodies together nest deeper than the configured limit.
    #[error("evaluation nests deeper than {limit} levels")]
    #[diagnostic(
        code(tern::evaluation_too_deep),
        help("the limit can be raised with --max-eval-depth")
    )]
    EvaluationTooDeep {
        limit: usize,
        #[label("evaluation too deep here")]
        span: Span,
    },
}

impl RuntimeError {
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::UnboundVariable { span, .. }
            | RuntimeError::UnboundFunction { span, .. }
            | RuntimeError::TypeMismatch { span, .. }
            | RuntimeError::Arithmetic { span, .. }
            | RuntimeError::UnsupportedType { span, .. }
            | RuntimeError::ArityMismatch { span, .. }
            | RuntimeError::MissingReturn { span, .. }
            | RuntimeError::CallDepthExceeded { span, .. }
            | RuntimeError::EvaluationTooDeep { span, .. } => *span,
        }
    }
}

/// Any failure of a lex → parse → run pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TernError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}
