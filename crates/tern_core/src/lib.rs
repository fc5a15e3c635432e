//! Canonical language vocabulary for the Tern parser and interpreter.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the syntax frontend
//! and the interpreter consult, so spellings and operator precedence are defined exactly once.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no AST types.
//! - Callers work with stable ids (`KeywordId`, `OperatorId`, …) instead of comparing strings.

pub mod lang;
