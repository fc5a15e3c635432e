#![forbid(unsafe_code)]
//! Tern Programming Language Interpreter
//!
//! Tern is a small imperative language with `int`/`bool` variables, `if`/`else` branches and
//! functions. This crate provides the tree-walking interpreter, the canonical formatter, the AST dump
//! and the `tern` CLI on top of the `tern_syntax` frontend (lexer, parser, AST, diagnostics).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Resource limits**: Deep nesting and runaway recursion are reported as errors, never as stack
//!   overflows. The parser bounds nesting and operator chains (`CompileError::NestingTooDeep`,
//!   `CompileError::ChainTooLong`); the interpreter bounds call depth and the total evaluation depth
//!   across calls (`RuntimeError::CallDepthExceeded`, `RuntimeError::EvaluationTooDeep`).

pub mod cli;
pub mod dump;
pub mod format;
pub mod interpreter;

pub use tern_syntax::ast;
pub use tern_syntax::declarations;
pub use tern_syntax::diagnostics;
pub use tern_syntax::lexer;
pub use tern_syntax::parser;

pub use format::{FormatConfig, check_formatted, format_program, format_source, format_source_with_config};
pub use interpreter::{Interpreter, InterpreterOptions, RuntimeError, TernError, Value, run_source};
