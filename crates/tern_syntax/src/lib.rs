//! Syntax frontend for the Tern language: lexer, parser, AST, declaration table, diagnostics.
//!
//! This crate is dependency-light and shared by the interpreter, the formatter and the fuzz target.
//!
//! ## Notes
//! - This crate is “syntax-only”: it checks declare-before-use while parsing, but it does not evaluate anything.
//! - Vocabulary identity (keywords/operators/punctuation/types) comes from `tern_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use tern_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int x = 2 - 3 - 4\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.body.statements.len(), 1);
//! ```
//!
//! ## See also
//! - `tern_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod declarations;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
