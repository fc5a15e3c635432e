//! Parser for the Tern programming language
//!
//! Converts a token stream into an AST [`Program`]. Statements are parsed by recursive descent;
//! expressions are first read as a right-leaning operator chain and then rebalanced into a
//! precedence-correct tree (see [`rebalance`]).
//!
//! ## Examples
//!
//! ```rust
//! use tern_syntax::{lexer, parser};
//!
//! let source = "int x = 2 + 3 * 4\nif x > 10 then\n  x = 0\nend\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.body.statements.len(), 2);
//! ```

use crate::ast::*;
use crate::declarations::{DeclKind, DeclarationTable};
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use tern_core::lang::keywords::{self, KeywordId};
use tern_core::lang::operators::OperatorId;
use tern_core::lang::punctuation::PunctuationId;
use tern_core::lang::types::DataTypeId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
