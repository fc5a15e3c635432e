//! Tree-walking interpreter for Tern programs.
//!
//! The interpreter executes a parsed [`Program`] directly against a [`ScopeStack`]:
//! - the program body runs in the global frame (frame 0), which outlives [`Interpreter::run`]
//!   so callers can inspect the final variable values;
//! - every `if`/`else` block runs in a fresh frame that is popped on every exit path;
//! - a call runs the function body in one fresh frame holding its parameters, with only the frames
//!   up to the function's defining frame visible.
//!
//! ## Examples
//!
//! ```rust
//! use tern::interpreter::{self, Value};
//!
//! let interp = interpreter::run_source("int x = 2 - 3 - 4\nbool b = 3 < 5\n").unwrap();
//! assert_eq!(interp.get("x"), Some(Value::Int(-5)));
//! assert_eq!(interp.get("b"), Some(Value::Bool(true)));
//! ```

mod errors;
mod eval;
mod exec;
mod scope;
mod value;


pub use errors::{ArithmeticFault, RuntimeError, TernError};
pub use scope::{Frame, ScopeStack};
pub use value::Value;

use crate::ast::Program;
use crate::{lexer, parser};

/// Default bound on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 128;

/// Default bound on evaluation nesting: sub-expressions, branch blocks and call bodies, counted
/// across calls.
pub const DEFAULT_MAX_EVAL_DEPTH: usize = 2048;

/// Interpreter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Deepest call nesting accepted before failing with [`RuntimeError::CallDepthExceeded`].
    pub max_call_depth: usize,
    /// Deepest evaluation nesting accepted before failing with [`RuntimeError::EvaluationTooDeep`].
    pub max_eval_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_eval_depth: DEFAULT_MAX_EVAL_DEPTH,
        }
    }
}

impl InterpreterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum call depth
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// Set the maximum evaluation depth
    pub fn with_max_eval_depth(mut self, max_eval_depth: usize) -> Self {
        self.max_eval_depth = max_eval_depth;
        self
    }
}

/// Interpreter state: the scope stack plus call accounting.
#[derive(Debug, Default)]
pub struct Interpreter {
    scopes: ScopeStack,
    options: InterpreterOptions,
    call_depth: usize,
    eval_depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: InterpreterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Execute `program` in the global frame.
    ///
    /// A top-level `return` ends the program successfully. Bindings made by earlier runs stay
    /// visible, so one interpreter can run several programs in sequence.
    ///
    /// ## Errors
    /// Returns the first [`RuntimeError`]. Frames pushed during the failed run are already popped.
    #[tracing::instrument(skip_all, fields(statements = program.body.statements.len()))]
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.exec_statements(&program.body)?;
        Ok(())
    }

    /// Value of a variable in the global frame.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.scopes.global(name)
    }

    /// All variables of the global frame, sorted by name.
    pub fn globals(&self) -> Vec<(String, Value)> {
        self.scopes.globals()
    }

    /// Number of live frames, including the global frame.
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }
}

/// Lex, parse and run `source` with default options, returning the interpreter for inspection.
pub fn run_source(source: &str) -> Result<Interpreter, TernError> {
    let tokens = lexer::lex(source)?;
    let program = parser::parse(&tokens)?;
    let mut interpreter = Interpreter::new();
    interpreter.run(&program)?;
    Ok(interpreter)
}
