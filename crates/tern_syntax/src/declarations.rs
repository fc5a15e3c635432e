//! Parse-time declaration table.
//!
//! Maps identifier names to what they were declared as ([`DeclKind`]) so the parser can tell a
//! variable reference from a function call and reject use-before-declare.
//!
//! ## Notes
//! - The table is a stack of scopes that mirrors the interpreter's frame discipline: every nested
//!   block opens a scope and drops it when the block closes. A name declared inside a branch is
//!   therefore not visible after the branch's `end`, matching what the interpreter can resolve.
//! - Redeclaration in the same scope silently replaces the previous kind.

use std::collections::HashMap;

/// What a name was declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Variable,
    Function,
}

/// Scoped name → [`DeclKind`] registry, populated in source order.
#[derive(Debug, Clone)]
pub struct DeclarationTable {
    scopes: Vec<HashMap<String, DeclKind>>,
}

impl Default for DeclarationTable {
    fn default() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` in the innermost scope, overwriting any earlier kind there.
    pub fn declare(&mut self, name: &str, kind: DeclKind) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), kind);
        }
    }

    /// Resolve `name`, searching from the innermost scope outwards.
    pub fn lookup(&self, name: &str) -> Option<DeclKind> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name).copied())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Drop the innermost scope. The outermost (program) scope is never dropped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Number of open scopes, including the program scope.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
