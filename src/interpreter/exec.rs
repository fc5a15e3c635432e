//! Statement execution.

use std::rc::Rc;

use crate::ast::{Block, Branch, Span, Spanned, Statement, VarDecl};
use tern_core::lang::types::DataTypeId;

use super::{Interpreter, RuntimeError, Value};

/// How control leaves a statement sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Normal,
    /// Leave the innermost enclosing branch.
    Break,
    /// Leave the enclosing function (or the program) with an optional value.
    Return(Option<Value>),
}

impl Interpreter {
    /// Run `block` in a fresh frame, popping it again whatever the outcome.
    pub(super) fn exec_block(&mut self, block: &Block, span: Span) -> Result<Flow, RuntimeError> {
        self.nested(span, |interp| {
            interp.scopes.push();
            let flow = interp.exec_statements(block);
            interp.scopes.pop();
            flow
        })
    }

    /// Run `block` in the current frame.
    pub(super) fn exec_statements(&mut self, block: &Block) -> Result<Flow, RuntimeError> {
        for statement in &block.statements {
            let flow = self.exec_statement(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_statement(&mut self, statement: &Spanned<Statement>) -> Result<Flow, RuntimeError> {
        let span = statement.span;
        match &statement.node {
            Statement::Declaration(decl) => {
                let value = self.declared_value(decl, span)?;
                self.scopes.declare(&decl.name, value);
            }
            Statement::Assignment(assignment) => {
                let current = self
                    .scopes
                    .lookup(&assignment.name)
                    .ok_or_else(|| RuntimeError::UnboundVariable {
                        name: assignment.name.clone(),
                        span,
                    })?;
                let value = self.eval(&assignment.value)?;
                expect_type(current.data_type(), value, assignment.value.span)?;
                let cell = self
                    .scopes
                    .lookup_mut(&assignment.name)
                    .ok_or_else(|| RuntimeError::UnboundVariable {
                        name: assignment.name.clone(),
                        span,
                    })?;
                *cell = value;
            }
            Statement::Function(function) => {
                self.scopes.declare_function(&function.name, Rc::new(function.clone()));
            }
            Statement::Call(call) => {
                self.call(call, span)?;
            }
            Statement::Branch(branch) => return self.exec_branch(branch, span),
            Statement::Return(value) => {
                let value = value.as_ref().map(|expr| self.eval(expr)).transpose()?;
                return Ok(Flow::Return(value));
            }
            Statement::Break => return Ok(Flow::Break),
        }
        Ok(Flow::Normal)
    }

    /// Initial value of a declared variable: the initializer, or the zero value of its type.
    fn declared_value(&mut self, decl: &VarDecl, span: Span) -> Result<Value, RuntimeError> {
        let zero = Value::zero(decl.ty).ok_or(RuntimeError::UnsupportedType { ty: decl.ty, span })?;
        match &decl.value {
            Some(expr) => {
                let value = self.eval(expr)?;
                expect_type(decl.ty, value, expr.span)?;
                Ok(value)
            }
            None => Ok(zero),
        }
    }

    fn exec_branch(&mut self, branch: &Branch, span: Span) -> Result<Flow, RuntimeError> {
        let condition = self.eval(&branch.condition)?;
        let taken = if condition.is_truthy() {
            Some(&branch.then_block)
        } else {
            branch.else_block.as_ref()
        };
        let Some(block) = taken else {
            return Ok(Flow::Normal);
        };
        match self.exec_block(block, span)? {
            Flow::Break => Ok(Flow::Normal),
            flow => Ok(flow),
        }
    }
}

/// Check that `value` fits a cell of type `expected`.
pub(super) fn expect_type(expected: DataTypeId, value: Value, span: Span) -> Result<(), RuntimeError> {
    if value.data_type() == expected {
        Ok(())
    } else {
        Err(RuntimeError::TypeMismatch {
            expected,
            found: value.data_type(),
            span,
        })
    }
}
