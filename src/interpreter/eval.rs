//! Expression evaluation and function calls.

use crate::ast::{BinaryExpr, BinaryOp, CallExpr, Expr, Span, Spanned};
use tern_core::lang::types::DataTypeId;

use super::ArithmeticFault;
use super::exec::{Flow, expect_type};
use super::scope::Frame;
use super::{Interpreter, RuntimeError, Value};

impl Interpreter {
    pub(super) fn eval(&mut self, expr: &Spanned<Expr>) -> Result<Value, RuntimeError> {
        self.nested(expr.span, |interp| interp.eval_node(expr))
    }

    /// Run `f` one evaluation level deeper, failing once the configured limit is reached.
    pub(super) fn nested<T>(
        &mut self,
        span: Span,
        f: impl FnOnce(&mut Self) -> Result<T, RuntimeError>,
    ) -> Result<T, RuntimeError> {
        if self.eval_depth >= self.options.max_eval_depth {
            return Err(RuntimeError::EvaluationTooDeep {
                limit: self.options.max_eval_depth,
                span,
            });
        }
        self.eval_depth += 1;
        let result = f(self);
        self.eval_depth -= 1;
        result
    }

    fn eval_node(&mut self, expr: &Spanned<Expr>) -> Result<Value, RuntimeError> {
        match &expr.node {
            Expr::Number(n) => Ok(Value::Int(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Ident(name) => self.scopes.lookup(name).ok_or_else(|| RuntimeError::UnboundVariable {
                name: name.clone(),
                span: expr.span,
            }),
            Expr::Paren(inner) => self.eval(inner),
            Expr::Binary(binary) => self.eval_binary(binary, expr.span),
            Expr::Call(call) => self.call(call, expr.span),
        }
    }

    fn eval_binary(&mut self, binary: &BinaryExpr, span: Span) -> Result<Value, RuntimeError> {
        let left = self.eval(&binary.left)?;
        let right = self.eval(&binary.right)?;
        let a = int_operand(left, binary.left.span)?;
        let b = int_operand(right, binary.right.span)?;

        let arithmetic = |result: Option<i64>, fault| {
            result
                .map(Value::Int)
                .ok_or(RuntimeError::Arithmetic { fault, span })
        };

        match binary.op() {
            BinaryOp::Add => arithmetic(a.checked_add(b), ArithmeticFault::Overflow),
            BinaryOp::Sub => arithmetic(a.checked_sub(b), ArithmeticFault::Overflow),
            BinaryOp::Mul => arithmetic(a.checked_mul(b), ArithmeticFault::Overflow),
            BinaryOp::Div if b == 0 => arithmetic(None, ArithmeticFault::DivisionByZero),
            // Truncates toward zero; only i64::MIN / -1 overflows.
            BinaryOp::Div => arithmetic(a.checked_div(b), ArithmeticFault::Overflow),
            BinaryOp::Eq => Ok(Value::Bool(a == b)),
            BinaryOp::NotEq => Ok(Value::Bool(a != b)),
            BinaryOp::Lt => Ok(Value::Bool(a < b)),
            BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
            BinaryOp::Gt => Ok(Value::Bool(a > b)),
            BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        }
    }

    /// Call a function and return its value.
    ///
    /// Arguments are evaluated left to right in the caller's scope. The body then runs in a single
    /// fresh frame holding the parameters, with only the frames up to the function's defining frame
    /// visible; the caller's frames are reattached on every exit path.
    pub(super) fn call(&mut self, call: &CallExpr, span: Span) -> Result<Value, RuntimeError> {
        let (defined_at, function) = self
            .scopes
            .function(&call.name)
            .ok_or_else(|| RuntimeError::UnboundFunction {
                name: call.name.clone(),
                span,
            })?;

        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push((self.eval(arg)?, arg.span));
        }

        if args.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch {
                name: call.name.clone(),
                expected: function.params.len(),
                found: args.len(),
                span,
            });
        }
        if self.call_depth >= self.options.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded {
                limit: self.options.max_call_depth,
                span,
            });
        }

        let mut frame = Frame::new();
        for (param, (value, arg_span)) in function.params.iter().zip(args) {
            if !param.node.ty.is_supported() {
                return Err(RuntimeError::UnsupportedType {
                    ty: param.node.ty,
                    span: param.span,
                });
            }
            expect_type(param.node.ty, value, arg_span)?;
            frame.bind(&param.node.name, value);
        }

        tracing::debug!(function = %call.name, depth = self.call_depth + 1, "call");
        let hidden = self.scopes.hide_above(defined_at);
        self.scopes.push_frame(frame);
        self.call_depth += 1;
        let flow = self.nested(span, |interp| interp.exec_statements(&function.body));
        self.call_depth -= 1;
        self.scopes.restore(hidden);

        match flow? {
            Flow::Return(Some(value)) => {
                expect_type(function.return_type, value, span)?;
                Ok(value)
            }
            Flow::Return(None) | Flow::Normal | Flow::Break => Err(RuntimeError::MissingReturn {
                name: call.name.clone(),
                span,
            }),
        }
    }
}

fn int_operand(value: Value, span: Span) -> Result<i64, RuntimeError> {
    value.as_int().ok_or(RuntimeError::TypeMismatch {
        expected: DataTypeId::Int,
        found: value.data_type(),
        span,
    })
}
