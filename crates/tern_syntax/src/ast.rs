//! Abstract Syntax Tree definitions for Tern
//!
//! The tree is a closed set of enums matched exhaustively by every consumer (parser, formatter,
//! dump, interpreter). Each node owns its children; there is no sharing and no parent pointer.

use std::fmt;

use tern_core::lang::operators::{self, OperatorId};
use tern_core::lang::types::DataTypeId;

/// Source location span (byte offsets plus the 1-based line/column of `start`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Smallest span covering both `self` and `other`; the position is taken from whichever starts first.
    pub fn merge(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A program is the top-level block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Block,
}

/// An ordered list of statements.
///
/// Every block except the program body gets its own scope frame at runtime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(VarDecl),
    Assignment(Assignment),
    Function(FunctionDecl),
    Call(CallExpr),
    Branch(Branch),
    /// `return [expr]`
    Return(Option<Spanned<Expr>>),
    /// `break`: leaves the innermost enclosing branch
    Break,
}

/// `[global] TYPE name [= value]`; also used for function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Ident,
    pub ty: DataTypeId,
    pub is_global: bool,
    pub value: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: Ident,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Ident,
    pub return_type: DataTypeId,
    pub params: Vec<Spanned<VarDecl>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub condition: Spanned<Expr>,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(i64),
    Bool(bool),
    Ident(Ident),
    Binary(BinaryExpr),
    /// A parenthesised sub-expression. Rebalancing treats it as a single operand.
    Paren(Box<Spanned<Expr>>),
    Call(CallExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: Ident,
    pub args: Vec<Spanned<Expr>>,
}

/// A binary operation.
///
/// `op` and `precedence` are fixed at construction; only `left` and `right` may be rewired
/// afterwards (the parser rotates them while rebalancing).
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Spanned<Expr>>,
    pub right: Box<Spanned<Expr>>,
    op: BinaryOp,
    precedence: u8,
}

impl BinaryExpr {
    pub fn new(left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
            op,
            precedence: op.precedence(),
        }
    }

    /// Build the node and wrap it in a span covering both operands.
    pub fn spanned(left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Spanned<Expr> {
        let span = left.span.merge(right.span);
        Spanned::new(Expr::Binary(Self::new(left, op, right)), span)
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// Precedence cached from the operator table when the node was built.
    pub fn precedence(&self) -> u8 {
        self.precedence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// Map an operator token to a binary operator (`=` is not one).
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Eq => return None,
        })
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
        }
    }

    /// Precedence from the operator registry (every `BinaryOp` maps to a binary operator).
    pub fn precedence(self) -> u8 {
        operators::binary_precedence(self.operator_id()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        operators::as_str(self.operator_id())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64, start: usize) -> Spanned<Expr> {
        Spanned::new(Expr::Number(n), Span::new(start, start + 1, 1, start + 1))
    }

    #[test]
    fn test_binary_caches_precedence() {
        let node = BinaryExpr::new(num(1, 0), BinaryOp::Mul, num(2, 4));
        assert_eq!(node.precedence(), 3);
        assert_eq!(BinaryExpr::new(num(1, 0), BinaryOp::Lt, num(2, 4)).precedence(), 1);
    }

    #[test]
    fn test_spanned_binary_covers_operands() {
        let expr = BinaryExpr::spanned(num(1, 0), BinaryOp::Add, num(2, 4));
        assert_eq!(expr.span, Span::new(0, 5, 1, 1));
    }

    #[test]
    fn test_merge_keeps_earliest_position() {
        let a = Span::new(10, 12, 2, 3);
        let b = Span::new(4, 5, 1, 5);
        assert_eq!(a.merge(b), Span::new(4, 12, 1, 5));
    }

    #[test]
    fn test_every_binary_op_has_a_registry_precedence() {
        use BinaryOp::*;
        for op in [Add, Sub, Mul, Div, Eq, NotEq, Lt, LtEq, Gt, GtEq] {
            assert_eq!(Some(op.precedence()), operators::binary_precedence(op.operator_id()), "{op}");
            assert!(op.precedence() > 0, "{op}");
        }
    }

    #[test]
    fn test_assignment_operator_is_not_binary() {
        assert_eq!(BinaryOp::from_operator(OperatorId::Eq), None);
        assert_eq!(BinaryOp::from_operator(OperatorId::GtEq), Some(BinaryOp::GtEq));
    }
}
