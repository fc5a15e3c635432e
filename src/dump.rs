//! Indented AST dump.
//!
//! One node per line, children indented two spaces below their parent. Binary nodes show their
//! operator and cached precedence, so the dump exposes exactly how an expression was grouped.
//! Spans are left out: two trees that differ only in source positions dump identically.

use crate::ast::*;
use tern_core::lang::types;

/// Render `program` as an indented tree.
pub fn dump_program(program: &Program) -> String {
    let mut dumper = Dumper::default();
    dumper.line(0, "Program");
    dumper.block(1, &program.body);
    dumper.out
}

#[derive(Default)]
struct Dumper {
    out: String,
}

impl Dumper {
    fn line(&mut self, depth: usize, text: &str) {
        self.out.extend(std::iter::repeat_n(' ', depth * 2));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn block(&mut self, depth: usize, block: &Block) {
        for stmt in &block.statements {
            self.statement(depth, &stmt.node);
        }
    }

    fn statement(&mut self, depth: usize, stmt: &Statement) {
        match stmt {
            Statement::Declaration(decl) => {
                self.line(depth, &var_decl_header("Declaration", decl));
                if let Some(value) = &decl.value {
                    self.expr(depth + 1, &value.node);
                }
            }
            Statement::Assignment(assign) => {
                self.line(depth, &format!("Assignment {}", assign.name));
                self.expr(depth + 1, &assign.value.node);
            }
            Statement::Function(func) => {
                let header = format!("FunctionDeclaration {} {}", types::as_str(func.return_type), func.name);
                self.line(depth, &header);
                for param in &func.params {
                    self.line(depth + 1, &var_decl_header("Param", &param.node));
                }
                self.line(depth + 1, "Body");
                self.block(depth + 2, &func.body);
            }
            Statement::Call(call) => self.call(depth, call),
            Statement::Branch(branch) => {
                self.line(depth, "Branch");
                self.expr(depth + 1, &branch.condition.node);
                self.line(depth + 1, "Then");
                self.block(depth + 2, &branch.then_block);
                if let Some(else_block) = &branch.else_block {
                    self.line(depth + 1, "Else");
                    self.block(depth + 2, else_block);
                }
            }
            Statement::Return(value) => {
                self.line(depth, "Return");
                if let Some(value) = value {
                    self.expr(depth + 1, &value.node);
                }
            }
            Statement::Break => self.line(depth, "Break"),
        }
    }

    fn expr(&mut self, depth: usize, expr: &Expr) {
        match expr {
            Expr::Number(n) => self.line(depth, &format!("Number {n}")),
            Expr::Bool(b) => self.line(depth, &format!("Bool {b}")),
            Expr::Ident(name) => self.line(depth, &format!("Identifier {name}")),
            Expr::Binary(binary) => {
                let header = format!("BinaryOperation {} (precedence {})", binary.op(), binary.precedence());
                self.line(depth, &header);
                self.expr(depth + 1, &binary.left.node);
                self.expr(depth + 1, &binary.right.node);
            }
            Expr::Paren(inner) => {
                self.line(depth, "ParenGroup");
                self.expr(depth + 1, &inner.node);
            }
            Expr::Call(call) => self.call(depth, call),
        }
    }

    fn call(&mut self, depth: usize, call: &CallExpr) {
        self.line(depth, &format!("FunctionCall {} ({} args)", call.name, call.args.len()));
        for arg in &call.args {
            self.expr(depth + 1, &arg.node);
        }
    }
}

fn var_decl_header(label: &str, decl: &VarDecl) -> String {
    let global = if decl.is_global { "global " } else { "" };
    format!("{label} {global}{} {}", types::as_str(decl.ty), decl.name)
}
