//! Core formatting logic for Tern source code
//!
//! Walks the AST and emits canonical source code.

use super::config::FormatConfig;
use super::writer::FormatWriter;
use crate::ast::*;
use tern_core::lang::types;

/// Formatter that transforms AST back to formatted source code
///
/// ## Notes
/// - Binary operations are printed flat, without added parentheses: the output re-parses to the same
///   tree only for trees that came out of the parser (where every explicit grouping is an [`Expr::Paren`]).
pub struct Formatter {
    writer: FormatWriter,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Format a program and return the formatted source
    pub fn format(mut self, program: &Program) -> String {
        self.format_block(&program.body);
        self.writer.finish()
    }

    // ========================================================================
    // Blocks and statements
    // ========================================================================

    fn format_block(&mut self, block: &Block) {
        let blank_lines = self.writer.config().blank_lines_around_functions;
        let mut prev_was_function = false;

        for (i, stmt) in block.statements.iter().enumerate() {
            let is_function = matches!(stmt.node, Statement::Function(_));
            if i > 0 && (is_function || prev_was_function) {
                self.writer.blank_lines(blank_lines);
            }
            self.format_statement(&stmt.node);
            prev_was_function = is_function;
        }
    }

    fn format_indented(&mut self, block: &Block) {
        self.writer.indent();
        self.format_block(block);
        self.writer.dedent();
    }

    fn format_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Declaration(decl) => {
                self.format_var_decl(decl);
                self.writer.newline();
            }
            Statement::Assignment(assign) => {
                self.writer.write(&assign.name);
                self.writer.write(" = ");
                self.format_expr(&assign.value.node);
                self.writer.newline();
            }
            Statement::Function(func) => self.format_function(func),
            Statement::Call(call) => {
                self.format_call(call);
                self.writer.newline();
            }
            Statement::Branch(branch) => self.format_branch(branch),
            Statement::Return(value) => {
                self.writer.write("return");
                if let Some(value) = value {
                    self.writer.write(" ");
                    self.format_expr(&value.node);
                }
                self.writer.newline();
            }
            Statement::Break => self.writer.writeln("break"),
        }
    }

    /// `[global] TYPE name [= value]`, without the line end.
    fn format_var_decl(&mut self, decl: &VarDecl) {
        if decl.is_global {
            self.writer.write("global ");
        }
        self.writer.write(types::as_str(decl.ty));
        self.writer.write(" ");
        self.writer.write(&decl.name);
        if let Some(value) = &decl.value {
            self.writer.write(" = ");
            self.format_expr(&value.node);
        }
    }

    fn format_function(&mut self, func: &FunctionDecl) {
        self.writer.write(types::as_str(func.return_type));
        self.writer.write(" ");
        self.writer.write(&func.name);
        self.writer.write("(");
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.writer.write(", ");
            }
            self.format_var_decl(&param.node);
        }
        self.writer.writeln(") do");
        self.format_indented(&func.body);
        self.writer.writeln("end");
    }

    fn format_branch(&mut self, branch: &Branch) {
        self.writer.write("if ");
        self.format_expr(&branch.condition.node);
        self.writer.writeln(" then");
        self.format_indented(&branch.then_block);
        if let Some(else_block) = &branch.else_block {
            self.writer.writeln("else");
            self.format_indented(else_block);
        }
        self.writer.writeln("end");
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn format_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(n) => self.writer.write(&n.to_string()),
            Expr::Bool(true) => self.writer.write("true"),
            Expr::Bool(false) => self.writer.write("false"),
            Expr::Ident(name) => self.writer.write(name),
            Expr::Binary(binary) => {
                self.format_expr(&binary.left.node);
                self.writer.write(" ");
                self.writer.write(binary.op().as_str());
                self.writer.write(" ");
                self.format_expr(&binary.right.node);
            }
            Expr::Paren(inner) => {
                self.writer.write("(");
                self.format_expr(&inner.node);
                self.writer.write(")");
            }
            Expr::Call(call) => self.format_call(call),
        }
    }

    fn format_call(&mut self, call: &CallExpr) {
        self.writer.write(&call.name);
        self.writer.write("(");
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                self.writer.write(", ");
            }
            self.format_expr(&arg.node);
        }
        self.writer.write(")");
    }
}
