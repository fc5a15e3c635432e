/// Statement and block parsing methods.
///
/// This chunk contains the recursive-descent statement driver: blocks, branches,
/// assignments, call statements, `return` and `break`.
///
/// ## Notes
/// - A block never consumes its terminator (`else`/`end`); the opener that started it does.
/// - `if`/`else` blocks open a declaration scope, mirroring the interpreter's frame discipline.
impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// Parse the top-level block, which runs until end of input.
    fn program_block(&mut self) -> Result<Block, CompileError> {
        let mut statements = Vec::new();
        loop {
            self.skip_newlines();
            if self.is_at_end() {
                break;
            }
            if self.check_keyword(KeywordId::Else) || self.check_keyword(KeywordId::End) {
                return Err(self.unexpected("statement"));
            }
            statements.push(self.statement()?);
        }
        Ok(Block { statements })
    }

    /// Parse statements up to (not including) the `else`/`end` belonging to the current opener.
    fn block(&mut self) -> Result<Block, CompileError> {
        self.nested(|p| {
            let mut statements = Vec::new();
            loop {
                p.skip_newlines();
                if p.check_keyword(KeywordId::Else) || p.check_keyword(KeywordId::End) {
                    break;
                }
                if p.is_at_end() {
                    return Err(p.unexpected("'end'"));
                }
                statements.push(p.statement()?);
            }
            Ok(Block { statements })
        })
    }

    /// A block with its own declaration scope.
    fn scoped_block(&mut self) -> Result<Block, CompileError> {
        self.declarations.enter_scope();
        let block = self.block();
        self.declarations.exit_scope();
        block
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        match &self.peek().kind {
            TokenKind::Type(_) | TokenKind::Keyword(KeywordId::Global) => self.declaration_stmt(),
            TokenKind::Keyword(KeywordId::If) => self.branch_stmt(),
            TokenKind::Keyword(KeywordId::Return) => self.return_stmt(),
            TokenKind::Keyword(KeywordId::Break) => self.break_stmt(),
            TokenKind::Ident(_) => self.identifier_stmt(),
            _ => Err(self.unexpected("statement")),
        }
    }

    /// Assignment (`name = expr`) or call statement (`name(args)`), decided by what `name` was
    /// declared as.
    fn identifier_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let (name, name_span) = self.identifier()?;

        match self.declarations.lookup(&name) {
            None => Err(CompileError::undeclared(name, name_span)),
            Some(DeclKind::Variable) => {
                self.expect_op(OperatorId::Eq, "'=' after variable name")?;
                let value = self.expression()?;
                let span = name_span.merge(value.span);
                self.expect_line_end()?;
                Ok(Spanned::new(Statement::Assignment(Assignment { name, value }), span))
            }
            Some(DeclKind::Function) => {
                let call = self.call_args(name)?;
                let span = name_span.merge(self.previous_span());
                self.expect_line_end()?;
                Ok(Spanned::new(Statement::Call(call), span))
            }
        }
    }

    /// `if cond then NEWLINE block [else NEWLINE block] end`
    fn branch_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.advance().span;
        let condition = self.expression()?;
        self.expect_keyword(KeywordId::Then)?;
        self.expect_newline("'then'")?;

        self.branch_depth += 1;
        let blocks = self.branch_blocks();
        self.branch_depth -= 1;
        let (then_block, else_block) = blocks?;

        let end = self.expect_keyword(KeywordId::End)?.span;
        self.expect_line_end()?;

        Ok(Spanned::new(
            Statement::Branch(Branch {
                condition,
                then_block,
                else_block,
            }),
            start.merge(end),
        ))
    }

    fn branch_blocks(&mut self) -> Result<(Block, Option<Block>), CompileError> {
        let then_block = self.scoped_block()?;
        let else_block = if self.match_keyword(KeywordId::Else) {
            self.expect_newline("'else'")?;
            Some(self.scoped_block()?)
        } else {
            None
        };
        Ok((then_block, else_block))
    }

    /// `return` with an optional value.
    fn return_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.advance().span;
        let value = match self.peek().kind {
            TokenKind::Newline | TokenKind::Eof => None,
            _ => Some(self.expression()?),
        };
        let span = start.merge(self.previous_span());
        self.expect_line_end()?;
        Ok(Spanned::new(Statement::Return(value), span))
    }

    fn break_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let span = self.current_span();
        if self.branch_depth == 0 {
            return Err(CompileError::syntax(
                "'break' inside an 'if' or 'else' block",
                "'break' outside of any branch",
                span,
            ));
        }
        self.advance();
        self.expect_line_end()?;
        Ok(Spanned::new(Statement::Break, span))
    }
}
