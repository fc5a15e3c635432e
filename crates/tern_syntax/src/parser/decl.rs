/// Declaration parsing methods.
///
/// This chunk parses variable declarations (`[global] TYPE name [= expr]`) and function
/// declarations (`TYPE name ( params ) do ... end`). Both start with a data type; the `(`
/// after the name tells them apart.
///
/// ## Notes
/// - A variable is registered *after* its initializer is parsed, so `int x = x` is rejected.
/// - A function is registered *before* its body is parsed so the body may call it recursively.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.current_span();
        let is_global = self.match_keyword(KeywordId::Global);
        let ty = self.data_type()?;
        let (name, _) = self.identifier()?;

        if self.check_punct(PunctuationId::LParen) {
            if is_global {
                return Err(CompileError::syntax(
                    "variable declaration after 'global'",
                    format!("function declaration '{name}'"),
                    self.current_span(),
                ));
            }
            let function = self.function_decl(ty, name)?;
            let span = start.merge(self.previous_span());
            self.expect_line_end()?;
            return Ok(Spanned::new(Statement::Function(function), span));
        }

        let value = if self.match_op(OperatorId::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        self.declarations.declare(&name, DeclKind::Variable);
        let span = start.merge(self.previous_span());
        self.expect_line_end()?;

        Ok(Spanned::new(
            Statement::Declaration(VarDecl {
                name,
                ty,
                is_global,
                value,
            }),
            span,
        ))
    }

    /// Parse the rest of a function declaration, starting at the `(` after its name.
    fn function_decl(&mut self, return_type: DataTypeId, name: Ident) -> Result<FunctionDecl, CompileError> {
        self.declarations.declare(&name, DeclKind::Function);

        self.declarations.enter_scope();
        let saved_branch_depth = std::mem::replace(&mut self.branch_depth, 0);
        let parts = self.function_parts();
        self.branch_depth = saved_branch_depth;
        self.declarations.exit_scope();

        let (params, body) = parts?;
        Ok(FunctionDecl {
            name,
            return_type,
            params,
            body,
        })
    }

    /// Parameters, `do`, body and `end`. Runs inside the body's scope.
    fn function_parts(&mut self) -> Result<(Vec<Spanned<VarDecl>>, Block), CompileError> {
        self.expect_punct(PunctuationId::LParen, "'(' after function name")?;
        let params = self.param_list()?;
        self.expect_punct(PunctuationId::RParen, "')' after parameters")?;
        self.expect_keyword(KeywordId::Do)?;
        self.expect_newline("'do'")?;
        let body = self.block()?;
        self.expect_keyword(KeywordId::End)?;
        Ok((params, body))
    }

    fn param_list(&mut self) -> Result<Vec<Spanned<VarDecl>>, CompileError> {
        let mut params = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return Ok(params);
        }
        loop {
            params.push(self.param()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        Ok(params)
    }

    fn param(&mut self) -> Result<Spanned<VarDecl>, CompileError> {
        let start = self.current_span();
        let ty = self.data_type()?;
        let (name, name_span) = self.identifier()?;
        self.declarations.declare(&name, DeclKind::Variable);
        Ok(Spanned::new(
            VarDecl {
                name,
                ty,
                is_global: false,
                value: None,
            },
            start.merge(name_span),
        ))
    }
}
