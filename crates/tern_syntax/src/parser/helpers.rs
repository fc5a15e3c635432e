/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Line handling (`skip_newlines`, `expect_line_end`)
/// - Nesting accounting (`descend`, `ascend`)

/// Returned by `peek` when the slice runs out without an explicit `Eof` token.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span {
        start: 0,
        end: 0,
        line: 1,
        column: 1,
    },
};

impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&'a Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(format!("'{}'", keywords::as_str(id))))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, expected: &str) -> Result<&'a Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_op(&mut self, id: OperatorId, expected: &str) -> Result<&'a Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Require a `Newline` token (block openers must end their line).
    fn expect_newline(&mut self, after: &str) -> Result<(), CompileError> {
        if matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(format!("newline after {after}")))
        }
    }

    /// A statement ends at a newline (consumed) or at end of input (not consumed).
    fn expect_line_end(&mut self) -> Result<(), CompileError> {
        match self.peek().kind {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected("end of line")),
        }
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or_else(|| self.current_span(), |t| t.span)
    }

    fn identifier(&mut self) -> Result<(Ident, Span), CompileError> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok((name.clone(), token.span))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    fn data_type(&mut self) -> Result<DataTypeId, CompileError> {
        match self.peek().kind {
            TokenKind::Type(id) => {
                self.advance();
                Ok(id)
            }
            _ => Err(self.unexpected("data type")),
        }
    }

    /// Build a syntax error describing the current token.
    fn unexpected(&self, expected: impl Into<String>) -> CompileError {
        let token = self.peek();
        CompileError::syntax(expected, token.kind.to_string(), token.span)
    }

    /// Enter one nesting level, failing once the configured limit is exceeded.
    fn descend(&mut self) -> Result<(), CompileError> {
        if self.depth >= self.options.max_depth {
            return Err(CompileError::NestingTooDeep {
                limit: self.options.max_depth,
                span: self.current_span(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, CompileError>) -> Result<T, CompileError> {
        self.descend()?;
        let result = f(self);
        self.ascend();
        result
    }
}
