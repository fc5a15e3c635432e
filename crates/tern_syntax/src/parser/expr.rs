/// Expression parsing methods.
///
/// Expressions are read in two passes:
/// 1. `operator_chain` consumes `operand { BINOP operand }` left to right (iteratively, up to
///    `max_chain_length` operators) and builds a right-leaning tree, ignoring precedence.
/// 2. [`rebalance`] rotates that chain into a precedence-correct, left-associative tree.
///
/// ## Notes
/// - A parenthesised group is rebalanced on its own and then wrapped in [`Expr::Paren`];
///   the outer rebalance treats it as an operand and never looks inside.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let chain = self.operator_chain()?;
        Ok(rebalance(chain))
    }

    fn operator_chain(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let first = self.operand()?;
        let mut charged = 0;
        let rest = self.chain_tail(&mut charged);
        self.depth = self.depth.saturating_sub(charged);
        let rest = rest?;

        // Fold from the right: `a + b * c` becomes `a + (b * c)` regardless of precedence.
        let mut tail: Option<(BinaryOp, Spanned<Expr>)> = None;
        for (op, operand) in rest.into_iter().rev() {
            let right = match tail.take() {
                None => operand,
                Some((next_op, right)) => BinaryExpr::spanned(operand, next_op, right),
            };
            tail = Some((op, right));
        }
        Ok(match tail {
            None => first,
            Some((op, right)) => BinaryExpr::spanned(first, op, right),
        })
    }

    /// Read `{ BINOP operand }`. Every operator is charged one nesting level; `charged` reports how
    /// many levels to give back.
    fn chain_tail(&mut self, charged: &mut usize) -> Result<Vec<(BinaryOp, Spanned<Expr>)>, CompileError> {
        let mut rest = Vec::new();
        while let Some(op) = self.binary_op() {
            if rest.len() >= self.options.max_chain_length {
                return Err(CompileError::ChainTooLong {
                    limit: self.options.max_chain_length,
                    span: self.current_span(),
                });
            }
            self.descend()?;
            *charged += 1;
            self.advance();
            rest.push((op, self.operand()?));
        }
        Ok(rest)
    }

    fn binary_op(&self) -> Option<BinaryOp> {
        match self.peek().kind {
            TokenKind::Operator(id) => BinaryOp::from_operator(id),
            _ => None,
        }
    }

    fn operand(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Spanned::new(Expr::Number(*n), token.span))
            }
            TokenKind::Keyword(KeywordId::True) => {
                self.advance();
                Ok(Spanned::new(Expr::Bool(true), token.span))
            }
            TokenKind::Keyword(KeywordId::False) => {
                self.advance();
                Ok(Spanned::new(Expr::Bool(false), token.span))
            }
            TokenKind::Ident(name) => match self.declarations.lookup(name) {
                None => Err(CompileError::undeclared(name.clone(), token.span)),
                Some(DeclKind::Variable) => {
                    self.advance();
                    Ok(Spanned::new(Expr::Ident(name.clone()), token.span))
                }
                Some(DeclKind::Function) => {
                    self.advance();
                    let call = self.call_args(name.clone())?;
                    let span = token.span.merge(self.previous_span());
                    Ok(Spanned::new(Expr::Call(call), span))
                }
            },
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.nested(|p| p.expression())?;
                let close = self.expect_punct(PunctuationId::RParen, "')'")?;
                Ok(Spanned::new(Expr::Paren(Box::new(inner)), token.span.merge(close.span)))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parse `( [expr {, expr}] )` after a function name.
    fn call_args(&mut self, name: Ident) -> Result<CallExpr, CompileError> {
        self.expect_punct(PunctuationId::LParen, "'(' after function name")?;
        let args = self.nested(|p| p.expression_list())?;
        self.expect_punct(PunctuationId::RParen, "')' after arguments")?;
        Ok(CallExpr { name, args })
    }

    /// Comma-separated expressions; empty only when the closing `)` comes next.
    fn expression_list(&mut self) -> Result<Vec<Spanned<Expr>>, CompileError> {
        let mut items = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return Ok(items);
        }
        loop {
            items.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        Ok(items)
    }
}

// ============================================================================
// Rebalancing
// ============================================================================

/// Regroup a right-leaning operator chain by precedence.
///
/// The right subtree is rebalanced first. Then, while the root's right child is a binary node
/// whose precedence is lower than or *equal to* the root's, the two are rotated so the child
/// becomes the new root. The equality case is what makes `2-3-4` group as `(2-3)-4`.
///
/// Only `left`/`right` links are rewired; each node keeps its operator and cached precedence.
/// [`Expr::Paren`] nodes and non-binary operands are returned untouched.
pub fn rebalance(expr: Spanned<Expr>) -> Spanned<Expr> {
    let span = expr.span;
    match expr.node {
        Expr::Binary(mut root) => {
            let right = *root.right;
            root.right = Box::new(rebalance(right));
            settle(root, span)
        }
        node => Spanned::new(node, span),
    }
}

/// Rotate `root` below its (already balanced) right child while precedence requires it.
fn settle(mut root: BinaryExpr, span: Span) -> Spanned<Expr> {
    let precedence = root.precedence();
    let right = *root.right;
    let right_span = right.span;

    match right.node {
        Expr::Binary(mut pivot) if precedence >= pivot.precedence() => {
            root.right = pivot.left;
            let root_span = root.left.span.merge(root.right.span);
            pivot.left = Box::new(settle(root, root_span));
            let pivot_span = pivot.left.span.merge(pivot.right.span);
            Spanned::new(Expr::Binary(pivot), pivot_span)
        }
        node => {
            root.right = Box::new(Spanned::new(node, right_span));
            Spanned::new(Expr::Binary(root), span)
        }
    }
}
