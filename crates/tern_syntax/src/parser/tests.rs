#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on operator grouping after rebalancing, declare-before-use with scopes,
/// and the exact error reported for malformed input.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, CompileError> {
        let tokens = lexer::lex(source)?;
        parse(&tokens)
    }

    /// Parse `int x = <expr>` and return the initializer.
    fn initializer(expr: &str) -> Spanned<Expr> {
        let program = parse_str(&format!("int x = {expr}\n")).unwrap();
        match program.body.statements.into_iter().next().map(|s| s.node) {
            Some(Statement::Declaration(VarDecl { value: Some(value), .. })) => value,
            other => panic!("Expected declaration with value, got {other:?}"),
        }
    }

    /// Fully parenthesised rendering of an expression tree.
    fn shape(expr: &Spanned<Expr>) -> String {
        match &expr.node {
            Expr::Number(n) => n.to_string(),
            Expr::Bool(b) => b.to_string(),
            Expr::Ident(name) => name.clone(),
            Expr::Binary(b) => format!("({} {} {})", shape(&b.left), b.op(), shape(&b.right)),
            Expr::Paren(inner) => format!("[{}]", shape(inner)),
            Expr::Call(call) => {
                let args: Vec<String> = call.args.iter().map(shape).collect();
                format!("{}({})", call.name, args.join(", "))
            }
        }
    }

    // ========================================================================
    // Rebalancing
    // ========================================================================

    #[test]
    fn test_equal_precedence_is_left_associative() {
        insta::assert_snapshot!(shape(&initializer("2 - 3 - 4")), @"((2 - 3) - 4)");
        insta::assert_snapshot!(shape(&initializer("8 / 4 / 2")), @"((8 / 4) / 2)");
        insta::assert_snapshot!(shape(&initializer("1 - 2 + 3 - 4")), @"(((1 - 2) + 3) - 4)");
    }

    #[test]
    fn test_higher_precedence_binds_tighter() {
        assert_eq!(shape(&initializer("2 + 3 * 4")), "(2 + (3 * 4))");
        assert_eq!(shape(&initializer("2 * 3 + 4")), "((2 * 3) + 4)");
        assert_eq!(shape(&initializer("2 - 3 * 4 + 5")), "((2 - (3 * 4)) + 5)");
        assert_eq!(shape(&initializer("1 * 2 - 3 * 4 + 5")), "(((1 * 2) - (3 * 4)) + 5)");
    }

    #[test]
    fn test_comparison_binds_loosest() {
        assert_eq!(shape(&initializer("1 < 2 + 3 * 4 - 5")), "(1 < ((2 + (3 * 4)) - 5))");
        assert_eq!(shape(&initializer("1 + 2 == 3")), "((1 + 2) == 3)");
    }

    #[test]
    fn test_paren_group_is_opaque() {
        assert_eq!(shape(&initializer("(2 + 3) * 4")), "([(2 + 3)] * 4)");
        assert_eq!(shape(&initializer("2 * (3 + 4)")), "(2 * [(3 + 4)])");
        assert_eq!(shape(&initializer("2 - (3 - 4)")), "(2 - [(3 - 4)])");
        assert_eq!(shape(&initializer("((1))")), "[[1]]");
    }

    #[test]
    fn test_rebalanced_nodes_keep_cached_precedence() {
        let expr = initializer("2 * 3 + 4");
        let Expr::Binary(root) = &expr.node else {
            panic!("Expected binary root");
        };
        assert_eq!(root.op(), BinaryOp::Add);
        assert_eq!(root.precedence(), 2);
        let Expr::Binary(left) = &root.left.node else {
            panic!("Expected binary left child");
        };
        assert_eq!(left.op(), BinaryOp::Mul);
        assert_eq!(left.precedence(), 3);
    }

    #[test]
    fn test_rebalanced_spans_cover_operands() {
        // "int x = " is 8 bytes
        let expr = initializer("2 - 3 - 4");
        assert_eq!((expr.span.start, expr.span.end), (8, 17));
        let Expr::Binary(root) = &expr.node else {
            panic!("Expected binary root");
        };
        assert_eq!((root.left.span.start, root.left.span.end), (8, 13));
    }

    #[test]
    fn test_rebalance_leaves_operands_alone() {
        let operand = Spanned::new(Expr::Number(7), Span::default());
        assert_eq!(rebalance(operand.clone()), operand);
    }

    // ========================================================================
    // Operands and calls
    // ========================================================================

    #[test]
    fn test_bool_literals() {
        assert_eq!(shape(&initializer("true == false")), "(true == false)");
    }

    #[test]
    fn test_call_arguments() {
        let source = "int f(int a, int b) do\n  return a\nend\nint y = f(1, 2 + 3) * f(4, 5)\n";
        let program = parse_str(source).unwrap();
        match &program.body.statements[1].node {
            Statement::Declaration(VarDecl { value: Some(value), .. }) => {
                assert_eq!(shape(value), "(f(1, (2 + 3)) * f(4, 5))");
            }
            other => panic!("Expected declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_argument_list() {
        let program = parse_str("int f() do\n  return 1\nend\nf()\n").unwrap();
        assert!(matches!(
            &program.body.statements[1].node,
            Statement::Call(CallExpr { args, .. }) if args.is_empty()
        ));
    }

    #[test]
    fn test_dangling_separator_in_arguments() {
        let err = parse_str("int f(int a) do\n  return a\nend\nf(1,)\n").unwrap_err();
        assert_eq!(err.to_string(), "expected expression, found ')'");
    }

    #[test]
    fn test_unmatched_paren() {
        let err = parse_str("int x = (1 + 2\n").unwrap_err();
        assert_eq!(err.to_string(), "expected ')', found newline");
        assert_eq!((err.line(), err.column()), (1, 15));
    }

    #[test]
    fn test_missing_operand() {
        let err = parse_str("int x = 1 +\n").unwrap_err();
        assert_eq!(err.to_string(), "expected expression, found newline");
    }

    // ========================================================================
    // Declarations and scoping
    // ========================================================================

    #[test]
    fn test_assignment_requires_declaration() {
        let err = parse_str("x = 1\n").unwrap_err();
        assert_eq!(err, CompileError::undeclared("x", Span::new(0, 1, 1, 1)));
    }

    #[test]
    fn test_initializer_cannot_see_its_own_variable() {
        let err = parse_str("int x = x\n").unwrap_err();
        assert!(matches!(err, CompileError::UndeclaredIdentifier { ref name, .. } if name == "x"));
    }

    #[test]
    fn test_branch_scope_closes_at_end() {
        let source = "int x = 5\nif x > 3 then\n  int y = 1\nend\ny = 2\n";
        let err = parse_str(source).unwrap_err();
        assert!(matches!(err, CompileError::UndeclaredIdentifier { ref name, .. } if name == "y"));
        assert_eq!(err.line(), 5);
    }

    #[test]
    fn test_else_block_does_not_see_then_block() {
        let err = parse_str("if 1 then\n  int a = 1\nelse\n  a = 2\nend\n").unwrap_err();
        assert!(matches!(err, CompileError::UndeclaredIdentifier { .. }));
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn test_outer_variables_visible_in_branch() {
        parse_str("int x = 1\nif x then\n  x = 2\nelse\n  x = 3\nend\n").unwrap();
    }

    #[test]
    fn test_recursive_function() {
        let source = "int f(int n) do\n  if n < 1 then\n    return 0\n  end\n  return f(n - 1)\nend\n";
        let program = parse_str(source).unwrap();
        match &program.body.statements[0].node {
            Statement::Function(f) => {
                assert_eq!(f.name, "f");
                assert_eq!(f.return_type, DataTypeId::Int);
                assert_eq!(f.params.len(), 1);
                assert_eq!(f.params[0].node.name, "n");
                assert_eq!(f.body.statements.len(), 2);
            }
            other => panic!("Expected function, got {other:?}"),
        }
    }

    #[test]
    fn test_parameters_are_local_to_function() {
        let err = parse_str("int f(int n) do\n  return n\nend\nn = 1\n").unwrap_err();
        assert!(matches!(err, CompileError::UndeclaredIdentifier { ref name, .. } if name == "n"));
    }

    #[test]
    fn test_global_variable_is_recorded() {
        let program = parse_str("global bool flag = true\n").unwrap();
        match &program.body.statements[0].node {
            Statement::Declaration(decl) => {
                assert!(decl.is_global);
                assert_eq!(decl.ty, DataTypeId::Bool);
            }
            other => panic!("Expected declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_global_function_is_rejected() {
        let err = parse_str("global int f() do\n  return 1\nend\n").unwrap_err();
        assert!(matches!(err, CompileError::Syntax { .. }));
        assert_eq!(err.column(), 13);
    }

    #[test]
    fn test_global_requires_type() {
        let err = parse_str("global x = 1\n").unwrap_err();
        assert_eq!(err.to_string(), "expected data type, found identifier 'x'");
    }

    #[test]
    fn test_unsupported_types_still_parse() {
        let program = parse_str("float f\nstring s\n").unwrap();
        assert_eq!(program.body.statements.len(), 2);
    }

    #[test]
    fn test_variable_called_as_function() {
        let err = parse_str("int x\nx(1)\n").unwrap_err();
        assert_eq!(err.to_string(), "expected '=' after variable name, found '('");
    }

    #[test]
    fn test_function_assigned_as_variable() {
        let err = parse_str("int f() do\n  return 1\nend\nf = 2\n").unwrap_err();
        assert_eq!(err.to_string(), "expected '(' after function name, found '='");
    }

    #[test]
    fn test_redeclaration_replaces_kind() {
        parse_str("int f() do\n  return 1\nend\nint f = 2\nf = 3\n").unwrap();
    }

    // ========================================================================
    // Branches and last statements
    // ========================================================================

    #[test]
    fn test_branch_with_else() {
        let program = parse_str("if 1 < 2 then\n  int a = 1\nelse\n  int b = 2\nend\n").unwrap();
        match &program.body.statements[0].node {
            Statement::Branch(branch) => {
                assert_eq!(shape(&branch.condition), "(1 < 2)");
                assert_eq!(branch.then_block.statements.len(), 1);
                assert_eq!(branch.else_block.as_ref().map(|b| b.statements.len()), Some(1));
            }
            other => panic!("Expected branch, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_branches_consume_their_own_end() {
        let source = "if 1 then\n  if 0 then\n    break\n  end\n  break\nelse\nend\n";
        let program = parse_str(source).unwrap();
        assert_eq!(program.body.statements.len(), 1);
    }

    #[test]
    fn test_missing_then() {
        let err = parse_str("if 1 2\n").unwrap_err();
        assert_eq!(err.to_string(), "expected 'then', found number 2");
    }

    #[test]
    fn test_then_must_end_line() {
        let err = parse_str("if 1 then break\nend\n").unwrap_err();
        assert_eq!(err.to_string(), "expected newline after 'then', found 'break'");
    }

    #[test]
    fn test_missing_end() {
        let err = parse_str("if 1 then\n  int a = 1\n").unwrap_err();
        assert_eq!(err.to_string(), "expected 'end', found end of input");
    }

    #[test]
    fn test_stray_end_at_top_level() {
        let err = parse_str("int a\nend\n").unwrap_err();
        assert_eq!(err.to_string(), "expected statement, found 'end'");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_break_outside_branch() {
        let err = parse_str("break\n").unwrap_err();
        assert!(matches!(err, CompileError::Syntax { .. }));
    }

    #[test]
    fn test_break_does_not_cross_function_boundary() {
        let source = "if 1 then\n  int f() do\n    break\n  end\nend\n";
        let err = parse_str(source).unwrap_err();
        assert!(matches!(err, CompileError::Syntax { .. }));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_bare_and_valued_return() {
        let program = parse_str("return\nreturn 1 + 2\n").unwrap();
        assert!(matches!(program.body.statements[0].node, Statement::Return(None)));
        assert!(matches!(program.body.statements[1].node, Statement::Return(Some(_))));
    }

    #[test]
    fn test_statement_at_end_of_input_needs_no_newline() {
        let program = parse_str("int x = 1").unwrap();
        assert_eq!(program.body.statements.len(), 1);
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse_str("int x = 1 2\n").unwrap_err();
        assert_eq!(err.to_string(), "expected end of line, found number 2");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(parse_str("\n// nothing\n").unwrap(), Program::default());
    }

    // ========================================================================
    // Resource limits
    // ========================================================================

    #[test]
    fn test_deep_parentheses_hit_nesting_limit() {
        let source = format!("int x = {}1{}\n", "(".repeat(1000), ")".repeat(1000));
        let err = parse_str(&source).unwrap_err();
        assert!(matches!(err, CompileError::NestingTooDeep { limit: DEFAULT_MAX_DEPTH, .. }));
    }

    #[test]
    fn test_custom_nesting_limit() {
        let tokens = lexer::lex("int x = ((1))\n").unwrap();
        let options = ParseOptions::new().with_max_depth(1);
        let err = parse_with_options(&tokens, options).unwrap_err();
        assert!(matches!(err, CompileError::NestingTooDeep { limit: 1, .. }));

        let options = ParseOptions::new().with_max_depth(2);
        assert!(parse_with_options(&tokens, options).is_ok());
    }

    #[test]
    fn test_flat_chain_at_limit_is_accepted() {
        let source = format!("int x = 1{}\n", " + 1".repeat(DEFAULT_MAX_CHAIN_LENGTH));
        let program = parse_str(&source).unwrap();
        assert_eq!(program.body.statements.len(), 1);
    }

    #[test]
    fn test_long_flat_chain_reports_chain_length() {
        let source = format!("int x = 1{}\n", " + 1".repeat(DEFAULT_MAX_CHAIN_LENGTH + 1));
        let err = parse_str(&source).unwrap_err();
        assert!(matches!(err, CompileError::ChainTooLong { limit: DEFAULT_MAX_CHAIN_LENGTH, .. }));
        // `int x = 1` fills columns 1-9 and every ` + 1` adds 4; the error sits on the first extra `+`.
        assert_eq!(err.column(), 11 + 4 * DEFAULT_MAX_CHAIN_LENGTH);
        assert_eq!(err.to_string(), format!("expression has more than {DEFAULT_MAX_CHAIN_LENGTH} binary operators"));
    }

    #[test]
    fn test_custom_chain_limit() {
        let tokens = lexer::lex("int x = 1 + 2 * 3\n").unwrap();
        let options = ParseOptions::new().with_max_chain_length(1);
        let err = parse_with_options(&tokens, options).unwrap_err();
        assert!(matches!(err, CompileError::ChainTooLong { limit: 1, .. }));

        let options = ParseOptions::new().with_max_chain_length(2);
        assert!(parse_with_options(&tokens, options).is_ok());
    }

    #[test]
    fn test_chain_operators_count_towards_nesting() {
        // Operators inside parentheses share the nesting budget.
        let tokens = lexer::lex("int x = (1 + 2 + 3)\n").unwrap();
        let options = ParseOptions::new().with_max_depth(2);
        let err = parse_with_options(&tokens, options).unwrap_err();
        assert!(matches!(err, CompileError::NestingTooDeep { limit: 2, .. }));

        let options = ParseOptions::new().with_max_depth(3);
        assert!(parse_with_options(&tokens, options).is_ok());
    }

    #[test]
    fn test_parse_source_reports_lex_errors() {
        let err = parse_source("int x = 1 % 2").unwrap_err();
        assert!(matches!(err, CompileError::Lex { .. }));
    }
}
