//! Tern Code Formatter
//!
//! This module turns a parsed program back into canonical source:
//! - one statement per line, nested blocks indented (4 spaces by default)
//! - single spaces around binary and assignment operators
//! - parenthesised groups kept exactly where the source had them
//! - a blank line around function declarations
//!
//! Comments are not part of the AST and are therefore dropped.

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::Formatter;

use crate::ast::Program;
use crate::diagnostics::CompileError;
use crate::{lexer, parser};

/// Format a parsed program
pub fn format_program(program: &Program, config: &FormatConfig) -> String {
    Formatter::new(config.clone()).format(program)
}

/// Format Tern source code with default settings
pub fn format_source(source: &str) -> Result<String, CompileError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format Tern source code with custom configuration
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, CompileError> {
    let tokens = lexer::lex(source)?;
    let ast = parser::parse(&tokens)?;
    Ok(Formatter::new(config).format(&ast))
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, CompileError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_normalises_spacing() {
        let source = "int   x=2*(3+4)-1\nif x>3 then\n x=x/2\nelse\n    x = 0\nend";
        insta::assert_snapshot!(format_source(source).unwrap(), @r"
        int x = 2 * (3 + 4) - 1
        if x > 3 then
            x = x / 2
        else
            x = 0
        end
        ");
    }

    #[test]
    fn test_format_functions_get_blank_lines() {
        let source = "int a = 1\nint f(int n, bool b) do\nreturn n\nend\nf(a, true)\n";
        insta::assert_snapshot!(format_source(source).unwrap(), @r"
        int a = 1

        int f(int n, bool b) do
            return n
        end

        f(a, true)
        ");
    }

    #[test]
    fn test_format_drops_comments_and_blank_lines() {
        let source = "// header\n\n\nglobal bool flag // trailing\n\n";
        assert_eq!(format_source(source).unwrap(), "global bool flag\n");
    }

    #[test]
    fn test_format_with_custom_indent() {
        let source = "if 1 then\nif 0 then\nbreak\nend\nend\n";
        let config = FormatConfig::new().with_indent_width(2);
        assert_eq!(
            format_source_with_config(source, config).unwrap(),
            "if 1 then\n  if 0 then\n    break\n  end\nend\n"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_source("").unwrap(), "");
    }

    #[test]
    fn test_format_invalid_syntax() {
        assert!(format_source("int f(").is_err());
    }

    #[test]
    fn test_check_formatted() {
        assert!(check_formatted("int x = 1\n").unwrap());
        assert!(!check_formatted("int x=1\n").unwrap());
    }

    #[test]
    fn test_format_is_idempotent() {
        let source = "int x=1\nint f() do\nif x then\nreturn (x)\nend\nreturn 0\nend\nx = f( )\n";
        let once = format_source(source).unwrap();
        assert_eq!(format_source(&once).unwrap(), once);
    }
}
