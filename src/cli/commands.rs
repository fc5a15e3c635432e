//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use miette::{Diagnostic, NamedSource};
use serde_json::{Map, json};

use crate::dump::dump_program;
use crate::format::{FormatConfig, format_program};
use crate::interpreter::{Interpreter, InterpreterOptions, TernError, Value};
use crate::lexer::{self, Token};
use crate::parser::{self, ParseOptions};

use super::{CliError, CliResult, ExitCode, OutputFormat};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with size validation.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "File '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Render a diagnostic against its source, with the offending span underlined.
pub fn render_diagnostic<E>(path: &Path, source: &str, err: E) -> String
where
    E: Diagnostic + Send + Sync + 'static,
{
    let named = NamedSource::new(path.display().to_string(), source.to_string());
    let report = miette::Report::new(err).with_source_code(named);
    format!("{report:?}")
}

fn lex_or_fail(path: &Path, source: &str) -> CliResult<Vec<Token>> {
    lexer::lex(source).map_err(|err| CliError::failure(render_diagnostic(path, source, err).trim_end()))
}

/// Lex and display tokens, one per line as `line:column kind`.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lex_or_fail(path, &source)?;
    print!("{}", render_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the AST dump.
pub fn parse_file(path: &Path, options: ParseOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lex_or_fail(path, &source)?;
    let ast = parser::parse_with_options(&tokens, options)
        .map_err(|err| CliError::failure(render_diagnostic(path, &source, err).trim_end()))?;
    print!("{}", dump_program(&ast));
    Ok(ExitCode::SUCCESS)
}

/// Parse and display canonical source.
pub fn fmt_file(path: &Path, options: ParseOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lex_or_fail(path, &source)?;
    let ast = parser::parse_with_options(&tokens, options)
        .map_err(|err| CliError::failure(render_diagnostic(path, &source, err).trim_end()))?;
    print!("{}", format_program(&ast, &FormatConfig::default()));
    Ok(ExitCode::SUCCESS)
}

/// Run a program and print its global variables.
pub fn run_file(
    path: &Path,
    format: OutputFormat,
    parse_options: ParseOptions,
    interpreter_options: InterpreterOptions,
) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    match run_program(&source, parse_options, interpreter_options) {
        Ok(interpreter) => {
            let rendered = render_globals(&interpreter.globals(), format)?;
            print!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = %err, "program failed");
            Err(CliError::failure(render_diagnostic(path, &source, err).trim_end()))
        }
    }
}

/// Lex, parse and run `source` with explicit limits.
pub fn run_program(
    source: &str,
    parse_options: ParseOptions,
    interpreter_options: InterpreterOptions,
) -> Result<Interpreter, TernError> {
    let tokens = lexer::lex(source)?;
    let program = parser::parse_with_options(&tokens, parse_options)?;
    let mut interpreter = Interpreter::with_options(interpreter_options);
    interpreter.run(&program)?;
    Ok(interpreter)
}

/// Token listing used by `--lex`.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}:{} {}", token.span.line, token.span.column, token.kind);
    }
    out
}

/// Final variable dump: `name = value` lines, or one JSON object.
pub fn render_globals(globals: &[(String, Value)], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(globals.iter().map(|(name, value)| format!("{name} = {value}\n")).collect()),
        OutputFormat::Json => {
            let mut map = Map::new();
            for (name, value) in globals {
                let value = match value {
                    Value::Int(n) => json!(n),
                    Value::Bool(b) => json!(b),
                };
                map.insert(name.clone(), value);
            }
            let mut out = serde_json::to_string_pretty(&serde_json::Value::Object(map))
                .map_err(|e| CliError::failure(format!("Error serializing variables: {}", e)))?;
            out.push('\n');
            Ok(out)
        }
    }
}
