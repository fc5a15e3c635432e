//! CLI module for the Tern interpreter
//!
//! This module provides the command-line interface.
//!
//! ## Usage
//!
//! - `tern <SOURCE> [OUTPUT]` - Run the program and print the global variables
//! - `tern --lex <FILE>` - Print the token stream (debug)
//! - `tern --parse <FILE>` - Print the AST dump (debug)
//! - `tern --fmt <FILE>` - Print the canonical source (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use crate::interpreter::{DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_EVAL_DEPTH, InterpreterOptions};
use crate::parser::{DEFAULT_MAX_CHAIN_LENGTH, DEFAULT_MAX_DEPTH, ParseOptions};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// How the final global variables are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `name = value` line per variable
    Text,
    /// A single JSON object
    Json,
}

/// The Tern programming language interpreter
#[derive(Parser, Debug)]
#[command(name = "tern")]
#[command(version = VERSION)]
#[command(about = "The Tern programming language interpreter", long_about = None)]
pub struct Cli {
    /// Source file to run
    #[arg(value_name = "SOURCE", required_unless_present_any = ["lex_file", "parse_file", "fmt_file"])]
    pub source: Option<PathBuf>,

    /// Output file (accepted for compatibility; nothing is written to it)
    #[arg(value_name = "OUTPUT", requires = "source")]
    pub output: Option<PathBuf>,

    /// Format used to print the global variables after a run
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum nesting depth accepted by the parser
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of binary operators in one expression chain
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CHAIN_LENGTH)]
    pub max_chain_length: usize,

    /// Maximum function call depth at runtime
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    pub max_call_depth: usize,

    /// Maximum evaluation nesting at runtime, counted across calls
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_EVAL_DEPTH)]
    pub max_eval_depth: usize,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "source")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the AST dump (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "source")]
    pub parse_file: Option<PathBuf>,

    /// Parse and print canonical source (debug)
    #[arg(long = "fmt", value_name = "FILE", conflicts_with = "source")]
    pub fmt_file: Option<PathBuf>,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_max_depth(self.max_depth)
            .with_max_chain_length(self.max_chain_length)
    }

    fn interpreter_options(&self) -> InterpreterOptions {
        InterpreterOptions::new()
            .with_max_call_depth(self.max_call_depth)
            .with_max_eval_depth(self.max_eval_depth)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let parse_options = cli.parse_options();

    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file, parse_options);
    }
    if let Some(file) = &cli.fmt_file {
        return commands::fmt_file(file, parse_options);
    }

    match &cli.source {
        Some(source) => {
            if let Some(output) = &cli.output {
                tracing::debug!(output = %output.display(), "output file accepted but not written");
            }
            commands::run_file(source, cli.format, parse_options, cli.interpreter_options())
        }
        None => Err(CliError::failure("Error: no source file given")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_source_and_output() {
        let cli = Cli::try_parse_from(["tern", "prog.tern", "out.bin"]).unwrap();
        assert_eq!(cli.source, Some(PathBuf::from("prog.tern")));
        assert_eq!(cli.output, Some(PathBuf::from("out.bin")));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(cli.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
        assert_eq!(cli.max_eval_depth, DEFAULT_MAX_EVAL_DEPTH);
        assert_eq!(cli.max_chain_length, DEFAULT_MAX_CHAIN_LENGTH);
    }

    #[test]
    fn test_cli_parse_format_and_limits() {
        let cli = Cli::try_parse_from([
            "tern",
            "prog.tern",
            "--format",
            "json",
            "--max-depth",
            "32",
            "--max-call-depth",
            "8",
            "--max-eval-depth",
            "512",
            "--max-chain-length",
            "16",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.parse_options().max_depth, 32);
        assert_eq!(cli.parse_options().max_chain_length, 16);
        assert_eq!(cli.interpreter_options().max_call_depth, 8);
        assert_eq!(cli.interpreter_options().max_eval_depth, 512);
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["tern", "--lex", "prog.tern"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["tern", "--parse", "prog.tern"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["tern", "--fmt", "prog.tern"]).unwrap();
        assert!(cli.fmt_file.is_some());
    }

    #[test]
    fn test_cli_requires_source() {
        assert!(Cli::try_parse_from(["tern"]).is_err());
    }

    #[test]
    fn test_cli_debug_flag_conflicts_with_source() {
        assert!(Cli::try_parse_from(["tern", "prog.tern", "--lex", "other.tern"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["tern", "prog.tern", "--format", "yaml"]).is_err());
    }
}
