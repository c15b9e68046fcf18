//! CLI module for the MicroJava syntax checker
//!
//! ## Commands
//!
//! - `check <file>` - Scan and parse a program, reporting diagnostics
//! - `lex <file>` - Dump the token stream (debug)
//!
//! A bare `mjc <file>` is the same as `mjc check <file>`.
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

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::ParserConfig;

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
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax checker for MicroJava programs
#[derive(Parser, Debug)]
#[command(name = "mjc")]
#[command(version = VERSION)]
#[command(about = "Syntax checker for MicroJava programs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan and parse a program, reporting every syntax error
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print every token the parser reads
        #[arg(long)]
        trace: bool,
        /// Tokens that must be consumed after an error before the next one is reported
        #[arg(long, value_name = "N")]
        min_error_distance: Option<u32>,
        /// How diagnostics are printed
        #[arg(long, value_enum, default_value_t = MessageFormat::Human)]
        message_format: MessageFormat,
    },

    /// Tokenize only (debug)
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit one JSON object per token
        #[arg(long)]
        json: bool,
    },
}

/// Output style for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MessageFormat {
    /// Graphical report with source context
    #[default]
    Human,
    /// One `-- line L col C: msg` line per error
    Short,
    /// One JSON object per error
    Json,
}

/// Settings for one `check` run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub parser: ParserConfig,
    pub format: MessageFormat,
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
    match cli.command {
        Some(Command::Check {
            file,
            trace,
            min_error_distance,
            message_format,
        }) => {
            let mut parser = ParserConfig::new().with_trace(trace);
            if let Some(distance) = min_error_distance {
                parser = parser.with_min_error_distance(distance);
            }
            let options = CheckOptions {
                parser,
                format: message_format,
            };
            commands::check_file(&file.to_string_lossy(), &options)
        }
        Some(Command::Lex { file, json }) => commands::lex_file(&file.to_string_lossy(), json),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy(), &CheckOptions::default())
            } else {
                Err(CliError::failure("Error: no input file (try `mjc --help`)"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
