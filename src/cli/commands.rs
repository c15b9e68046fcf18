//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;

use miette::{NamedSource, Report};
use serde_json::json;

use crate::{CheckOutcome, CompileError, Lexer, Token, TokenValue, check_source};

use super::{CheckOptions, CliError, CliResult, ExitCode, MessageFormat};

/// Maximum source file size (16 MB)
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a source file, rejecting anything unreadable or larger than `MAX_SOURCE_SIZE`.
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// check
// ============================================================================

/// Scan and parse a file, print its diagnostics, and fail if any were reported.
pub fn check_file(file_path: &str, options: &CheckOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let outcome = check_source(&source, &options.parser);
    tracing::info!(file = file_path, errors = outcome.error_count(), "checked");

    print!("{}", render_check(file_path, &source, &outcome, options.format));

    if outcome.is_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Render trace, diagnostics and the summary line of one check.
pub fn render_check(file_path: &str, source: &str, outcome: &CheckOutcome, format: MessageFormat) -> String {
    let mut out = String::new();
    for line in &outcome.report.trace {
        let _ = writeln!(out, "{}", line);
    }

    for err in outcome.diagnostics() {
        match format {
            MessageFormat::Human => {
                let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
                let _ = writeln!(out, "{:?}", report);
            }
            MessageFormat::Short => {
                let _ = writeln!(out, "-- {}", err);
            }
            MessageFormat::Json => {
                let _ = writeln!(out, "{}", diagnostic_json(file_path, err));
            }
        }
    }

    // JSON output stays machine-readable: one object per line, no summary.
    if format != MessageFormat::Json {
        let _ = writeln!(out, "{}", summary(outcome.error_count()));
    }
    out
}

fn diagnostic_json(file_path: &str, err: &CompileError) -> serde_json::Value {
    json!({
        "file": file_path,
        "kind": err.kind.as_str(),
        "line": err.line,
        "col": err.col,
        "message": err.message,
        "span": { "start": err.span.start, "end": err.span.end },
    })
}

fn summary(count: usize) -> String {
    if count == 1 { "1 error".to_string() } else { format!("{} errors", count) }
}

// ============================================================================
// lex
// ============================================================================

/// Tokenize a file and print every token.
pub fn lex_file(file_path: &str, as_json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let mut scanner = Lexer::new(&source);
    let tokens = scanner.scan_all();
    let errors = scanner.into_errors();

    for token in &tokens {
        if as_json {
            println!("{}", token_json(token));
        } else {
            println!("line {}, col {}: {}", token.line, token.col, token.describe());
        }
    }

    if errors.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    let mut msg = String::new();
    for err in &errors {
        let _ = writeln!(msg, "-- {}", err);
    }
    let _ = write!(msg, "{}", summary(errors.len()));
    Err(CliError::failure(msg))
}

fn token_json(token: &Token) -> serde_json::Value {
    let value = match &token.value {
        TokenValue::None => serde_json::Value::Null,
        TokenValue::Ident(name) => json!(name),
        TokenValue::Number(n) => json!(n),
        TokenValue::Char(c) => json!(c.to_string()),
    };
    json!({
        "kind": token.kind.to_string(),
        "code": token.kind.code(),
        "line": token.line,
        "col": token.col,
        "value": value,
    })
}
