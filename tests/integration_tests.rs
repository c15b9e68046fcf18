//! Integration tests for the MicroJava syntax checker

use std::fs;
use std::path::{Path, PathBuf};

use mjc::{CheckOutcome, Lexer, ParserConfig, TokenStream, check_source, parser};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "mj").unwrap_or(false))
        .collect();
    files.sort();
    assert!(!files.is_empty(), "no fixtures in {}", dir.display());
    files
}

fn check(source: &str) -> CheckOutcome {
    check_source(source, &ParserConfig::default())
}

/// `L:C message` for every diagnostic, in reporting order.
fn rendered(outcome: &CheckOutcome) -> Vec<String> {
    outcome
        .diagnostics()
        .iter()
        .map(|e| format!("{}:{} {}", e.line, e.col, e.message))
        .collect()
}

/// Test that all valid fixtures are accepted
#[test]
fn test_valid_fixtures() {
    for path in fixtures("valid") {
        let source = fs::read_to_string(&path).unwrap();
        let outcome = check(&source);
        assert!(
            outcome.is_accepted(),
            "Expected {} to be accepted, got: {:?}",
            path.display(),
            rendered(&outcome)
        );
        assert!(outcome.report.reached_eof);
    }
}

/// Test that invalid fixtures report exactly the diagnostics in their `// expect:` header
#[test]
fn test_invalid_fixtures() {
    for path in fixtures("invalid") {
        let source = fs::read_to_string(&path).unwrap();
        let expected: Vec<String> = source
            .lines()
            .filter_map(|line| line.strip_prefix("// expect: "))
            .map(str::to_string)
            .collect();
        assert!(!expected.is_empty(), "{} has no expectations", path.display());

        let outcome = check(&source);
        assert_eq!(rendered(&outcome), expected, "{}", path.display());
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_empty_program() {
        assert!(check("program P { }").is_accepted());
    }

    #[test]
    fn test_constant_declaration() {
        assert!(check("program P final int x = 5 ; { }").is_accepted());
    }

    #[test]
    fn test_missing_semicolon_single_error() {
        let outcome = check("program P int x ; { void m ( ) { x = 1 } }");
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.report.errors[0].message, "; expected");
        assert!(outcome.report.reached_eof);
    }

    #[test]
    fn test_missing_closing_brace_terminates() {
        let outcome = check("program P { void m ( ) { x = 1; }");
        assert!(outcome.error_count() >= 1);
        assert!(outcome.report.reached_eof);
    }

    #[test]
    fn test_independent_parses() {
        let first = check("program P { void m() { x = } }");
        let second = check("program P { void m() { x = 1; } }");
        let third = check("program P { void m() { x = } }");
        assert!(first.error_count() >= 1);
        assert!(second.is_accepted());
        assert_eq!(first, third);
    }

    #[test]
    fn test_lexical_errors_do_not_stop_parsing() {
        let outcome = check("program P final int big = 99999999999; { }");
        assert_eq!(outcome.lex_errors.len(), 1);
        assert_eq!(outcome.lex_errors[0].message, "number too large");
        assert!(outcome.report.is_accepted());
        assert!(!outcome.is_accepted());
    }
}

mod token_sources {
    use super::*;

    #[test]
    fn test_prescanned_tokens_match_streaming_scan() {
        let source = "program P int[] a; { void m() { a[0] = 1; print(a[0], 2); } }";
        let tokens = Lexer::new(source).scan_all();
        let from_vec = parser::parse(TokenStream::from(tokens));
        let streamed = parser::parse(Lexer::new(source));
        assert_eq!(from_vec, streamed);
        assert!(from_vec.is_accepted());
    }

    #[test]
    fn test_truncated_stream_gets_synthetic_eof() {
        let mut tokens = Lexer::new("program P { void m() { x = 1;").scan_all();
        tokens.pop();
        let report = parser::parse(TokenStream::from(tokens));
        assert!(report.reached_eof);
        assert_eq!(report.errors[0].message, "} expected");
    }
}
