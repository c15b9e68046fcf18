//! Snapshot tests for rendered checker output
//!
//! Review changes: `cargo insta review`

use mjc::cli::MessageFormat;
use mjc::cli::commands::render_check;
use mjc::{ParserConfig, check_source};

fn render(source: &str, config: &ParserConfig, format: MessageFormat) -> String {
    let outcome = check_source(source, config);
    render_check("p.mj", source, &outcome, format)
}

#[test]
fn test_trace_output() {
    let config = ParserConfig::new().with_trace(true);
    insta::assert_snapshot!(render("program P int x; { }", &config, MessageFormat::Short), @r"
    line 1, col 1: program
    line 1, col 9: identifier (P)
    line 1, col 11: identifier (int)
    line 1, col 15: identifier (x)
    line 1, col 16: ;
    line 1, col 18: {
    line 1, col 20: }
    line 1, col 21: eof
    0 errors
    ");
}

#[test]
fn test_cascade_without_debounce() {
    let config = ParserConfig::new().with_min_error_distance(0);
    insta::assert_snapshot!(render("program P { void m() { x = = = 1; } }", &config, MessageFormat::Short), @r"
    -- line 1 col 28: invalid factor
    -- line 1 col 28: ; expected
    -- line 1 col 28: invalid start of statement
    3 errors
    ");
}

#[test]
fn test_cascade_with_debounce() {
    insta::assert_snapshot!(render("program P { void m() { x = = = 1; } }", &ParserConfig::default(), MessageFormat::Short), @r"
    -- line 1 col 28: invalid factor
    1 error
    ");
}

#[test]
fn test_json_output() {
    insta::assert_snapshot!(render("program P { void m() { x; } }", &ParserConfig::default(), MessageFormat::Json), @r#"{"col":25,"file":"p.mj","kind":"syntax","line":1,"message":"invalid assignment or call","span":{"end":25,"start":24}}"#);
}
