//! Property-based tests for the MicroJava syntax checker
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use mj_core::lang::keywords;
use mjc::{CheckOutcome, ParserConfig, check_source};
use proptest::collection::vec;
use proptest::prelude::*;

fn check(source: &str) -> CheckOutcome {
    check_source(source, &ParserConfig::default())
}

/// Every parse ends at `eof` unless it reported trailing input, and errors come out in source order.
fn assert_well_formed(outcome: &CheckOutcome) -> Result<(), TestCaseError> {
    let report = &outcome.report;
    prop_assert!(report.reached_eof || report.error_count() >= 1);
    for pair in report.errors.windows(2) {
        prop_assert!((pair[0].line, pair[0].col) <= (pair[1].line, pair[1].col));
    }
    Ok(())
}

// =============================================================================
// Strategies
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}".prop_filter("Not a keyword", |s| keywords::from_str(s).is_none())
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..100_000i32).prop_map(|n| n.to_string()),
        "[a-zA-Z0-9 ]".prop_map(|c| format!("'{}'", c)),
    ]
}

fn designator_strategy() -> impl Strategy<Value = String> {
    (ident_strategy(), vec(ident_strategy(), 0..3)).prop_map(|(head, fields)| {
        fields.iter().fold(head, |acc, field| format!("{}.{}", acc, field))
    })
}

fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![designator_strategy(), literal_strategy()];
    let expr = leaf.prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "%"]), inner.clone())
                .prop_map(|(a, op, b)| format!("{} {} {}", a, op, b)),
            inner.clone().prop_map(|e| format!("({})", e)),
            (designator_strategy(), inner.clone()).prop_map(|(d, e)| format!("{}[{}]", d, e)),
            (ident_strategy(), vec(inner, 0..3)).prop_map(|(f, args)| format!("{}({})", f, args.join(", "))),
            ident_strategy().prop_map(|t| format!("new {}", t)),
        ]
    });
    // A leading minus is only allowed at the start of an expression.
    (any::<bool>(), expr).prop_map(|(neg, e)| if neg { format!("-{}", e) } else { e })
}

fn condition_strategy() -> impl Strategy<Value = String> {
    (
        expr_strategy(),
        prop::sample::select(vec!["==", "!=", "<", "<=", ">", ">="]),
        expr_strategy(),
    )
        .prop_map(|(a, op, b)| format!("{} {} {}", a, op, b))
}

fn statement_strategy() -> impl Strategy<Value = String> {
    let simple = prop_oneof![
        (designator_strategy(), expr_strategy()).prop_map(|(d, e)| format!("{} = {};", d, e)),
        (designator_strategy(), vec(expr_strategy(), 0..3)).prop_map(|(d, args)| format!("{}({});", d, args.join(", "))),
        expr_strategy().prop_map(|e| format!("print({});", e)),
        (expr_strategy(), 1..10i32).prop_map(|(e, w)| format!("print({}, {});", e, w)),
        designator_strategy().prop_map(|d| format!("read({});", d)),
        proptest::option::of(expr_strategy()).prop_map(|e| match e {
            Some(e) => format!("return {};", e),
            None => "return;".to_string(),
        }),
        Just(";".to_string()),
    ];
    simple.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            (condition_strategy(), inner.clone()).prop_map(|(c, s)| format!("while ({}) {}", c, s)),
            (condition_strategy(), inner.clone(), proptest::option::of(inner.clone())).prop_map(|(c, s, e)| {
                match e {
                    Some(e) => format!("if ({}) {} else {}", c, s, e),
                    None => format!("if ({}) {}", c, s),
                }
            }),
            vec(inner, 0..4).prop_map(|body| format!("{{ {} }}", body.join(" "))),
        ]
    })
}

fn program_strategy() -> impl Strategy<Value = String> {
    (
        ident_strategy(),
        vec((ident_strategy(), any::<bool>(), ident_strategy()), 0..4),
        vec(statement_strategy(), 0..6),
    )
        .prop_map(|(name, vars, body)| {
            let decls: Vec<String> = vars
                .iter()
                .map(|(ty, array, var)| format!("{}{} {};", ty, if *array { "[]" } else { "" }, var))
                .collect();
            format!(
                "program {}\n  {}\n{{\n  void main() {{\n    {}\n  }}\n}}\n",
                name,
                decls.join("\n  "),
                body.join("\n    ")
            )
        })
}

/// Spellings of every terminal, for token-soup inputs.
const SPELLINGS: &[&str] = &[
    "x", "42", "'c'", "+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">=", "=", ";", ",", ".", "(", ")",
    "[", "]", "{", "}", "class", "else", "final", "if", "new", "print", "program", "read", "return", "void",
    "while", "#",
];

fn token_soup_strategy() -> impl Strategy<Value = String> {
    vec(prop::sample::select(SPELLINGS.to_vec()), 0..60).prop_map(|tokens| tokens.join(" "))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: Programs generated from the grammar are accepted
    #[test]
    fn generated_programs_are_accepted(source in program_strategy()) {
        let outcome = check(&source);
        prop_assert!(outcome.is_accepted(), "{}\n{:?}", source, outcome.diagnostics());
        prop_assert!(outcome.report.reached_eof);
    }

    /// Property: Arbitrary token sequences terminate with a well-formed report
    #[test]
    fn token_soup_terminates(source in token_soup_strategy()) {
        assert_well_formed(&check(&source))?;
    }

    /// Property: Token soup after a valid header still terminates
    #[test]
    fn token_soup_inside_method_terminates(body in token_soup_strategy()) {
        let source = format!("program P {{ void m() {{ {} }} }}", body);
        assert_well_formed(&check(&source))?;
    }

    /// Property: Dropping one token from a valid program never hangs or panics
    #[test]
    fn truncated_programs_terminate(source in program_strategy(), cut in any::<prop::sample::Index>()) {
        let tokens: Vec<&str> = source.split_whitespace().collect();
        let mut damaged = tokens.clone();
        damaged.remove(cut.index(tokens.len()));
        assert_well_formed(&check(&damaged.join(" ")))?;
    }

    /// Property: A closing token replaced by a misplaced keyword is always reported
    #[test]
    fn misplaced_keyword_is_reported(source in program_strategy(), pick in any::<prop::sample::Index>()) {
        let closers: Vec<usize> = source
            .char_indices()
            .filter(|(_, c)| matches!(c, ';' | ')' | '}'))
            .map(|(i, _)| i)
            .collect();
        let at = closers[pick.index(closers.len())];
        let damaged = format!("{} class {}", &source[..at], &source[at + 1..]);
        let outcome = check(&damaged);
        prop_assert!(outcome.error_count() >= 1, "{}", damaged);
        assert_well_formed(&outcome)?;
    }

    /// Property: Debouncing never reports more errors than reporting everything
    #[test]
    fn debounce_only_removes_errors(source in token_soup_strategy()) {
        let debounced = check_source(&source, &ParserConfig::default());
        let all = check_source(&source, &ParserConfig::new().with_min_error_distance(0));
        prop_assert!(debounced.report.error_count() <= all.report.error_count());
        prop_assert_eq!(debounced.report.error_count() == 0, all.report.error_count() == 0);
    }

    /// Property: Arbitrary text never panics the checker
    #[test]
    fn arbitrary_text_terminates(source in "\\PC{0,200}") {
        assert_well_formed(&check(&source))?;
    }
}
