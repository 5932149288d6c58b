//! End-to-end tests for the expression pipeline: tokenize -> parse ->
//! render / simplify, exercised through the public API only.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use mygram_query::{SyntaxError, convert, parse, simplify};

#[test]
fn worked_examples_render_as_documented() {
    // The conversions promised to client authors.
    let cases = [
        ("golang tutorial", "golang AND tutorial"),
        (
            "\"machine learning\" tutorial",
            "\"machine learning\" AND tutorial",
        ),
        ("golang -old", "golang AND NOT old"),
        ("python OR ruby", "(python OR ruby)"),
        (
            "golang +(tutorial OR guide)",
            "golang AND (tutorial OR guide)",
        ),
        (
            "+golang +(tutorial OR guide) -old",
            "golang AND NOT old AND (tutorial OR guide)",
        ),
        (
            "機械学習\u{3000}チュートリアル",
            "機械学習 AND チュートリアル",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(convert(input).unwrap(), expected, "input: {input}");
    }
}

#[test]
fn rendered_queries_reparse_without_losing_structure() {
    // The backend re-parses the rendered string, so rendering must stay
    // inside the grammar this crate accepts.
    for input in [
        "golang tutorial",
        "+a -b \"c d\"",
        "python OR ruby OR perl",
        "+golang +(tutorial OR guide) -old",
    ] {
        let rendered = convert(input).unwrap();
        assert!(
            parse(&rendered).is_ok(),
            "rendered query failed to reparse: {rendered}"
        );
    }
}

#[test]
fn simplify_agrees_with_parse() {
    let expr = parse("+golang -old tutorial").unwrap();
    let simplified = simplify("+golang -old tutorial").unwrap().unwrap();

    assert_eq!(simplified.main_term, expr.required_terms[0]);
    assert_eq!(simplified.and_terms, expr.required_terms[1..].to_vec());
    assert_eq!(simplified.not_terms, expr.excluded_terms);
}

#[test]
fn simplify_reports_missing_main_term_distinctly() {
    // Not a syntax error: the caller must check for the empty outcome.
    assert_eq!(simplify("-old -deprecated"), Ok(None));
    assert!(matches!(simplify("a (b"), Err(SyntaxError::UnbalancedParens)));
}

#[test]
fn parsing_has_no_hidden_state() {
    let input = "+golang +(tutorial OR guide) -old";
    let first = parse(input).unwrap();
    for _ in 0..10 {
        assert_eq!(parse(input).unwrap(), first);
    }
}
