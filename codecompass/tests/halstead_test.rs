//! Halstead metric tests with hand-computed expected counts.

#![allow(clippy::unwrap_used)] // Tests use unwrap for clarity

use codecompass::halstead::analyze_halstead;
use codecompass::parsing::Language;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn simple_addition_function_exact_counts() {
    // Operators: function, return, +
    // Operands: add, "a + b", a, b
    let code = "function add(a, b) { return a + b; }";
    let metrics = analyze_halstead(code, Language::JavaScript).unwrap();

    assert_eq!(metrics.n1, 3);
    assert_eq!(metrics.n2, 4);
    assert_eq!(metrics.h1, 3);
    assert_eq!(metrics.h2, 4);
    assert!(close(metrics.vocabulary, 7.0));
    assert!(close(metrics.length, 7.0));
    assert!(close(metrics.volume, 7.0 * 7.0_f64.log2()));
    // (3 / 2) * (4 / 4)
    assert!(close(metrics.difficulty, 1.5));
    assert!(close(metrics.effort, metrics.volume * metrics.difficulty));
}

#[test]
fn arrow_binding_exact_counts() {
    // Operators: =, *
    // Operand events: double, "(x) => x * 2", x, 2 (binary right), 2 (literal)
    let code = "const double = (x) => x * 2;";
    let metrics = analyze_halstead(code, Language::JavaScript).unwrap();

    assert_eq!(metrics.n1, 2);
    assert_eq!(metrics.n2, 4);
    assert_eq!(metrics.h1, 2);
    assert_eq!(metrics.h2, 5);
    assert!(close(metrics.vocabulary, 6.0));
    assert!(close(metrics.length, 7.0));
    assert!(close(metrics.difficulty, 1.25));
}

#[test]
fn vocabulary_and_length_identities_hold() {
    let code = r"
function classify(x) {
    if (x > 10) {
        return 'big';
    }
    return x > 0 ? 'small' : 'neg';
}
";
    let metrics = analyze_halstead(code, Language::JavaScript).unwrap();
    assert!(close(metrics.vocabulary, (metrics.n1 + metrics.n2) as f64));
    assert!(close(metrics.length, (metrics.h1 + metrics.h2) as f64));
    assert!(metrics.volume.is_finite());
    assert!(metrics.difficulty.is_finite());
    assert!(metrics.effort.is_finite());
    assert!(metrics.volume > 0.0);
}

#[test]
fn empty_source_yields_all_zeros() {
    let metrics = analyze_halstead("", Language::JavaScript).unwrap();
    assert_eq!(metrics.n1, 0);
    assert_eq!(metrics.n2, 0);
    assert!(close(metrics.vocabulary, 0.0));
    assert!(close(metrics.volume, 0.0));
    assert!(close(metrics.difficulty, 0.0));
    assert!(close(metrics.effort, 0.0));
}

#[test]
fn operators_only_source_has_zero_difficulty() {
    // An if with a bare identifier condition: no operand-producing nodes.
    let metrics = analyze_halstead("if (x) {}", Language::JavaScript).unwrap();
    assert_eq!(metrics.n1, 1);
    assert_eq!(metrics.n2, 0);
    assert!(close(metrics.difficulty, 0.0));
}

#[test]
fn interpolated_template_counts_as_operator() {
    let plain = "const s = `abc`;";
    let interpolated = "const s = `a${b}c`;";

    // Plain template contributes only the declarator's "="
    let plain_metrics = analyze_halstead(plain, Language::JavaScript).unwrap();
    assert_eq!(plain_metrics.n1, 1);

    // Interpolation adds the "template" operator
    let interp_metrics = analyze_halstead(interpolated, Language::JavaScript).unwrap();
    assert_eq!(interp_metrics.n1, 2);
}

#[test]
fn calls_members_and_subscripts_are_operators() {
    // Operators: call, ., []
    let code = "console.log(items[0]);";
    let metrics = analyze_halstead(code, Language::JavaScript).unwrap();
    assert_eq!(metrics.n1, 3);
    // Operands: console.log, items[0], log, 0
    assert_eq!(metrics.n2, 4);
}

#[test]
fn spread_counts_as_operator() {
    let code = "f(...args);";
    let metrics = analyze_halstead(code, Language::JavaScript).unwrap();
    // call and ...
    assert_eq!(metrics.n1, 2);
}

#[test]
fn bare_return_contributes_nothing() {
    let with_value = analyze_halstead("function f() { return 1; }", Language::JavaScript).unwrap();
    let without = analyze_halstead("function f() { return; }", Language::JavaScript).unwrap();
    assert!(with_value.h1 > without.h1);
    // function/f remain the only operator/operand pair
    assert_eq!(without.n1, 1);
    assert_eq!(without.n2, 1);
}

#[test]
fn typescript_sources_are_measured_too() {
    let code = "function add(a: number, b: number): number { return a + b; }";
    let metrics = analyze_halstead(code, Language::TypeScript).unwrap();
    assert_eq!(metrics.n1, 3);
    assert!(metrics.volume > 0.0);
}
