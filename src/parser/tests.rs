//! Unit tests for the parser module.
//!
//! This module contains tests for recognizing various MiniC constructs
//! including:
//! - Top-level function and variable declarations
//! - Compound statements and control flow
//! - Balance-tracked expression and initializer scanning
//! - Panic-mode error recovery

use crate::errors::reporter::ErrorReporter;
use crate::scanner::scanner::Scanner;
use super::parser::Parser;

fn parse_source(source: &str) -> u32 {
    let scanner = Scanner::new(source.to_string());
    let mut reporter = ErrorReporter::new();
    let mut parser = Parser::new(scanner, &mut reporter);
    parser.parse();
    reporter.num_errors()
}

#[test]
fn test_parse_empty_source() {
    assert_eq!(parse_source(""), 0);
}

#[test]
fn test_parse_variable_declaration() {
    assert_eq!(parse_source("int x;"), 0);
}

#[test]
fn test_parse_array_declaration() {
    assert_eq!(parse_source("int a[10];"), 0);
}

#[test]
fn test_parse_initialized_declarations() {
    assert_eq!(parse_source("float f = 1.0;"), 0);
    assert_eq!(parse_source("bool b = true, c;"), 0);
    assert_eq!(parse_source("int d = 1, e[2], g = 2 + 3;"), 0);
}

#[test]
fn test_parse_function_declaration() {
    assert_eq!(parse_source("int main() { return 0; }"), 0);
}

#[test]
fn test_parse_function_with_params() {
    assert_eq!(parse_source("void f(int a, bool b[4], float c) { }"), 0);
}

#[test]
fn test_parse_if_else_statement() {
    let source = "int main() { if (x > 0) { x = 1; } else x = 2; }";
    assert_eq!(parse_source(source), 0);
}

#[test]
fn test_parse_while_loop() {
    assert_eq!(parse_source("int main() { while (i < 10) i = i + 1; }"), 0);
}

#[test]
fn test_parse_for_loop_with_var_def() {
    let source = "int main() { for (int i = 0; i < 3; i = i + 1) x = x + i; }";
    assert_eq!(parse_source(source), 0);
}

#[test]
fn test_parse_for_loop_with_expr_clause() {
    assert_eq!(parse_source("int main() { for (i = 0; i < 3;) { } }"), 0);
}

#[test]
fn test_parse_for_loop_with_empty_clauses() {
    assert_eq!(parse_source("int main() { for (;;) ; }"), 0);
}

#[test]
fn test_parse_local_declarations_then_statements() {
    let source = "int main() { int x; float y = 0.5; x = 1; return x; }";
    assert_eq!(parse_source(source), 0);
}

#[test]
fn test_parse_nested_compound_statements() {
    assert_eq!(parse_source("int main() { { int y; { y = 1; } } }"), 0);
}

#[test]
fn test_parse_nested_call_expression() {
    // The scan tracks all three delimiter depths across the statement
    assert_eq!(parse_source("int main() { y = f(a[i], g(2)) + (3 * 4); }"), 0);
}

#[test]
fn test_parse_unary_expression_starts() {
    assert_eq!(parse_source("int main() { x = -1; b = !ok; }"), 0);
}

#[test]
fn test_parse_missing_semicolon_before_brace() {
    // The "}" is left for the compound statement; the missing ";" is the
    // only error
    assert_eq!(parse_source("int main() { x = 1 }"), 1);
}

#[test]
fn test_parse_missing_closing_brace_at_eof() {
    assert_eq!(parse_source("int main() { return; "), 1);
}

#[test]
fn test_parse_malformed_parameter_list() {
    assert_eq!(parse_source("int f( { }"), 1);
}

#[test]
fn test_parse_unbalanced_paren_in_initializer() {
    assert_eq!(parse_source("int x = (1 + 2;"), 1);
}

#[test]
fn test_parse_unbalanced_bracket_in_expression() {
    assert_eq!(parse_source("int main() { x = a[1; }"), 1);
}

#[test]
fn test_parse_recovery_within_compound() {
    // One malformed statement, the rest still recognized cleanly
    let source = "int main() { int x; ) ; x = 1; return; }";
    assert_eq!(parse_source(source), 1);
}

#[test]
fn test_parse_recovery_past_error_token() {
    assert_eq!(parse_source("int main() { @; x = 1; }"), 1);
}

#[test]
fn test_parse_trailing_tokens_after_program() {
    assert_eq!(parse_source("int x; y"), 1);
}

#[test]
fn test_parse_error_at_top_level_drains_input() {
    // The error escapes to parse(), which drains the remaining tokens
    assert_eq!(parse_source("int 5; int y;"), 1);
}

#[test]
fn test_parse_expression_scan_ceiling() {
    // 603 expression tokens trip the 500-token scan ceiling; the scan
    // stops mid-expression and the pending ";" is reported missing once
    let mut source = String::from("int main() { y = 1");
    for _ in 0..300 {
        source.push_str(" + 1");
    }
    source.push_str("; }");

    assert_eq!(parse_source(&source), 1);
}

#[test]
fn test_parse_is_idempotent_across_instances() {
    let source = "int main() { x = 1 } int y;";

    let first = parse_source(source);
    let second = parse_source(source);

    assert_eq!(first, second);
}
