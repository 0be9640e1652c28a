//! Unit tests for error handling.
//!
//! This module contains tests for the SyntaxError type, template
//! formatting and the reporter's error counter.

use crate::errors::errors::{apply_template, SyntaxError};
use crate::errors::reporter::ErrorReporter;
use crate::Position;

#[test]
fn test_apply_template() {
    assert_eq!(apply_template("% expected here", "\";\""), "\";\" expected here");
    assert_eq!(
        apply_template("% is not a valid expression start", "\"}\""),
        "\"}\" is not a valid expression start"
    );
}

#[test]
fn test_apply_template_replaces_only_first_placeholder() {
    assert_eq!(apply_template("% and %", "\"x\""), "\"x\" and %");
}

#[test]
fn test_syntax_error_display() {
    let error = SyntaxError::new("% expected here", "\")\"", Position::new(2, 14));

    assert_eq!(error.to_string(), "\")\" expected here at 2:14");
}

#[test]
fn test_reporter_starts_at_zero() {
    let reporter = ErrorReporter::new();

    assert_eq!(reporter.num_errors(), 0);
}

#[test]
fn test_reporter_counts_each_report_once() {
    let mut reporter = ErrorReporter::new();

    reporter.report_error("% expected here", "\";\"", &Position::new(1, 1));
    reporter.report_error("% expected here", "\"}\"", &Position::new(3, 7));

    assert_eq!(reporter.num_errors(), 2);
}
