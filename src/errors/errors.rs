use thiserror::Error;

use crate::Position;

/// Substitutes the quoted token spelling for the single `%` placeholder
/// in a message template.
pub fn apply_template(template: &str, quoted: &str) -> String {
    template.replacen('%', quoted, 1)
}

/// The one error kind of the syntax analyzer.
///
/// A SyntaxError is raised whenever an expected token kind is absent, an
/// expression does not start validly, or a delimiter fails to close
/// before scan termination. It unwinds the parser's call chain up to the
/// nearest recovery point; the diagnostic itself has already been
/// reported to the [`ErrorReporter`](super::reporter::ErrorReporter)
/// when the value is constructed.
#[derive(Error, Debug, Clone)]
#[error("{message} at {position}")]
pub struct SyntaxError {
    pub message: String,
    pub position: Position,
}

impl SyntaxError {
    pub fn new(template: &str, quoted: &str, position: Position) -> Self {
        SyntaxError {
            message: apply_template(template, quoted),
            position,
        }
    }
}
