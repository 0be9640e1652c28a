//! Error types and error reporting for the syntax analyzer.
//!
//! This module defines the single error kind raised during parsing and
//! the reporter that accumulates diagnostics. It includes:
//!
//! - The SyntaxError structure with source position information
//! - The ErrorReporter diagnostic sink and its error counter
//! - Message template formatting

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
