//! Lexical analysis module for the syntax analyzer.
//!
//! This module contains the scanner that delivers MiniC tokens to the
//! parser, one per request. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod scanner;
pub mod tokens;
