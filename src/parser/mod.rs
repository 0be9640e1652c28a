//! Parser module: the recursive-descent recognizer for MiniC.
//!
//! This module contains the parser that checks a stream of tokens
//! against the MiniC grammar without building a syntax tree. It handles:
//!
//! - Declaration parsing (functions, variables, parameter lists)
//! - Statement parsing (compound, if/else, for, while, return)
//! - Expression and initializer recognition by balance-tracked scanning
//! - Panic-mode error recovery at statement and program level
//!
//! The parser keeps one token of lookahead and never backtracks. A
//! syntax error is reported where it is detected and then unwinds as a
//! `Result` up to the nearest recovery point.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
