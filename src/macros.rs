//! Utility macros for the syntax analyzer.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default scanner handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's raw spelling
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates a default scanner handler for tokens with a fixed spelling.
///
/// Generates a handler that turns the matched text into a token of the
/// given kind and advances the scanner past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r";").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |scanner: &mut Scanner, text: &str| Some(scanner.make_token($kind, text))
    };
}
