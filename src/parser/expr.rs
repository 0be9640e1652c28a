use crate::{errors::errors::SyntaxError, scanner::tokens::TokenKind};

use super::parser::Parser;

/// Ceiling on tokens consumed by one expression scan. A safety valve
/// against runaway consumption on pathological input, not a grammar
/// rule.
const MAX_EXPR_TOKENS: usize = 500;

fn is_expr_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Id
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::BoolLiteral
            | TokenKind::StringLiteral
            | TokenKind::LeftParen
            | TokenKind::Not
            | TokenKind::Minus
    )
}

/// Recognizes an expression by balance-tracked scanning.
///
/// No structure is built: the scan consumes tokens while tracking
/// paren/brace/bracket depth. A closer at depth 0 belongs to an
/// enclosing construct and stops the scan unconsumed, as does a `;` at
/// paren/brace depth 0 and end of input. Any delimiter still open when
/// the scan stops is reported as unterminated.
pub fn parse_expr(parser: &mut Parser) -> Result<(), SyntaxError> {
    if !is_expr_start(parser.current_kind()) {
        let lexeme = parser.current_token().lexeme.clone();
        return Err(parser.syntax_error("% is not a valid expression start", &lexeme));
    }

    let mut parens: usize = 0;
    let mut braces: usize = 0;
    let mut brackets: usize = 0;
    let mut consumed = 0;

    while consumed < MAX_EXPR_TOKENS {
        match parser.current_kind() {
            TokenKind::LeftParen => parens += 1,
            TokenKind::RightParen => {
                if parens == 0 {
                    break;
                }
                parens -= 1;
            }
            TokenKind::LeftBrace => braces += 1,
            TokenKind::RightBrace => {
                if braces == 0 {
                    break;
                }
                braces -= 1;
            }
            TokenKind::LeftBracket => brackets += 1,
            TokenKind::RightBracket => {
                if brackets == 0 {
                    break;
                }
                brackets -= 1;
            }
            TokenKind::Semicolon if parens == 0 && braces == 0 => break,
            TokenKind::Eof => break,
            _ => {}
        }
        parser.accept_it();
        consumed += 1;
    }

    close_delimiters(parser, parens, braces, brackets)
}

/// Recognizes an initializer by the same balance-tracked scan.
///
/// Unlike an expression there is no start-token check and bracket depth
/// is not watched; additionally a `,` at paren/brace depth 0 stops the
/// scan, handing control back to the `( "," InitDecl )*` production.
pub fn parse_initializer(parser: &mut Parser) -> Result<(), SyntaxError> {
    let mut parens: usize = 0;
    let mut braces: usize = 0;

    loop {
        match parser.current_kind() {
            TokenKind::LeftParen => parens += 1,
            TokenKind::RightParen => {
                if parens == 0 {
                    break;
                }
                parens -= 1;
            }
            TokenKind::LeftBrace => braces += 1,
            TokenKind::RightBrace => {
                if braces == 0 {
                    break;
                }
                braces -= 1;
            }
            TokenKind::Semicolon | TokenKind::Comma if parens == 0 && braces == 0 => break,
            TokenKind::Eof => break,
            _ => {}
        }
        parser.accept_it();
    }

    close_delimiters(parser, parens, braces, 0)
}

fn close_delimiters(
    parser: &mut Parser,
    parens: usize,
    braces: usize,
    brackets: usize,
) -> Result<(), SyntaxError> {
    if parens > 0 {
        return Err(parser.syntax_error("% expected here", ")"));
    }
    if braces > 0 {
        return Err(parser.syntax_error("% expected here", "}"));
    }
    if brackets > 0 {
        return Err(parser.syntax_error("% expected here", "]"));
    }
    Ok(())
}
