use crate::{errors::errors::SyntaxError, scanner::tokens::TokenKind};

use super::{expr::parse_expr, parser::Parser};

/// CompoundStmt ::= "{" VarDef* Stmt* "}"
///
/// The per-statement loop is the inner recovery point: an error raised
/// while parsing one statement is caught here and panic-skipped past,
/// so one malformed statement costs at most one diagnostic.
pub fn parse_compound_stmt(parser: &mut Parser) -> Result<(), SyntaxError> {
    parser.accept(TokenKind::LeftBrace)?;

    while !matches!(parser.current_kind(), TokenKind::RightBrace | TokenKind::Eof) {
        if parse_stmt(parser).is_err() {
            recover_stmt(parser);
        }
    }

    parser.accept(TokenKind::RightBrace)
}

/// Skips tokens, ignoring nesting, until a synchronizing token: a `;`
/// (consumed, statement parsing resumes after it), a `}` or end of
/// input (left for the enclosing compound statement to handle).
fn recover_stmt(parser: &mut Parser) {
    loop {
        match parser.current_kind() {
            TokenKind::Semicolon => {
                parser.accept_it();
                break;
            }
            TokenKind::RightBrace | TokenKind::Eof => break,
            _ => parser.accept_it(),
        }
    }
}

/// Dispatches on one token of lookahead:
///
/// ```text
/// Stmt ::= CompoundStmt | VarDef
///        | "if" "(" Expr ")" Stmt ( "else" Stmt )?
///        | "for" "(" ( VarDef | Expr ";" | ";" ) Expr? ";" Expr? ")" Stmt
///        | "while" "(" Expr ")" Stmt
///        | "return" Expr? ";"
///        | ";"
///        | Expr ";"
/// ```
pub fn parse_stmt(parser: &mut Parser) -> Result<(), SyntaxError> {
    match parser.current_kind() {
        TokenKind::LeftBrace => parse_compound_stmt(parser),
        kind if kind.is_type_specifier() => parse_var_def(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::For => parse_for_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::Semicolon => {
            parser.accept_it();
            Ok(())
        }
        _ => parse_expr_stmt(parser),
    }
}

/// VarDef ::= TypeSpecifier InitDecl ( "," InitDecl )* ";"
pub fn parse_var_def(parser: &mut Parser) -> Result<(), SyntaxError> {
    // The dispatcher has already seen a type specifier
    parser.accept_it();
    parser.parse_init_decl()?;
    while parser.current_kind() == TokenKind::Comma {
        parser.accept_it();
        parser.parse_init_decl()?;
    }
    parser.accept(TokenKind::Semicolon)
}

fn parse_if_stmt(parser: &mut Parser) -> Result<(), SyntaxError> {
    parser.accept_it();
    parser.accept(TokenKind::LeftParen)?;
    parse_expr(parser)?;
    parser.accept(TokenKind::RightParen)?;
    parse_stmt(parser)?;

    if parser.current_kind() == TokenKind::Else {
        parser.accept_it();
        parse_stmt(parser)?;
    }
    Ok(())
}

fn parse_for_stmt(parser: &mut Parser) -> Result<(), SyntaxError> {
    parser.accept_it();
    parser.accept(TokenKind::LeftParen)?;

    // First clause: a variable definition consumes its own ";"
    if parser.current_kind().is_type_specifier() {
        parse_var_def(parser)?;
    } else if parser.current_kind() == TokenKind::Semicolon {
        parser.accept_it();
    } else {
        parse_expr(parser)?;
        parser.accept(TokenKind::Semicolon)?;
    }

    if parser.current_kind() != TokenKind::Semicolon {
        parse_expr(parser)?;
    }
    parser.accept(TokenKind::Semicolon)?;

    if parser.current_kind() != TokenKind::RightParen {
        parse_expr(parser)?;
    }
    parser.accept(TokenKind::RightParen)?;

    parse_stmt(parser)
}

fn parse_while_stmt(parser: &mut Parser) -> Result<(), SyntaxError> {
    parser.accept_it();
    parser.accept(TokenKind::LeftParen)?;
    parse_expr(parser)?;
    parser.accept(TokenKind::RightParen)?;
    parse_stmt(parser)
}

fn parse_return_stmt(parser: &mut Parser) -> Result<(), SyntaxError> {
    parser.accept_it();
    if parser.current_kind() != TokenKind::Semicolon {
        parse_expr(parser)?;
    }
    parser.accept(TokenKind::Semicolon)
}

fn parse_expr_stmt(parser: &mut Parser) -> Result<(), SyntaxError> {
    parse_expr(parser)?;
    parser.accept(TokenKind::Semicolon)
}
