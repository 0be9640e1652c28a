//! Parser implementation for MiniC syntax analysis.
//!
//! This module contains the main Parser struct, the token matching
//! primitives and the declaration-level productions:
//!
//! ```text
//! Program    ::= ( TypeSpecifier ID ( FunPart | VarPart ) )*
//! FunPart    ::= "(" ParamsList? ")" CompoundStmt
//! ParamsList ::= ParamsDecl ( "," ParamsDecl )*
//! ParamsDecl ::= TypeSpecifier ID ( "[" INTLITERAL "]" )?
//! VarPart    ::= ( "[" INTLITERAL "]" )? ( "=" Initializer )? ( "," InitDecl )* ";"
//! InitDecl   ::= ID ( "[" INTLITERAL "]" )? ( "=" Initializer )?
//! ```
//!
//! Statement and expression recognition live in the sibling `stmt` and
//! `expr` modules.

use crate::{
    errors::{errors::SyntaxError, reporter::ErrorReporter},
    scanner::{
        scanner::Scanner,
        tokens::{Token, TokenKind},
    },
};

use super::{expr::parse_initializer, stmt::parse_compound_stmt};

/// The recursive-descent recognizer over the MiniC grammar.
///
/// The parser pulls tokens from the scanner one at a time and keeps
/// exactly one live lookahead token. Syntax errors are reported to the
/// reporter at the point of detection and then propagate as `Err` values
/// up to the nearest recovery point.
pub struct Parser<'r> {
    /// The token source
    scanner: Scanner,
    /// The diagnostic sink, exclusively borrowed for one parse
    reporter: &'r mut ErrorReporter,
    /// The single lookahead token
    current_token: Token,
}

impl<'r> Parser<'r> {
    /// Creates a new Parser and pulls the first lookahead token.
    ///
    /// # Arguments
    ///
    /// * `scanner` - The token source for one source file
    /// * `reporter` - The diagnostic sink that counts reported errors
    pub fn new(mut scanner: Scanner, reporter: &'r mut ErrorReporter) -> Self {
        let current_token = scanner.scan();
        Parser {
            scanner,
            reporter,
            current_token,
        }
    }

    /// Returns the current lookahead token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current lookahead token.
    pub fn current_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Unconditionally consumes the current token and pulls the next one.
    ///
    /// Used once the parser has already decided, by inspecting the
    /// lookahead, that the current token belongs to the production at
    /// hand.
    pub fn accept_it(&mut self) {
        self.current_token = self.scanner.scan();
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// On a mismatch, reports `"% expected here"` with the expected
    /// kind's canonical spelling at the current token's position and
    /// raises; the current token is not consumed.
    pub fn accept(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        if self.current_token.kind == expected {
            self.accept_it();
            Ok(())
        } else {
            Err(self.syntax_error("% expected here", expected.spelling()))
        }
    }

    /// Reports a diagnostic at the current token's position and builds
    /// the SyntaxError signal that unwinds to the nearest recovery
    /// point. `quoted` is wrapped in quotes if not already quoted.
    pub fn syntax_error(&mut self, template: &str, quoted: &str) -> SyntaxError {
        let quoted = if quoted.starts_with('"') {
            String::from(quoted)
        } else {
            format!("\"{}\"", quoted)
        };
        let position = self.current_token.span.start.clone();

        self.reporter.report_error(template, &quoted, &position);
        SyntaxError::new(template, &quoted, position)
    }

    /// Top-level parse routine and outermost recovery point.
    ///
    /// Parses `Program`, then confirms end-of-input. An error that
    /// escapes the whole program is caught here; the remaining tokens
    /// are drained so the token source is exhausted either way. Success
    /// is judged solely by the reporter's error count.
    pub fn parse(&mut self) {
        if self.parse_source().is_err() {
            while self.current_token.kind != TokenKind::Eof {
                self.accept_it();
            }
        }
    }

    fn parse_source(&mut self) -> Result<(), SyntaxError> {
        self.parse_program()?;
        if self.current_token.kind != TokenKind::Eof {
            let lexeme = self.current_token.lexeme.clone();
            return Err(self.syntax_error("% not expected after end of program", &lexeme));
        }
        Ok(())
    }

    fn parse_program(&mut self) -> Result<(), SyntaxError> {
        while self.current_kind().is_type_specifier() {
            self.accept_it();
            self.accept(TokenKind::Id)?;
            if self.current_kind() == TokenKind::LeftParen {
                self.parse_fun_part()?;
            } else {
                self.parse_var_part()?;
            }
        }
        Ok(())
    }

    fn parse_fun_part(&mut self) -> Result<(), SyntaxError> {
        // The caller has already established that the current token is "("
        self.accept_it();
        if self.current_kind().is_type_specifier() {
            self.parse_params_list()?;
        }
        self.accept(TokenKind::RightParen)?;
        parse_compound_stmt(self)
    }

    fn parse_params_list(&mut self) -> Result<(), SyntaxError> {
        self.parse_params_decl()?;
        while self.current_kind() == TokenKind::Comma {
            self.accept_it();
            self.parse_params_decl()?;
        }
        Ok(())
    }

    fn parse_params_decl(&mut self) -> Result<(), SyntaxError> {
        if self.current_kind().is_type_specifier() {
            self.accept_it();
        } else {
            return Err(self.syntax_error("% expected here", "type specifier"));
        }
        self.accept(TokenKind::Id)?;
        if self.current_kind() == TokenKind::LeftBracket {
            self.accept_it();
            self.accept(TokenKind::IntLiteral)?;
            self.accept(TokenKind::RightBracket)?;
        }
        Ok(())
    }

    /// Parses the remainder of a top-level variable declaration, after
    /// `TypeSpecifier ID` have been consumed.
    fn parse_var_part(&mut self) -> Result<(), SyntaxError> {
        if self.current_kind() == TokenKind::LeftBracket {
            self.accept_it();
            self.accept(TokenKind::IntLiteral)?;
            self.accept(TokenKind::RightBracket)?;
        }
        if self.current_kind() == TokenKind::Assign {
            self.accept_it();
            parse_initializer(self)?;
        }
        while self.current_kind() == TokenKind::Comma {
            self.accept_it();
            self.parse_init_decl()?;
        }
        self.accept(TokenKind::Semicolon)
    }

    pub fn parse_init_decl(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::Id)?;
        if self.current_kind() == TokenKind::LeftBracket {
            self.accept_it();
            self.accept(TokenKind::IntLiteral)?;
            self.accept(TokenKind::RightBracket)?;
        }
        if self.current_kind() == TokenKind::Assign {
            self.accept_it();
            parse_initializer(self)?;
        }
        Ok(())
    }
}
