use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("void", TokenKind::Void);
        map.insert("int", TokenKind::Int);
        map.insert("bool", TokenKind::Bool);
        map.insert("float", TokenKind::Float);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::BoolLiteral);
        map.insert("false", TokenKind::BoolLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Error,

    Id,
    IntLiteral,
    FloatLiteral,
    BoolLiteral,
    StringLiteral,

    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,

    Assign, // =
    Eq,     // ==
    Not,    // !
    NotEq,  // !=

    Less,
    LessEq,
    Greater,
    GreaterEq,

    And,
    Or,

    Plus,
    Minus,
    Times,
    Div,
    Mod,

    Comma,
    Semicolon,

    // Reserved
    Void,
    Int,
    Bool,
    Float,
    If,
    Else,
    For,
    While,
    Return,
}

impl TokenKind {
    /// The canonical spelling used in diagnostics such as `"%" expected here`.
    pub fn spelling(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Error => "error",
            TokenKind::Id => "identifier",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::BoolLiteral => "bool literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::Not => "!",
            TokenKind::NotEq => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEq => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEq => ">=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Void => "void",
            TokenKind::Int => "int",
            TokenKind::Bool => "bool",
            TokenKind::Float => "float",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Return => "return",
        }
    }

    /// Whether this kind can open a declaration: `void`, `int`, `bool` or `float`.
    pub fn is_type_specifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Void | TokenKind::Int | TokenKind::Bool | TokenKind::Float
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    fn carries_lexeme(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Id
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BoolLiteral
                | TokenKind::StringLiteral
                | TokenKind::Error
        )
    }

    pub fn debug(&self) {
        if self.carries_lexeme() {
            println!("{} ({}) at {}", self.kind, self.lexeme, self.span.start);
        } else {
            println!("{} () at {}", self.kind, self.span.start);
        }
    }
}
