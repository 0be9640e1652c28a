use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// A handler turns the text matched by a pattern into a token, or into
/// nothing for skipped input (whitespace, comments).
pub type MatchHandler = fn(&mut Scanner, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: MatchHandler,
}

/// Pull-based scanner over a MiniC source file.
///
/// Each call to [`Scanner::scan`] delivers the next token; once the end
/// of input is reached, every further call yields `Eof` again.
pub struct Scanner {
    patterns: Vec<RegexPattern>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    debugging: bool,
}

impl Scanner {
    pub fn new(source: String) -> Scanner {
        Scanner {
            // Longer spellings come before their prefixes ("==" before "="),
            // and comments before the division operator.
            patterns: vec![
                RegexPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new(r"//[^\n]*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new(r"(?s)/\*.*?\*/").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new(r"[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new(r"[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new(r#""(?:[^"\\]|\\.)*""#).unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new(r"==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq) },
                RegexPattern { regex: Regex::new(r"!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq) },
                RegexPattern { regex: Regex::new(r"<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEq) },
                RegexPattern { regex: Regex::new(r">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEq) },
                RegexPattern { regex: Regex::new(r"&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And) },
                RegexPattern { regex: Regex::new(r"\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or) },
                RegexPattern { regex: Regex::new(r"=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign) },
                RegexPattern { regex: Regex::new(r"!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
                RegexPattern { regex: Regex::new(r"<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
                RegexPattern { regex: Regex::new(r">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
                RegexPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
                RegexPattern { regex: Regex::new(r"-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus) },
                RegexPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Times) },
                RegexPattern { regex: Regex::new(r"/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Div) },
                RegexPattern { regex: Regex::new(r"%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mod) },
                RegexPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen) },
                RegexPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen) },
                RegexPattern { regex: Regex::new(r"\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBrace) },
                RegexPattern { regex: Regex::new(r"\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBrace) },
                RegexPattern { regex: Regex::new(r"\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBracket) },
                RegexPattern { regex: Regex::new(r"\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBracket) },
                RegexPattern { regex: Regex::new(r",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
                RegexPattern { regex: Regex::new(r";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
            ],
            source,
            pos: 0,
            line: 1,
            column: 1,
            debugging: false,
        }
    }

    /// Print every delivered token, for observing the token sequence.
    pub fn enable_debugging(&mut self) {
        self.debugging = true;
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    pub fn make_token(&mut self, kind: TokenKind, text: &str) -> Token {
        let start = self.position();
        self.advance_over(text);
        MK_TOKEN!(
            kind,
            String::from(text),
            Span {
                start,
                end: self.position()
            }
        )
    }

    /// Delivers the next token.
    pub fn scan(&mut self) -> Token {
        loop {
            if self.at_eof() {
                let here = self.position();
                let token = MK_TOKEN!(
                    TokenKind::Eof,
                    String::from("$"),
                    Span {
                        start: here.clone(),
                        end: here
                    }
                );
                if self.debugging {
                    token.debug();
                }
                return token;
            }

            let rest = &self.source[self.pos..];
            let mut matched: Option<(MatchHandler, String)> = None;

            for pattern in &self.patterns {
                if let Some(found) = pattern.regex.find(rest) {
                    if found.start() == 0 {
                        matched = Some((pattern.handler, String::from(found.as_str())));
                        break;
                    }
                }
            }

            let token = match matched {
                Some((handler, text)) => handler(self, &text),
                None => {
                    // One unrecognised character becomes an Error token;
                    // the parser rejects it through normal matching.
                    let offending: String = rest.chars().take(1).collect();
                    Some(self.make_token(TokenKind::Error, &offending))
                }
            };

            if let Some(token) = token {
                if self.debugging {
                    token.debug();
                }
                return token;
            }
        }
    }
}

fn skip_handler(scanner: &mut Scanner, text: &str) -> Option<Token> {
    scanner.advance_over(text);
    None
}

fn symbol_handler(scanner: &mut Scanner, text: &str) -> Option<Token> {
    if let Some(kind) = RESERVED_LOOKUP.get(text) {
        Some(scanner.make_token(*kind, text))
    } else {
        Some(scanner.make_token(TokenKind::Id, text))
    }
}

fn number_handler(scanner: &mut Scanner, text: &str) -> Option<Token> {
    if text.contains('.') {
        Some(scanner.make_token(TokenKind::FloatLiteral, text))
    } else {
        Some(scanner.make_token(TokenKind::IntLiteral, text))
    }
}

fn string_handler(scanner: &mut Scanner, text: &str) -> Option<Token> {
    let start = scanner.position();
    scanner.advance_over(text);
    let lexeme = unescape(&text[1..text.len() - 1]);

    Some(MK_TOKEN!(
        TokenKind::StringLiteral,
        lexeme,
        Span {
            start,
            end: scanner.position()
        }
    ))
}

fn unescape(literal: &str) -> String {
    let mut result = String::new();
    let mut chars = literal.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some(other) => {
                // Unknown escape, keep it verbatim
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
