//! Lexer for the Tern programming language
//!
//! Handles tokenization including:
//! - Keywords (`if`, `then`, `end`, `global`, …) and data type names (`int`, `bool`, …)
//! - Identifiers and integer literals
//! - Operators (`+ - * / = == != < <= > >=`) and punctuation (`( ) ,`)
//! - `//` line comments
//! - Significant newlines (statement terminators); blank lines collapse into one `Newline`

pub mod tokens;

pub use tokens::{Token, TokenKind, classify_word};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use tern_core::lang::operators::OperatorId;
use tern_core::lang::punctuation::PunctuationId;

/// Lexer for Tern source code.
///
/// Converts source text into a stream of tokens. Lexing stops at the first invalid character.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    line_start: usize,
    /// No token has been emitted on the current line yet
    at_line_start: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            line_start: 0,
            at_line_start: true,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let eof = self.span_from(self.current_pos);
        self.tokens.push(Token::new(TokenKind::Eof, eof));
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Span from `start` to the current position, positioned on the current line.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.current_pos, self.line, start - self.line_start + 1)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), CompileError> {
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.advance();
            } else {
                break;
            }
        }

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            '\n' => {
                if !self.at_line_start {
                    let span = self.span_from(start);
                    self.tokens.push(Token::new(TokenKind::Newline, span));
                }
                self.at_line_start = true;
                self.line += 1;
                self.line_start = self.current_pos;
            }

            '/' => {
                if self.match_char('/') {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                } else {
                    self.add_op(OperatorId::Slash, start);
                }
            }

            '+' => self.add_op(OperatorId::Plus, start),
            '-' => self.add_op(OperatorId::Minus, start),
            '*' => self.add_op(OperatorId::Star, start),
            '=' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::EqEq, start);
                } else {
                    self.add_op(OperatorId::Eq, start);
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::NotEq, start);
                } else {
                    return Err(CompileError::lex("unexpected character '!'", self.span_from(start)));
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::LtEq, start);
                } else {
                    self.add_op(OperatorId::Lt, start);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::GtEq, start);
                } else {
                    self.add_op(OperatorId::Gt, start);
                }
            }

            ',' => self.add_punct(PunctuationId::Comma, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),

            '0'..='9' => self.scan_number(start)?,

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                return Err(CompileError::lex(
                    format!("unexpected character '{c}'"),
                    self.span_from(start),
                ));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let span = self.span_from(start);
        self.tokens.push(Token::new(kind, span));
        self.at_line_start = false;
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    fn scan_number(&mut self, start: usize) -> Result<(), CompileError> {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let digits = &self.source[start..self.current_pos];
        let value: i64 = digits.parse().map_err(|_| {
            CompileError::lex(
                format!("integer literal {digits} does not fit in 64 bits"),
                self.span_from(start),
            )
        })?;
        self.add_token(TokenKind::Number(value), start);
        Ok(())
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let kind = classify_word(&self.source[start..self.current_pos]);
        self.add_token(kind, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    Lexer::new(source).tokenize()
}
