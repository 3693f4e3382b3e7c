// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that produces tokens from source text.

use std::iter::FusedIterator;

use tracing::debug;

use super::cursor::Cursor;
use super::keywords::keyword;
use super::{Span, Token, TokenKind};
use crate::error::{ErrorReporter, ScanError};

/// A scanner that tokenizes Lox source code.
///
/// Errors are handed to the reporter and never stop the scan. A scanner
/// covers exactly one source buffer.
pub struct Scanner<'a, R> {
    cursor: Cursor<'a>,
    reporter: R,
    emitted: usize,
    finished: bool,
}

impl<'a, R: ErrorReporter> Scanner<'a, R> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str, reporter: R) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            emitted: 0,
            finished: false,
        }
    }

    /// Scans the whole buffer. The last token is always [`TokenKind::Eof`].
    pub fn scan_tokens(self) -> Vec<Token> {
        self.collect()
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.cursor.mark_start();
            let line = self.cursor.line();

            let Some(ch) = self.cursor.advance() else {
                return self.eof();
            };

            if let Some(kind) = self.scan_token(ch) {
                self.emitted += 1;
                let span = Span::new(self.cursor.start(), self.cursor.current());
                return Token::new(kind, self.cursor.lexeme(), line, span);
            }
        }
    }

    /// The reporter errors are being sent to.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consumes the scanner, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Classifies one consumed character. `None` means no token: whitespace,
    /// comments and reported errors.
    fn scan_token(&mut self, ch: char) -> Option<TokenKind> {
        let kind = match ch {
            // Single-character tokens
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,

            // One or two character tokens
            '!' => self.scan_bang(),
            '=' => self.scan_equal(),
            '<' => self.scan_less(),
            '>' => self.scan_greater(),
            '/' => return self.scan_slash(),

            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.cursor.newline();
                return None;
            }

            '"' => return self.scan_string(),
            '0'..='9' => self.scan_number(),
            _ if is_alpha(ch) => self.scan_identifier(),

            _ => {
                self.error(ScanError::UnexpectedCharacter {
                    line: self.cursor.line(),
                    character: ch,
                });
                return None;
            }
        };

        Some(kind)
    }

    fn scan_bang(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        }
    }

    fn scan_equal(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::EqualEqual
        } else {
            TokenKind::Equal
        }
    }

    fn scan_less(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        }
    }

    fn scan_greater(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }

    fn scan_slash(&mut self) -> Option<TokenKind> {
        if self.cursor.match_char('/') {
            // Line comment. The newline is left for the main loop to count.
            self.cursor.eat_while(|ch| ch != '\n');
            None
        } else {
            Some(TokenKind::Slash)
        }
    }

    fn scan_string(&mut self) -> Option<TokenKind> {
        loop {
            match self.cursor.peek() {
                None => {
                    self.error(ScanError::UnterminatedString {
                        line: self.cursor.line(),
                    });
                    return None;
                }
                Some('"') => break,
                Some(ch) => {
                    if ch == '\n' {
                        self.cursor.newline();
                    }
                    self.cursor.advance();
                }
            }
        }

        // Closing quote
        self.cursor.advance();

        Some(TokenKind::String(self.cursor.lexeme_inner().to_string()))
    }

    fn scan_number(&mut self) -> TokenKind {
        self.cursor.eat_while(is_digit);

        // A '.' only belongs to the number when a digit follows it.
        if self.cursor.peek() == Some('.') && self.cursor.peek_next().is_some_and(is_digit) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        TokenKind::Number(number_value(self.cursor.lexeme()))
    }

    fn scan_identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_alphanumeric);

        match keyword(self.cursor.lexeme()) {
            Some(kind) => kind.clone(),
            None => TokenKind::Identifier,
        }
    }

    fn eof(&mut self) -> Token {
        if !self.finished {
            self.finished = true;
            debug!(
                tokens = self.emitted,
                lines = self.cursor.line(),
                "scan complete"
            );
        }
        Token::eof(self.cursor.line(), self.cursor.current())
    }

    fn error(&mut self, error: ScanError) {
        debug!(line = error.line(), message = error.message(), "scan error");
        self.reporter.report(error);
    }
}

/// Value of a `digits ('.' digits)?` lexeme. Every such lexeme is valid
/// float syntax and out-of-range values round to infinity, so the fallback
/// is never taken.
fn number_value(lexeme: &str) -> f64 {
    lexeme.parse().unwrap_or(f64::INFINITY)
}

/// Checks if a character is a decimal digit.
fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Checks if a character can start an identifier.
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Checks if a character can continue an identifier.
fn is_alphanumeric(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

impl<R: ErrorReporter> Iterator for Scanner<'_, R> {
    type Item = Token;

    /// Yields every token including the final EOF, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl<R: ErrorReporter> FusedIterator for Scanner<'_, R> {}
