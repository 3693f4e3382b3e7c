// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the Lox lexer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token {
    /// The kind of token, carrying the decoded literal for strings and numbers
    pub kind: TokenKind,
    /// The exact source text the token was recognized from
    pub lexeme: String,
    /// 1-based line of the token's first character
    pub line: usize,
    /// The span in the source code
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }

    /// Creates the end-of-file token.
    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), line, Span::new(offset, offset))
    }

    /// Returns the payload-free tag of this token.
    pub fn token_type(&self) -> TokenType {
        self.kind.token_type()
    }

    /// Returns the decoded literal value, if this is a NUMBER or STRING token.
    pub fn literal(&self) -> Option<Literal<'_>> {
        match &self.kind {
            TokenKind::Number(n) => Some(Literal::Number(*n)),
            TokenKind::String(s) => Some(Literal::String(s)),
            _ => None,
        }
    }

    /// Returns true if this is the end-of-file token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.token_type(), self.lexeme)?;
        match self.literal() {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("null"),
        }
    }
}

/// A decoded literal value borrowed from a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    /// Numeric literal
    Number(f64),
    /// String literal contents, without the delimiting quotes
    String(&'a str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers keep a trailing ".0" so they read as floats.
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// The different kinds of tokens in Lox.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TokenKind {
    // Single-character tokens
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// -
    Minus,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// /
    Slash,
    /// *
    Star,

    // One or two character tokens
    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal
    String(String),
    /// Numeric literal
    Number(f64),

    // Keywords
    /// and
    And,
    /// class
    Class,
    /// else
    Else,
    /// false
    False,
    /// fun
    Fun,
    /// for
    For,
    /// if
    If,
    /// nil
    Nil,
    /// or
    Or,
    /// print
    Print,
    /// return
    Return,
    /// super
    Super,
    /// this
    This,
    /// true
    True,
    /// var
    Var,
    /// while
    While,

    // Special
    /// End of file
    Eof,
}

impl TokenKind {
    /// Returns the payload-free tag of this kind.
    pub fn token_type(&self) -> TokenType {
        match self {
            TokenKind::LeftParen => TokenType::LeftParen,
            TokenKind::RightParen => TokenType::RightParen,
            TokenKind::LeftBrace => TokenType::LeftBrace,
            TokenKind::RightBrace => TokenType::RightBrace,
            TokenKind::Comma => TokenType::Comma,
            TokenKind::Dot => TokenType::Dot,
            TokenKind::Minus => TokenType::Minus,
            TokenKind::Plus => TokenType::Plus,
            TokenKind::Semicolon => TokenType::Semicolon,
            TokenKind::Slash => TokenType::Slash,
            TokenKind::Star => TokenType::Star,
            TokenKind::Bang => TokenType::Bang,
            TokenKind::BangEqual => TokenType::BangEqual,
            TokenKind::Equal => TokenType::Equal,
            TokenKind::EqualEqual => TokenType::EqualEqual,
            TokenKind::Greater => TokenType::Greater,
            TokenKind::GreaterEqual => TokenType::GreaterEqual,
            TokenKind::Less => TokenType::Less,
            TokenKind::LessEqual => TokenType::LessEqual,
            TokenKind::Identifier => TokenType::Identifier,
            TokenKind::String(_) => TokenType::String,
            TokenKind::Number(_) => TokenType::Number,
            TokenKind::And => TokenType::And,
            TokenKind::Class => TokenType::Class,
            TokenKind::Else => TokenType::Else,
            TokenKind::False => TokenType::False,
            TokenKind::Fun => TokenType::Fun,
            TokenKind::For => TokenType::For,
            TokenKind::If => TokenType::If,
            TokenKind::Nil => TokenType::Nil,
            TokenKind::Or => TokenType::Or,
            TokenKind::Print => TokenType::Print,
            TokenKind::Return => TokenType::Return,
            TokenKind::Super => TokenType::Super,
            TokenKind::This => TokenType::This,
            TokenKind::True => TokenType::True,
            TokenKind::Var => TokenType::Var,
            TokenKind::While => TokenType::While,
            TokenKind::Eof => TokenType::Eof,
        }
    }

    /// Returns true if this token is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Returns true if this token carries a decoded literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Number(_) | TokenKind::String(_))
    }
}

/// Payload-free token tag, one per entry of the Lox token taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[allow(missing_docs)]
pub enum TokenType {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    Identifier,
    String,
    Number,

    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenType {
    /// Returns the canonical upper-snake spelling of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Minus => "MINUS",
            TokenType::Plus => "PLUS",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Slash => "SLASH",
            TokenType::Star => "STAR",
            TokenType::Bang => "BANG",
            TokenType::BangEqual => "BANG_EQUAL",
            TokenType::Equal => "EQUAL",
            TokenType::EqualEqual => "EQUAL_EQUAL",
            TokenType::Greater => "GREATER",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Less => "LESS",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::And => "AND",
            TokenType::Class => "CLASS",
            TokenType::Else => "ELSE",
            TokenType::False => "FALSE",
            TokenType::Fun => "FUN",
            TokenType::For => "FOR",
            TokenType::If => "IF",
            TokenType::Nil => "NIL",
            TokenType::Or => "OR",
            TokenType::Print => "PRINT",
            TokenType::Return => "RETURN",
            TokenType::Super => "SUPER",
            TokenType::This => "THIS",
            TokenType::True => "TRUE",
            TokenType::Var => "VAR",
            TokenType::While => "WHILE",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
