// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for Lox source code.
//!
//! The lexer transforms Lox source text into a sequence of tokens that can
//! be consumed by a parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `cursor.rs` - Byte-offset cursor and line counter
//! - `token.rs` - `Token`, `TokenKind` and `TokenType` definitions
//! - `keywords.rs` - The static reserved-word table
//!
//! ## Documentation Submodules
//!
//! - `operators` - One and two character operator scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use lox_scanner::ErrorLog;
//! use lox_scanner::lexer::{Scanner, TokenKind};
//!
//! let mut errors = ErrorLog::new();
//! let mut scanner = Scanner::new("var x = 42;", &mut errors);
//!
//! loop {
//!     let token = scanner.next_token();
//!     if matches!(token.kind, TokenKind::Eof) {
//!         break;
//!     }
//!     println!("{}", token);
//! }
//! ```

mod cursor;
mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use keywords::{is_keyword, keyword, KEYWORDS};
pub use scanner::Scanner;
pub use token::{Literal, Span, Token, TokenKind, TokenType};
