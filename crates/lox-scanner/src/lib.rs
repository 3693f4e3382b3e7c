// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # lox-scanner
//!
//! A lexical scanner for the Lox scripting language.
//!
//! ## Overview
//!
//! The scanner turns one source buffer into the ordered list of tokens a
//! parser consumes, always ending in a single EOF token. It never fails:
//! unexpected characters and unterminated strings are handed to an
//! [`ErrorReporter`] and scanning continues.
//!
//! ## Quick Start
//!
//! ```rust
//! use lox_scanner::{scan_tokens, ErrorLog, TokenKind};
//!
//! let mut errors = ErrorLog::new();
//! let tokens = scan_tokens("print 1 + 2;", &mut errors);
//!
//! assert!(!errors.had_error());
//! assert_eq!(tokens[0].kind, TokenKind::Print);
//! assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lexer;

// Re-exports for convenience
pub use error::{ErrorLog, ErrorReporter, ReportFn, ScanError};
pub use lexer::{Literal, Scanner, Span, Token, TokenKind, TokenType};

/// Scans `source` into tokens, reporting errors to `reporter`.
///
/// The result always ends with exactly one [`TokenKind::Eof`] token.
pub fn scan_tokens<R: ErrorReporter>(source: &str, reporter: R) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}

/// Scans `source`, collecting errors alongside the tokens.
pub fn scan(source: &str) -> ScanOutput {
    let mut errors = ErrorLog::new();
    let tokens = scan_tokens(source, &mut errors);
    ScanOutput { tokens, errors }
}

/// Scans independent buffers in parallel.
///
/// Each buffer gets its own [`ErrorLog`]; outputs are in input order.
#[cfg(feature = "parallel")]
pub fn scan_batch<S: AsRef<str> + Sync>(sources: &[S]) -> Vec<ScanOutput> {
    use rayon::prelude::*;

    sources
        .par_iter()
        .map(|source| scan(source.as_ref()))
        .collect()
}

/// Tokens and errors from scanning one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// The scanned tokens, ending in EOF
    pub tokens: Vec<Token>,
    /// Everything reported while scanning
    pub errors: ErrorLog,
}

impl ScanOutput {
    /// Returns true if any error was reported.
    pub fn had_error(&self) -> bool {
        self.errors.had_error()
    }
}
