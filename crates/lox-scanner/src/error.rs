// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Scan errors and the reporting seam.
//!
//! The scanner never fails. Every problem it finds is handed to an
//! [`ErrorReporter`] supplied by the caller, and scanning carries on with the
//! next character. Callers decide afterwards whether the token stream is
//! trustworthy by asking their reporter.

use thiserror::Error;

/// A recoverable error found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that starts no lexeme.
    #[error("[line {line}] Error: Unexpected Character")]
    UnexpectedCharacter {
        /// Line the character appeared on
        line: usize,
        /// The offending character
        character: char,
    },

    /// A string literal still open at end of input.
    #[error("[line {line}] Error: Unterminated string")]
    UnterminatedString {
        /// Line reached at end of input
        line: usize,
    },
}

impl ScanError {
    /// The 1-based line the error is reported against.
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } | ScanError::UnterminatedString { line } => {
                *line
            }
        }
    }

    /// The fixed message for this kind of error.
    pub fn message(&self) -> &'static str {
        match self {
            ScanError::UnexpectedCharacter { .. } => "Unexpected Character",
            ScanError::UnterminatedString { .. } => "Unterminated string",
        }
    }
}

/// Sink for scan errors.
pub trait ErrorReporter {
    /// Records one error. Called zero or more times per scan.
    fn report(&mut self, error: ScanError);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, error: ScanError) {
        (**self).report(error);
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for Box<R> {
    fn report(&mut self, error: ScanError) {
        (**self).report(error);
    }
}

/// Adapts a closure taking `(line, message)` into an [`ErrorReporter`].
///
/// ```rust
/// use lox_scanner::{scan_tokens, ReportFn};
///
/// let mut lines = Vec::new();
/// scan_tokens("@", ReportFn(|line: usize, _message: &str| lines.push(line)));
/// assert_eq!(lines, vec![1]);
/// ```
pub struct ReportFn<F>(pub F);

impl<F: FnMut(usize, &str)> ErrorReporter for ReportFn<F> {
    fn report(&mut self, error: ScanError) {
        (self.0)(error.line(), error.message());
    }
}

/// Collects every reported error in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    errors: Vec<ScanError>,
}

impl ErrorLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if anything was reported.
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The reported errors, in report order.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Number of reported errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Forgets all reported errors.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Consumes the log, returning the reported errors.
    pub fn into_errors(self) -> Vec<ScanError> {
        self.errors
    }
}

impl ErrorReporter for ErrorLog {
    fn report(&mut self, error: ScanError) {
        self.errors.push(error);
    }
}
