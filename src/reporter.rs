// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Console error sink for scan errors.

use lox_scanner::{ErrorReporter, ScanError};
use owo_colors::OwoColorize;

/// Prints scan errors to stderr and remembers whether any were seen.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    /// Source name shown before the line number, if any
    source_name: Option<String>,
    reported: usize,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reporter that prefixes each error with `name`.
    pub fn for_source(name: impl Into<String>) -> Self {
        Self {
            source_name: Some(name.into()),
            reported: 0,
        }
    }

    pub fn had_error(&self) -> bool {
        self.reported > 0
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    /// Forgets earlier errors so one REPL line does not taint the next.
    pub fn reset(&mut self) {
        self.reported = 0;
    }

    fn location(&self, line: usize) -> String {
        match &self.source_name {
            Some(name) => format!("{name}:{line}"),
            None => format!("[line {line}]"),
        }
    }

    #[cfg(test)]
    fn format(&self, error: &ScanError) -> String {
        format!("{} Error: {}", self.location(error.line()), error.message())
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, error: ScanError) {
        self.reported += 1;
        eprintln!(
            "{} {}: {}",
            self.location(error.line()).dimmed(),
            "Error".red().bold(),
            error.message()
        );
    }
}
