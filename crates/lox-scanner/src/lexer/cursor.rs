// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Character cursor over a source buffer.
//!
//! Tracks the start of the lexeme being recognized, the next unconsumed
//! character and the current line. Offsets are byte offsets and always fall
//! on character boundaries.

use std::iter::Peekable;
use std::str::CharIndices;

/// A forward-only cursor over source text.
pub(crate) struct Cursor<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Consumes and returns the next character.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.current = pos + ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    pub(crate) fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character only if it equals `expected`.
    pub(crate) fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub(crate) fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Begins a new lexeme at the next unconsumed character.
    pub(crate) fn mark_start(&mut self) {
        self.start = self.current;
    }

    /// The text consumed since the last `mark_start`.
    pub(crate) fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// The text strictly between the first and last consumed characters.
    ///
    /// Only meaningful when both delimiters are single-byte.
    pub(crate) fn lexeme_inner(&self) -> &'a str {
        &self.source[self.start + 1..self.current - 1]
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn newline(&mut self) {
        self.line += 1;
    }
}
