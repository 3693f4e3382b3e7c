// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Reserved words.

use super::TokenKind;

/// Reserved-word spellings and their token kinds, sorted by spelling.
pub static KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Looks up a reserved word. Matching is exact and case-sensitive.
pub fn keyword(text: &str) -> Option<&'static TokenKind> {
    KEYWORDS
        .binary_search_by(|(spelling, _)| (*spelling).cmp(text))
        .ok()
        .map(|index| &KEYWORDS[index].1)
}

/// Returns true if `text` is a reserved word.
pub fn is_keyword(text: &str) -> bool {
    keyword(text).is_some()
}
