// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> Number(42.0)
//! 3.14      -> Number(3.14)
//! 3.        -> Number(3.0), Dot
//! .5        -> Dot, Number(5.0)
//! -1        -> Minus, Number(1.0)
//! ```
//!
//! A fraction needs a digit after the `.`; otherwise the dot is left for the
//! next token. Signs, exponents and other bases are not part of the literal.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ```text
//! "hello"       -> String("hello")
//! "a\nb"        -> String("a\nb"), with a backslash and an 'n'
//! "line
//! break"        -> String("line\nbreak"), line counter advanced
//! ```
//!
//! Only double quotes delimit strings. There are no escape sequences: the
//! literal is the source text between the quotes. A string still open at
//! end of input reports `Unterminated string` on the last line and produces
//! no token.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: start chars and `0-9`
//!
//! The whole run is matched before the keyword lookup, so `classic` is one
//! identifier, not `class` followed by `ic`.

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::error::{ErrorLog, ScanError};
    use crate::lexer::{Literal, Scanner, Token, TokenKind};

    fn scan_single(src: &str) -> TokenKind {
        let mut scanner = Scanner::new(src, ErrorLog::new());
        scanner.next_token().kind
    }

    fn scan_with_log(src: &str) -> (Vec<Token>, ErrorLog) {
        let mut log = ErrorLog::new();
        let tokens = Scanner::new(src, &mut log).scan_tokens();
        (tokens, log)
    }

    // Number tests
    #[test]
    fn test_integer() {
        assert!(matches!(scan_single("42"), TokenKind::Number(n) if n == 42.0));
    }

    #[test]
    fn test_float() {
        assert!(matches!(scan_single("123.45"), TokenKind::Number(n) if n == 123.45));
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let (tokens, log) = scan_with_log("3.");
        assert!(!log.had_error());
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Number(3.0));
        assert_eq!(tokens[0].lexeme, "3");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_method_call_on_number() {
        let (tokens, _) = scan_with_log("3.abs");
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number(3.0),
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_leading_dot() {
        let (tokens, _) = scan_with_log(".5");
        assert_eq!(tokens[0].kind, TokenKind::Dot);
        assert_eq!(tokens[1].kind, TokenKind::Number(5.0));
    }

    #[test]
    fn test_single_fraction_only() {
        let (tokens, _) = scan_with_log("1.2.3");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["1.2", ".", "3", ""]);
    }

    #[test]
    fn test_no_sign_in_literal() {
        let (tokens, _) = scan_with_log("-7");
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].kind, TokenKind::Number(7.0));
    }

    #[test]
    fn test_leading_zeros() {
        assert!(matches!(scan_single("007"), TokenKind::Number(n) if n == 7.0));
    }

    #[test]
    fn test_number_literal_value() {
        let (tokens, _) = scan_with_log("0.5");
        assert_eq!(tokens[0].literal(), Some(Literal::Number(0.5)));
    }

    // String tests
    #[test]
    fn test_double_quote_string() {
        assert!(matches!(scan_single("\"hello\""), TokenKind::String(s) if s == "hello"));
    }

    #[test]
    fn test_string_lexeme_keeps_quotes() {
        let (tokens, _) = scan_with_log("\"hello\"");
        assert_eq!(tokens[0].lexeme, "\"hello\"");
        assert_eq!(tokens[0].literal(), Some(Literal::String("hello")));
    }

    #[test]
    fn test_empty_string() {
        assert!(matches!(scan_single("\"\""), TokenKind::String(s) if s.is_empty()));
    }

    #[test]
    fn test_backslash_is_literal() {
        assert!(matches!(scan_single(r#""a\nb""#), TokenKind::String(s) if s == "a\\nb"));
    }

    #[test]
    fn test_single_quote_is_unexpected() {
        let (tokens, log) = scan_with_log("'x'");
        assert_eq!(tokens.len(), 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_multiline_string() {
        let (tokens, log) = scan_with_log("\"one\ntwo\" x");
        assert!(!log.had_error());
        assert_eq!(tokens[0].kind, TokenKind::String("one\ntwo".to_string()));
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_non_ascii_in_string() {
        assert!(matches!(scan_single("\"h\u{e9}llo \u{1f600}\""), TokenKind::String(s) if s == "h\u{e9}llo \u{1f600}"));
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, log) = scan_with_log("\"abc");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(log.errors(), &[ScanError::UnterminatedString { line: 1 }]);
    }

    #[test]
    fn test_unterminated_string_reports_end_line() {
        let (tokens, log) = scan_with_log("x\n\"abc\ndef");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].line, 3);
        assert_eq!(log.errors(), &[ScanError::UnterminatedString { line: 3 }]);
    }

    // Identifier and keyword tests
    #[test]
    fn test_identifier() {
        assert!(matches!(scan_single("myVar"), TokenKind::Identifier));
    }

    #[test]
    fn test_identifier_with_underscore() {
        let (tokens, _) = scan_with_log("_private");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "_private");
        assert_eq!(tokens[0].literal(), None);
    }

    #[test]
    fn test_digit_then_letters() {
        let (tokens, _) = scan_with_log("9lives");
        assert_eq!(tokens[0].kind, TokenKind::Number(9.0));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "lives");
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let (tokens, _) = scan_with_log("classic");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "classic");
    }

    #[test]
    fn test_all_keywords() {
        let cases = [
            ("and", TokenKind::And),
            ("class", TokenKind::Class),
            ("else", TokenKind::Else),
            ("false", TokenKind::False),
            ("fun", TokenKind::Fun),
            ("for", TokenKind::For),
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

        for (src, expected) in cases {
            assert_eq!(scan_single(src), expected, "scanning {src:?}");
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(matches!(scan_single("Class"), TokenKind::Identifier));
        assert!(matches!(scan_single("NIL"), TokenKind::Identifier));
    }
}
