// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//!
//! ## Single-Character Operators
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` map straight to a token. None of
//! them has a longer form in Lox, so `--` is two `Minus` tokens.
//!
//! ## One or Two Character Operators
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `!` | `scan_bang` | `!`, `!=` |
//! | `=` | `scan_equal` | `=`, `==` |
//! | `<` | `scan_less` | `<`, `<=` |
//! | `>` | `scan_greater` | `>`, `>=` |
//! | `/` | `scan_slash` | `/`, `//...` |
//!
//! ## Lookahead Logic
//!
//! One character of lookahead decides between the forms:
//!
//! ```text
//! // For input "!="
//! scan_bang():
//!   '!' already consumed
//!   match_char('=') -> true, '=' consumed
//!   return BangEqual
//! ```
//!
//! ## Comment Handling
//!
//! `//` starts a line comment running up to, but not including, the next
//! newline. The newline itself is scanned by the main loop so line counting
//! stays in one place. There are no block comments.

// This module serves as documentation. The actual implementation is in scanner.rs.
