// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token dump rendering.

use anyhow::Context;
use lox_scanner::{Token, TokenType};
use owo_colors::OwoColorize;

use crate::cli::OutputFormat;

/// Renders tokens for stdout.
pub fn render(tokens: &[Token], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(tokens).context("Failed to serialize tokens")
        }
    }
}

/// Renders one token as a colored `TYPE lexeme literal` line.
pub fn colorize(token: &Token) -> String {
    let kind = token.token_type();
    let type_name = match kind {
        TokenType::String => kind.green().to_string(),
        TokenType::Number => kind.yellow().to_string(),
        TokenType::Identifier => kind.white().to_string(),
        TokenType::Eof => kind.dimmed().to_string(),
        _ if token.kind.is_keyword() => kind.magenta().bold().to_string(),
        _ => kind.cyan().to_string(),
    };
    let literal = match token.literal() {
        Some(literal) => literal.to_string().bright_yellow().to_string(),
        None => "null".dimmed().to_string(),
    };
    format!("{} {} {}", type_name, token.lexeme, literal)
}
