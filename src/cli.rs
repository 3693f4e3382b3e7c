// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for lox.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// lox - Tokenize Lox source code
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Lox source files to scan
    pub files: Vec<PathBuf>,

    /// Scan source given on the command line
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "files")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short = 'i', long = "interactive", alias = "repl")]
    pub interactive: bool,

    /// Token dump format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "LOX_FORMAT"
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// How scanned tokens are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `TYPE lexeme literal` line per token
    Text,
    /// A JSON array of tokens
    Json,
}

/// What the invocation asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Scan inline source
    Eval(&'a str),
    /// Scan each file
    Files(&'a [PathBuf]),
    /// Read source from stdin
    Stdin,
    /// Interactive session
    Repl,
}

impl Cli {
    /// Resolves the run mode. `stdin_is_terminal` decides between the REPL
    /// and piped input when nothing else is given.
    pub fn mode(&self, stdin_is_terminal: bool) -> Mode<'_> {
        if let Some(code) = &self.eval {
            Mode::Eval(code.as_str())
        } else if self.interactive {
            Mode::Repl
        } else if !self.files.is_empty() {
            Mode::Files(self.files.as_slice())
        } else if stdin_is_terminal {
            Mode::Repl
        } else {
            Mode::Stdin
        }
    }

    /// Default log filter when `LOX_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "lox=debug,lox_scanner=debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lox").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_files_mode() {
        let cli = parse(&["a.lox", "b.lox"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.lox"), PathBuf::from("b.lox")]);
        assert!(matches!(cli.mode(true), Mode::Files(files) if files.len() == 2));
    }

    #[test]
    fn test_eval_mode() {
        let cli = parse(&["-e", "print 1;"]);
        assert_eq!(cli.mode(true), Mode::Eval("print 1;"));
    }

    #[test]
    fn test_eval_conflicts_with_files() {
        let result = Cli::try_parse_from(["lox", "-e", "1", "a.lox"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repl_and_stdin_modes() {
        let cli = parse(&[]);
        assert_eq!(cli.mode(true), Mode::Repl);
        assert_eq!(cli.mode(false), Mode::Stdin);

        let cli = parse(&["--repl"]);
        assert_eq!(cli.mode(false), Mode::Repl);
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(parse(&[]).format, OutputFormat::Text);
        assert_eq!(parse(&["--format", "json"]).format, OutputFormat::Json);
        assert_eq!(parse(&["-f", "text"]).format, OutputFormat::Text);
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(parse(&[]).log_filter(), "warn");
        assert_eq!(parse(&["-v"]).log_filter(), "lox=debug,lox_scanner=debug");
    }
}
