// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! lox - Tokenizer for the Lox scripting language
//!
//! This is the main entry point for the lox CLI/REPL.
//!
//! ## Features
//!
//! - Token dumps for files, inline code or stdin, as text or JSON
//! - Interactive REPL with scanner-driven highlighting and history
//! - Files are read with tokio and scanned in parallel

mod cli;
mod output;
mod repl;
mod reporter;

use anyhow::Context;
use clap::Parser;
use lox_scanner::{scan_batch, scan_tokens, ErrorReporter, Token};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Mode, OutputFormat};
use reporter::ConsoleReporter;

/// Exit status when scanning reported errors.
const EXIT_DATA_ERROR: u8 = 65;
/// Exit status when input could not be read.
const EXIT_IO_ERROR: u8 = 74;

/// Main entry point - uses tokio runtime for file loading.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.mode(std::io::stdin().is_terminal()) {
        Mode::Eval(code) => run_source(code, cli.format),
        Mode::Files(files) => run_files(files, cli.format).await,
        Mode::Stdin => read_stdin().and_then(|source| run_source(&source, cli.format)),
        Mode::Repl => run_repl(cli.format),
    };

    match result {
        Ok(had_error) => exit_code(had_error),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(EXIT_IO_ERROR)
        }
    }
}

/// Installs the fmt subscriber. `LOX_LOG` overrides the CLI default.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_env("LOX_LOG").unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the interactive REPL
fn run_repl(format: OutputFormat) -> anyhow::Result<bool> {
    let mut repl = repl::Repl::new(format).context("Failed to initialize REPL")?;
    repl.run().context("REPL terminated")?;
    Ok(false)
}

/// Scan one in-memory buffer and print its tokens. Returns whether any
/// scan error was reported.
fn run_source(source: &str, format: OutputFormat) -> anyhow::Result<bool> {
    let mut reporter = ConsoleReporter::new();
    let tokens = scan_tokens(source, &mut reporter);
    print_tokens(&tokens, format)?;
    Ok(reporter.had_error())
}

/// Read every file, scan them in parallel, print results in argument order.
async fn run_files(paths: &[PathBuf], format: OutputFormat) -> anyhow::Result<bool> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let source = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        debug!(path = %path.display(), bytes = source.len(), "loaded source");
        sources.push(source);
    }

    let outputs = tokio::task::block_in_place(|| scan_batch(&sources));

    let mut had_error = false;
    for (path, output) in paths.iter().zip(outputs) {
        if paths.len() > 1 {
            println!("{}", format!("==> {} <==", path.display()).bold());
        }

        let mut reporter = ConsoleReporter::for_source(path.display().to_string());
        for error in output.errors.into_errors() {
            reporter.report(error);
        }
        had_error |= reporter.had_error();

        print_tokens(&output.tokens, format)?;
    }

    Ok(had_error)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("cannot read stdin")?;
    Ok(source)
}

fn print_tokens(tokens: &[Token], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", output::render(tokens, format)?);
    Ok(())
}

fn exit_code(had_error: bool) -> ExitCode {
    if had_error {
        ExitCode::from(EXIT_DATA_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_run_source_reports_errors() {
        assert!(!run_source("print 1;", OutputFormat::Text).unwrap());
        assert!(run_source("print \"open", OutputFormat::Text).unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_run_files() {
        let good = source_file("var a = 1;");
        let bad = source_file("var b = @;");

        let clean = [good.path().to_path_buf()];
        assert!(!run_files(&clean, OutputFormat::Json).await.unwrap());

        let mixed = [good.path().to_path_buf(), bad.path().to_path_buf()];
        assert!(run_files(&mixed, OutputFormat::Text).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_run_files_missing() {
        let missing = [PathBuf::from("/nonexistent/dir/missing.lox")];
        let error = run_files(&missing, OutputFormat::Text).await.unwrap_err();
        assert!(error.to_string().contains("missing.lox"));
    }
}
