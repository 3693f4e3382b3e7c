// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Scan-Print Loop) for the Lox scanner.

use lox_scanner::lexer::KEYWORDS;
use lox_scanner::{ErrorLog, ScanError, Scanner, TokenKind, TokenType};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::output;
use crate::reporter::ConsoleReporter;

/// REPL configuration constants
const HISTORY_FILE: &str = ".lox_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        let cmd = match name.to_lowercase().as_str() {
            "help" | "h" | "?" => ReplCommand::Help,
            "exit" | "quit" | "q" => ReplCommand::Exit,
            "clear" | "cls" => ReplCommand::Clear,
            "version" | "v" => ReplCommand::Version,
            "load" | "l" => ReplCommand::Load,
            _ => return None,
        };
        Some((cmd, arg))
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a Lox file and print its tokens"),
        ]
    }
}

/// Helper for rustyline: completion, hints, highlighting and validation,
/// all driven by the scanner's own keyword table and token stream.
struct LoxHelper {
    words: Vec<&'static str>,
}

impl LoxHelper {
    fn new() -> Self {
        let mut words: Vec<&'static str> = KEYWORDS.iter().map(|(spelling, _)| *spelling).collect();
        words.extend([".help", ".exit", ".clear", ".version", ".load"]);
        Self { words }
    }
}

/// Start of the word ending at `pos`. Always a char boundary.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| !c.is_ascii_alphanumeric() && c != '_' && c != '.')
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Completer for LoxHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: (*w).to_string(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for LoxHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for LoxHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }
        Cow::Owned(highlight_source(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Colors source text by scanning it. Text between tokens (whitespace,
/// comments, rejected characters) is kept as is, with comments dimmed.
fn highlight_source(source: &str) -> String {
    let mut result = String::with_capacity(source.len() * 2);
    let mut last = 0;

    for token in Scanner::new(source, ErrorLog::new()) {
        // EOF starts at the end of input, so its gap also covers the rest of
        // an unterminated string.
        push_gap(&mut result, &source[last..token.span.start]);
        if token.is_eof() {
            break;
        }

        let text = token.lexeme.as_str();
        let colored = match token.token_type() {
            TokenType::String => text.green().to_string(),
            TokenType::Number => text.yellow().to_string(),
            TokenType::Identifier => text.to_string(),
            TokenType::True | TokenType::False | TokenType::Nil => text.blue().to_string(),
            TokenType::LeftParen
            | TokenType::RightParen
            | TokenType::LeftBrace
            | TokenType::RightBrace => text.yellow().to_string(),
            _ if token.kind.is_keyword() => text.magenta().bold().to_string(),
            _ => text.cyan().to_string(),
        };
        result.push_str(&colored);
        last = token.span.end;
    }

    result
}

fn push_gap(result: &mut String, gap: &str) {
    match gap.find("//") {
        Some(at) => {
            let (code, comment) = gap.split_at(at);
            result.push_str(code);
            result.push_str(&comment.dimmed().to_string());
        }
        None => result.push_str(gap),
    }
}

impl Validator for LoxHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if needs_more_input(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Input is incomplete while a string is open or a bracket is unclosed.
fn needs_more_input(input: &str) -> bool {
    if ReplCommand::parse(input).is_some() {
        return false;
    }

    let mut errors = ErrorLog::new();
    let mut depth: i64 = 0;
    for token in Scanner::new(input, &mut errors) {
        match token.kind {
            TokenKind::LeftParen | TokenKind::LeftBrace => depth += 1,
            TokenKind::RightParen | TokenKind::RightBrace => depth -= 1,
            _ => {}
        }
    }

    let open_string = errors
        .errors()
        .iter()
        .any(|e| matches!(e, ScanError::UnterminatedString { .. }));

    // Over-closed input is complete; the parser reports it.
    open_string || depth > 0
}

impl Helper for LoxHelper {}

/// The interactive REPL for the Lox scanner
pub struct Repl {
    editor: Editor<LoxHelper, DefaultHistory>,
    history_path: PathBuf,
    reporter: ConsoleReporter,
    format: OutputFormat,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(format: OutputFormat) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(LoxHelper::new()));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lox")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Could not create history directory {}: {}", parent.display(), e);
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            debug!("No history loaded from {}: {}", history_path.display(), e);
        }

        Ok(Self {
            editor,
            history_path,
            reporter: ConsoleReporter::new(),
            format,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", "lox>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(&line) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            warn!("Could not save history to {}: {}", self.history_path.display(), e);
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Lox Scanner".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => {
                println!(
                    "{}: {}",
                    "Lox".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
            }
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(Path::new(path)),
                None => eprintln!(
                    "{}: {} {}",
                    "Error".red().bold(),
                    ".load".cyan(),
                    "requires a file path".dimmed()
                ),
            },
        }
        CommandResult::Continue
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!("  {:16} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Complete keyword".dimmed());
        println!();
    }

    fn load_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(source) => self.scan_and_print(&source),
            Err(e) => eprintln!(
                "{}: cannot read '{}': {}",
                "Error".red().bold(),
                path.display().cyan(),
                e
            ),
        }
    }

    fn scan_and_print(&mut self, source: &str) {
        self.reporter.reset();
        let tokens = Scanner::new(source, &mut self.reporter).scan_tokens();
        debug!(tokens = tokens.len(), errors = self.reporter.reported(), "scanned input");

        match self.format {
            OutputFormat::Text => {
                for token in &tokens {
                    println!("{}", output::colorize(token));
                }
            }
            OutputFormat::Json => match output::render(&tokens, self.format) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("{}: {:#}", "Error".red().bold(), e),
            },
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}
