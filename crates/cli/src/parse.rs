//! Input line -> CliAction conversion.
//!
//! - Store commands -> `CliAction::Execute(Command)`
//! - Console meta-commands -> `CliAction::Meta`
//! - Blank lines -> `CliAction::Skip`

use std::path::PathBuf;

use clap::ArgMatches;
use txstore_executor::Command;

use crate::commands::DEFAULT_PROMPT;
use crate::format::OutputMode;
use crate::state::SessionOptions;

/// The result of parsing one line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// A store command.
    Execute(Command),
    /// A console-only meta-command.
    Meta(MetaCommand),
    /// Nothing to do.
    Skip,
}

/// Console meta-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
}

/// Check for meta-commands before delegating to the command parser.
pub fn check_meta_command(tokens: &[String]) -> Option<MetaCommand> {
    let [cmd] = tokens else {
        return None;
    };
    match cmd.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Split a line into tokens.
///
/// Lines where no word opens with a quote split on whitespace and every other
/// character is kept verbatim (`#`, `\`, `O'Brien`). Otherwise the line is
/// split with POSIX shell rules, so quotes group words into a single token.
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let quoted = line
        .split_whitespace()
        .any(|word| word.starts_with(|c: char| matches!(c, '"' | '\'')));
    if !quoted {
        return Ok(line.split_whitespace().map(str::to_string).collect());
    }
    shlex::split(line).ok_or_else(|| "unbalanced quotes".to_string())
}

/// Tokenize and parse one line.
pub fn parse_line(line: &str) -> Result<CliAction, String> {
    let tokens = tokenize(line)?;

    if let Some(meta) = check_meta_command(&tokens) {
        return Ok(CliAction::Meta(meta));
    }

    match Command::from_tokens(&tokens).map_err(|e| e.to_string())? {
        Some(cmd) => Ok(CliAction::Execute(cmd)),
        None => Ok(CliAction::Skip),
    }
}

/// Convert clap ArgMatches into session options.
pub fn matches_to_options(matches: &ArgMatches) -> SessionOptions {
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };
    let prompt = matches
        .get_one::<String>("prompt")
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    let mut options = SessionOptions::new().output_mode(output_mode).prompt(prompt);
    if let Some(path) = matches.get_one::<PathBuf>("history") {
        options = options.history(path.clone());
    }
    options
}
