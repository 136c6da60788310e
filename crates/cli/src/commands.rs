//! Command-line definition.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// Prompt shown by the REPL unless `--prompt` overrides it.
pub const DEFAULT_PROMPT: &str = ": ";

fn long_about() -> String {
    format!(
        "In-memory key/value store with nested transactions.\n\n\
         Reads one command per line: SET <key> <value>, GET <key>, DELETE <key>, \
         COUNT <value>, BEGIN, COMMIT, ROLLBACK, INFO.\n\
         Starts an interactive prompt when stdin is a terminal and reads commands \
         from stdin otherwise. Type HELP at the prompt for details.\n\n\
         Version {}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Build the clap command for the `txstore` binary.
pub fn build_cli() -> Command {
    Command::new("txstore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive console for an in-memory transactional key/value store")
        .long_about(long_about())
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .conflicts_with("json")
                .help("Print bare values: empty line for missing keys, plain integers"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results and errors as JSON"),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .value_name("TEXT")
                .default_value(DEFAULT_PROMPT)
                .help("Prompt shown in interactive mode"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Load and save interactive history in FILE"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log to stderr (-v info, -vv debug, -vvv trace)"),
        )
}
