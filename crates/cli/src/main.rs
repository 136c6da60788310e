//! txstore console: drive an in-memory transactional key/value store.
//!
//! Two modes:
//! - **REPL mode**: `txstore [flags]` with a terminal on stdin, interactive prompt
//! - **Pipe mode**: `printf 'SET a 1\nGET a\n' | txstore`, line-by-line from stdin

mod commands;
mod format;
mod parse;
mod repl;
mod signals;
mod state;

use std::io::{self, IsTerminal};
use std::process;

use tracing::{info, warn, Level};

use commands::build_cli;
use parse::matches_to_options;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let options = matches_to_options(&matches);
    info!(mode = ?options.output_mode, "starting session");
    let mut state = SessionState::new(options);

    if io::stdin().is_terminal() {
        if let Err(e) = repl::run_repl(&mut state) {
            eprintln!("{}", e);
            process::exit(1);
        }
    } else {
        if let Err(e) = signals::spawn_watcher(|signal| {
            println!("{}", signals::termination_message(signal));
            process::exit(0);
        }) {
            warn!(error = %e, "termination signals not handled");
        }

        // Stdout stays unlocked so the watcher thread can print
        let stdin = io::stdin();
        match repl::run_pipe(&mut state, stdin.lock(), &mut io::stdout(), &mut io::stderr()) {
            Ok(code) => process::exit(code),
            Err(e) => {
                eprintln!("I/O error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
