//! Interactive and piped input loops.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info, warn};

use crate::format::{format_error, format_output, help_text};
use crate::parse::{parse_line, CliAction, MetaCommand};
use crate::signals::{termination_message, Termination};
use crate::state::SessionState;

/// Handle one line of input, writing results to `out` and diagnostics to `err`.
///
/// Returns `Break` when the user asked to leave.
pub fn handle_line<O: Write, E: Write>(
    state: &mut SessionState,
    line: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<ControlFlow<()>> {
    let mode = state.options().output_mode;
    match parse_line(line) {
        Ok(CliAction::Execute(cmd)) => {
            let output = state.execute(cmd);
            if let Some(text) = format_output(&output, mode) {
                writeln!(out, "{}", text)?;
            }
        }
        Ok(CliAction::Meta(MetaCommand::Help)) => writeln!(out, "{}", help_text())?,
        Ok(CliAction::Meta(MetaCommand::Quit)) => return Ok(ControlFlow::Break(())),
        Ok(CliAction::Skip) => {}
        Err(e) => {
            debug!(line, error = %e, "skipping line");
            state.record_error();
            writeln!(err, "{}", format_error(&e, mode))?;
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Run the interactive prompt until EOF, Ctrl-C or QUIT.
pub fn run_repl(state: &mut SessionState) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| format!("Failed to open terminal: {}", e))?;

    let history = state.options().history.clone();
    if let Some(path) = &history {
        // A missing history file is normal on first use
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let prompt = state.options().prompt.clone();
    let stdout = io::stdout();
    let stderr = io::stderr();

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                remember(&mut rl, &line, history.as_deref());
                let flow = handle_line(state, &line, &mut stdout.lock(), &mut stderr.lock())
                    .map_err(|e| format!("Failed to write output: {}", e))?;
                if flow.is_break() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", termination_message(Termination::Interrupt));
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Failed to read input: {}", e)),
        }
    }

    info!(
        executed = state.executed(),
        writes = state.writes(),
        errors = state.errors(),
        open_transactions = state.depth(),
        "session ended"
    );
    Ok(())
}

/// Add a non-blank line to the editor history.
///
/// With a history file, the file is rewritten after every entry.
fn remember(rl: &mut DefaultEditor, line: &str, history: Option<&Path>) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(e) = rl.add_history_entry(line) {
        debug!(error = %e, "history entry not recorded");
        return;
    }
    if let Some(path) = history {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
}

/// Read commands line by line from `input` until EOF or QUIT.
///
/// Returns the process exit code: 1 if any line was rejected, 0 otherwise.
pub fn run_pipe<R: BufRead, O: Write, E: Write>(
    state: &mut SessionState,
    input: R,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    for line in input.lines() {
        let line = line?;
        if handle_line(state, &line, out, err)?.is_break() {
            break;
        }
    }
    out.flush()?;
    info!(
        executed = state.executed(),
        writes = state.writes(),
        errors = state.errors(),
        open_transactions = state.depth(),
        "input exhausted"
    );
    Ok(if state.errors() > 0 { 1 } else { 0 })
}
