//! Output rendering.
//!
//! - **Human** (default): `"value"`, `(nil)`, `(integer) 2`
//! - **Raw**: the value itself, an empty line for a missing key, plain integers
//! - **Json**: one JSON object per result

use txstore_executor::Output;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Raw,
    Json,
}

/// Render a command result.
///
/// Returns `None` when there is nothing to print (writes and transaction
/// control).
pub fn format_output(output: &Output, mode: OutputMode) -> Option<String> {
    if output.is_unit() {
        return None;
    }
    match mode {
        OutputMode::Human => Some(format_human(output)),
        OutputMode::Raw => Some(format_raw(output)),
        OutputMode::Json => serde_json::to_string(output).ok(),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => String::new(),
        Output::Value(Some(v)) => format!("{:?}", v),
        Output::Value(None) => "(nil)".to_string(),
        Output::Count(n) => format!("(integer) {}", n),
        Output::Info { depth } => format!("depth: {}", depth),
    }
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Unit => String::new(),
        Output::Value(v) => v.clone().unwrap_or_default(),
        Output::Count(n) => n.to_string(),
        Output::Info { depth } => depth.to_string(),
    }
}

/// Render an input error.
pub fn format_error(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", message),
        OutputMode::Raw => message.to_string(),
        OutputMode::Json => serde_json::json!({ "error": message }).to_string(),
    }
}

/// Text printed by the HELP meta-command.
pub fn help_text() -> &'static str {
    "\
SET <key> <value>   store value for key
GET <key>           print the current value of key
DELETE <key>        delete key
COUNT <value>       print how many keys hold value
BEGIN               open a nested transaction
COMMIT              fold the innermost transaction into its parent
ROLLBACK            discard the innermost transaction
INFO                print the number of open transactions
HELP                show this text
QUIT | EXIT         leave the console

Quote keys or values that contain spaces: SET greeting \"hello world\""
}
