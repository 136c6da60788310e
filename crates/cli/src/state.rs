//! Session state and options.

use std::path::PathBuf;

use txstore_executor::{Command, Executor, Output};

use crate::commands::DEFAULT_PROMPT;
use crate::format::OutputMode;

/// Options for a console session.
///
/// Use the builder pattern to configure options:
///
/// ```ignore
/// let opts = SessionOptions::new().output_mode(OutputMode::Raw).prompt("> ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub output_mode: OutputMode,
    pub prompt: String,
    pub history: Option<PathBuf>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn history(mut self, path: impl Into<PathBuf>) -> Self {
        self.history = Some(path.into());
        self
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::Human,
            prompt: DEFAULT_PROMPT.to_string(),
            history: None,
        }
    }
}

/// One console session: a store plus the options it is driven with.
pub struct SessionState {
    executor: Executor,
    options: SessionOptions,
    executed: usize,
    writes: usize,
    errors: usize,
}

impl SessionState {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            executor: Executor::default(),
            options,
            executed: 0,
            writes: 0,
            errors: 0,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn execute(&mut self, cmd: Command) -> Output {
        self.executed += 1;
        if cmd.is_write() {
            self.writes += 1;
        }
        self.executor.execute(cmd)
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Number of commands executed so far
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Number of executed commands that could change the store
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Number of rejected input lines so far
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Number of transactions still open
    pub fn depth(&self) -> usize {
        self.executor.store().depth()
    }
}
