//! Command results.

use serde::Serialize;

/// What a command produced.
///
/// Serializes in snake_case, e.g. `{"value":"1"}` or `{"count":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// Command succeeded with nothing to report (writes, transaction control)
    Unit,
    /// Current value of a key, `None` when absent
    Value(Option<String>),
    /// Number of keys holding a value
    Count(usize),
    /// Store status
    Info {
        /// Number of open transactions
        depth: usize,
    },
}

impl Output {
    /// Check if this output carries nothing to print.
    pub fn is_unit(&self) -> bool {
        matches!(self, Output::Unit)
    }
}
