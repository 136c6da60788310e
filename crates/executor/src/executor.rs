//! Command dispatch.

use tracing::{debug, trace};
use txstore_core::Store;
use txstore_engine::TxStore;

use crate::handlers::{kv, txn};
use crate::{Command, Output, Result};

/// Executes [`Command`]s against a store it owns.
///
/// Each executor owns exactly one store; create several executors for
/// several independent stores.
#[derive(Debug, Clone)]
pub struct Executor<S: Store = TxStore> {
    store: S,
}

impl<S: Store> Executor<S> {
    /// Create an executor around `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the executor and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute a single command.
    pub fn execute(&mut self, cmd: Command) -> Output {
        trace!(command = cmd.name(), depth = self.store.depth(), "execute");
        match cmd {
            Command::Set { key, value } => kv::kv_set(&mut self.store, &key, &value),
            Command::Get { key } => kv::kv_get(&self.store, &key),
            Command::Delete { key } => kv::kv_delete(&mut self.store, &key),
            Command::Count { value } => kv::kv_count(&self.store, &value),
            Command::Begin => txn::txn_begin(&mut self.store),
            Command::Commit => txn::txn_commit(&mut self.store),
            Command::Rollback => txn::txn_rollback(&mut self.store),
            Command::Info => txn::txn_info(&self.store),
        }
    }

    /// Parse and execute one line of whitespace-separated input.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Output>> {
        match Command::parse(line) {
            Ok(Some(cmd)) => Ok(Some(self.execute(cmd))),
            Ok(None) => Ok(None),
            Err(e) => {
                debug!(error = %e, "rejected input line");
                Err(e)
            }
        }
    }
}

impl Default for Executor<TxStore> {
    fn default() -> Self {
        Self::new(TxStore::new())
    }
}
