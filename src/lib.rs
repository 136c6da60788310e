//! # txstore
//!
//! In-process key/value store with nested transactions.
//!
//! ## Quick Start
//!
//! ```
//! use txstore::prelude::*;
//!
//! let mut store = TxStore::new();
//! store.set("a", "1");
//!
//! store.begin();
//! store.set("a", "2");
//! store.delete("b");
//! assert_eq!(store.get("a"), Some("2"));
//! store.rollback();
//!
//! assert_eq!(store.get("a"), Some("1"));
//! assert_eq!(store.count("1"), 1);
//! ```
//!
//! ## Layers
//!
//! - [`TxStore`] - the engine: one root layer plus one layer per open transaction
//! - [`Store`] - the operations drivers program against
//! - [`Executor`] - parses text commands and runs them against a store
//!
//! The store is single-threaded. Give each thread its own store, or guard a
//! shared one with a lock around every call.

#![warn(missing_docs)]

pub mod prelude;

// Re-export core types
pub use txstore_core::{Entry, Overlay, Store};

// Re-export the engine
pub use txstore_engine::TxStore;

// Re-export the command layer
pub use txstore_executor::{Command, Error, Executor, Output, Result};
