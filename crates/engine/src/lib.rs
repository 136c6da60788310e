//! Transaction engine for txstore
//!
//! [`TxStore`] keeps a stack of [`Overlay`](txstore_core::Overlay) layers:
//! - Layer 0 is the root state and is never removed
//! - Each `begin` pushes a layer, each `commit`/`rollback` pops one
//! - Reads resolve a key against the topmost layer that records it
//! - Tombstones left in the root are purged once the last transaction commits

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::TxStore;

// Re-export the Store trait from core for convenience
pub use txstore_core::Store;
