//! Core types for txstore
//!
//! This crate defines the building blocks shared by the engine and its drivers:
//! - [`Entry`]: a recorded write, either a value or a tombstone
//! - [`Overlay`]: one layer of writes (the root, or one open transaction)
//! - [`Store`]: the operations every transactional store exposes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod overlay;
pub mod traits;

pub use entry::Entry;
pub use overlay::Overlay;
pub use traits::Store;
