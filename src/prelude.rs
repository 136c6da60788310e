//! Convenient imports for txstore.
//!
//! ```
//! use txstore::prelude::*;
//!
//! let mut store = TxStore::new();
//! store.set("key", "value");
//! ```

// Engine and its trait
pub use crate::{Store, TxStore};

// Command layer
pub use crate::{Command, Executor, Output};

// Error handling
pub use crate::{Error, Result};
