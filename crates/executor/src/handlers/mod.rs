//! Command handlers, one module per command family.
//!
//! Handlers are infallible: the store contract has no failure modes.

pub mod kv;
pub mod txn;
