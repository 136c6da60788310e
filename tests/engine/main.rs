//! Engine Integration Tests
//!
//! Behavioral properties of the layered store, exercised through the
//! public facade.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test engine
//! cargo test --test engine compaction::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod compaction;
