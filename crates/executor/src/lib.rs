//! Command execution layer for txstore
//!
//! Drivers turn a line of input into a [`Command`], hand it to an
//! [`Executor`], and render the resulting [`Output`]:
//!
//! ```
//! use txstore_executor::{Executor, Output};
//!
//! let mut executor: Executor = Executor::default();
//! executor.execute_line("SET a 1").unwrap();
//! let output = executor.execute_line("GET a").unwrap();
//! assert_eq!(output, Some(Output::Value(Some("1".to_string()))));
//! ```
//!
//! Parsing is the only fallible step; executing a well-formed command never
//! fails.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod error;
mod executor;
mod handlers;
mod output;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
