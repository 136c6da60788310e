//! Command definitions and line parsing.
//!
//! A line is split into tokens; the first token names the command
//! (case-insensitive) and the rest are positional arguments.
//!
//! | Command | Arguments |
//! |---------|-----------|
//! | `SET` | `<key> <value>` |
//! | `GET` | `<key>` |
//! | `DELETE` | `<key>` |
//! | `COUNT` | `<value>` |
//! | `BEGIN` | |
//! | `COMMIT` | |
//! | `ROLLBACK` | |
//! | `INFO` | |

use crate::{Error, Result};

/// A single store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a value for a key.
    Set {
        /// Key to write
        key: String,
        /// Value to store
        value: String,
    },
    /// Read the current value of a key.
    Get {
        /// Key to read
        key: String,
    },
    /// Delete a key.
    Delete {
        /// Key to delete
        key: String,
    },
    /// Count keys currently holding a value.
    Count {
        /// Value to look for
        value: String,
    },
    /// Open a nested transaction.
    Begin,
    /// Commit the innermost transaction.
    Commit,
    /// Roll back the innermost transaction.
    Rollback,
    /// Report the transaction depth.
    Info,
}

impl Command {
    /// Canonical (upper-case) command name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Delete { .. } => "DELETE",
            Command::Count { .. } => "COUNT",
            Command::Begin => "BEGIN",
            Command::Commit => "COMMIT",
            Command::Rollback => "ROLLBACK",
            Command::Info => "INFO",
        }
    }

    /// Check if executing this command can change the store.
    pub fn is_write(&self) -> bool {
        !matches!(
            self,
            Command::Get { .. } | Command::Count { .. } | Command::Info
        )
    }

    /// Parse a line of whitespace-separated tokens.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Self::from_tokens(&tokens)
    }

    /// Build a command from already-split tokens.
    ///
    /// Returns `Ok(None)` when there are no tokens.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Option<Command>> {
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(None);
        };
        let name = first.as_ref();

        let cmd = match name.to_ascii_uppercase().as_str() {
            "SET" => {
                arity("SET", &["key", "value"], rest)?;
                Command::Set {
                    key: rest[0].as_ref().to_string(),
                    value: rest[1].as_ref().to_string(),
                }
            }
            "GET" => {
                arity("GET", &["key"], rest)?;
                Command::Get {
                    key: rest[0].as_ref().to_string(),
                }
            }
            "DELETE" => {
                arity("DELETE", &["key"], rest)?;
                Command::Delete {
                    key: rest[0].as_ref().to_string(),
                }
            }
            "COUNT" => {
                arity("COUNT", &["value"], rest)?;
                Command::Count {
                    value: rest[0].as_ref().to_string(),
                }
            }
            "BEGIN" => {
                arity("BEGIN", &[], rest)?;
                Command::Begin
            }
            "COMMIT" => {
                arity("COMMIT", &[], rest)?;
                Command::Commit
            }
            "ROLLBACK" => {
                arity("ROLLBACK", &[], rest)?;
                Command::Rollback
            }
            "INFO" => {
                arity("INFO", &[], rest)?;
                Command::Info
            }
            _ => {
                return Err(Error::UnknownCommand {
                    name: name.to_string(),
                })
            }
        };
        Ok(Some(cmd))
    }
}

/// Require exactly `names.len()` positional arguments.
fn arity<S: AsRef<str>>(command: &'static str, names: &[&'static str], args: &[S]) -> Result<()> {
    if let Some(argument) = names.get(args.len()) {
        return Err(Error::MissingArgument { command, argument });
    }
    if let Some(extra) = args.get(names.len()) {
        return Err(Error::UnexpectedArgument {
            command,
            argument: extra.as_ref().to_string(),
        });
    }
    Ok(())
}
