//! Errors raised while turning input into commands.

use thiserror::Error;

/// Driver-boundary errors.
///
/// The store itself never fails; these only describe malformed input.
/// Every variant is recoverable: report it and move on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// First token is not a known command
    #[error("Unknown command {name}")]
    UnknownCommand {
        /// The token as typed
        name: String,
    },

    /// A required positional argument is missing
    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Name of the first missing argument
        argument: &'static str,
    },

    /// More positional arguments than the command takes
    #[error("{command}: unexpected argument '{argument}'")]
    UnexpectedArgument {
        /// Command name
        command: &'static str,
        /// The first surplus token
        argument: String,
    },
}

/// Result type for command parsing.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the command name itself was not recognized.
    pub fn is_unknown_command(&self) -> bool {
        matches!(self, Error::UnknownCommand { .. })
    }

    /// Check if the command was recognized but given the wrong number of arguments.
    pub fn is_arity_error(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument { .. } | Error::UnexpectedArgument { .. }
        )
    }
}
