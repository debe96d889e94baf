//! Dispatch Module
//!
//! Turns a binding's command line into a detached process.

pub mod launcher;

use thiserror::Error;

/// Dispatch failures. Reported to the caller, never fatal.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Cannot parse command line {command:?}: unbalanced quotes or escapes")]
    Parse { command: String },

    #[error("Command line {command:?} is empty")]
    Empty { command: String },

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    /// The command line could not be turned into an argument vector.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Empty { .. })
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;

// Re-exports
pub use launcher::{Dispatcher, Launcher, SystemLauncher};
