//! Bindings Module
//!
//! The key binding tree and its construction from a JSON description.

pub mod loader;
pub mod tree;

use thiserror::Error;

/// Failures that make the whole bindings file unusable.
///
/// None of these are fatal: the loader falls back to an empty tree.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Cannot read bindings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed bindings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bindings file {path} does not contain a top-level list")]
    RootNotSequence { path: String },
}

/// Problems with a single entry. The entry (or the offending field) is
/// dropped and its siblings are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigEntryError {
    #[error("{at}: entry is not a record, skipped")]
    NotARecord { at: String },

    #[error("{at}: missing 'key', skipped")]
    MissingKey { at: String },

    #[error("{at}: invalid key {key:?}, must be a single letter or digit, skipped")]
    InvalidKey { at: String, key: String },

    #[error("{at}: missing or blank 'description', using placeholder")]
    MissingDescription { at: String },

    #[error("{at}: 'command' is not a string, ignored")]
    InvalidCommand { at: String },

    #[error("{at}: 'sub_actions' is not a list, ignored")]
    SubActionsNotSequence { at: String },

    #[error("{at}: duplicate key '{key}' shadowed by an earlier entry, skipped")]
    DuplicateKey { at: String, key: char },
}

impl ConfigEntryError {
    /// True when the entry was dropped entirely rather than repaired.
    pub fn skips_entry(&self) -> bool {
        matches!(
            self,
            Self::NotARecord { .. }
                | Self::MissingKey { .. }
                | Self::InvalidKey { .. }
                | Self::DuplicateKey { .. }
        )
    }
}

// Re-exports
pub use loader::{load, LoadReport};
#[cfg(test)]
pub use loader::load_str;
pub use tree::{ActionNode, BindingTree, NodeSet};
