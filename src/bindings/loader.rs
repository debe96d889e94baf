//! Bindings Loader
//!
//! Builds a [`BindingTree`] from a JSON list of entries:
//!
//! ```json
//! [
//!   { "key": "a", "description": "Apps", "sub_actions": [
//!       { "key": "f", "description": "Firefox", "command": "firefox" }
//!   ] }
//! ]
//! ```
//!
//! Loading never fails. A missing or malformed file yields an empty tree and
//! a [`ConfigLoadError`]; a malformed entry is skipped (or repaired) and
//! reported as a [`ConfigEntryError`] without touching its siblings.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use super::tree::{ActionNode, BindingTree};
use super::{ConfigEntryError, ConfigLoadError};

/// Description shown for entries that do not provide one.
pub const PLACEHOLDER_DESCRIPTION: &str = "(no description)";

/// Outcome of a load: always a usable tree, plus everything that went wrong.
#[derive(Debug)]
pub struct LoadReport {
    pub tree: BindingTree,
    pub load_error: Option<ConfigLoadError>,
    pub entry_errors: Vec<ConfigEntryError>,
}

impl LoadReport {
    fn failed(error: ConfigLoadError) -> Self {
        warn!("{error}; continuing with no bindings");
        Self {
            tree: BindingTree::empty(),
            load_error: Some(error),
            entry_errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.load_error.is_none() && self.entry_errors.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        usize::from(self.load_error.is_some()) + self.entry_errors.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.entry_errors.iter().filter(|e| e.skips_entry()).count()
    }
}

/// Read and parse a bindings file.
pub fn load(path: &Path) -> LoadReport {
    let origin = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(contents) => load_str(&contents, &origin),
        Err(source) => LoadReport::failed(ConfigLoadError::Io { path: origin, source }),
    }
}

/// Parse bindings from JSON text. `origin` names the source in messages.
pub fn load_str(contents: &str, origin: &str) -> LoadReport {
    let root: Value = match serde_json::from_str(contents) {
        Ok(root) => root,
        Err(source) => {
            return LoadReport::failed(ConfigLoadError::Parse {
                path: origin.to_string(),
                source,
            });
        }
    };

    let Value::Array(entries) = &root else {
        return LoadReport::failed(ConfigLoadError::RootNotSequence {
            path: origin.to_string(),
        });
    };

    let mut builder = TreeBuilder::default();
    let roots = builder.parse_list(entries, "");
    let tree = BindingTree::new(roots);

    if tree.is_empty() {
        warn!("No usable bindings in {}", origin);
    } else {
        info!(
            "Loaded {} bindings ({} top-level) from {}",
            tree.node_count(),
            entries.len() - builder.skipped_top_level,
            origin
        );
    }

    LoadReport {
        tree,
        load_error: None,
        entry_errors: builder.errors,
    }
}

/// Loosely typed view of one entry; every field is checked by hand.
#[derive(Debug, Deserialize)]
struct RawEntry {
    key: Option<Value>,
    description: Option<Value>,
    command: Option<Value>,
    sub_actions: Option<Value>,
}

#[derive(Default)]
struct TreeBuilder {
    errors: Vec<ConfigEntryError>,
    skipped_top_level: usize,
}

impl TreeBuilder {
    fn report(&mut self, error: ConfigEntryError) {
        warn!("{error}");
        self.errors.push(error);
    }

    fn parse_list(&mut self, entries: &[Value], parent: &str) -> Vec<ActionNode> {
        let mut nodes: Vec<ActionNode> = Vec::with_capacity(entries.len());

        for (index, value) in entries.iter().enumerate() {
            match self.parse_entry(value, parent, index, &nodes) {
                Some(node) => nodes.push(node),
                None if parent.is_empty() => self.skipped_top_level += 1,
                None => {}
            }
        }

        nodes
    }

    fn parse_entry(
        &mut self,
        value: &Value,
        parent: &str,
        index: usize,
        siblings: &[ActionNode],
    ) -> Option<ActionNode> {
        let at = index_location(parent, index);

        let raw = match value.is_object().then(|| RawEntry::deserialize(value)) {
            Some(Ok(raw)) => raw,
            _ => {
                self.report(ConfigEntryError::NotARecord { at });
                return None;
            }
        };

        let key = match raw.key {
            Some(key) => match parse_key(&key) {
                Some(key) => key,
                None => {
                    let key = key.as_str().map_or_else(|| key.to_string(), str::to_string);
                    self.report(ConfigEntryError::InvalidKey { at, key });
                    return None;
                }
            },
            None => {
                self.report(ConfigEntryError::MissingKey { at });
                return None;
            }
        };

        let path = key_location(parent, key);

        if siblings.iter().any(|node| node.key == key) {
            self.report(ConfigEntryError::DuplicateKey { at: path, key });
            return None;
        }

        let description = match raw.description {
            Some(Value::String(description)) if !description.trim().is_empty() => description,
            _ => {
                self.report(ConfigEntryError::MissingDescription { at: path.clone() });
                PLACEHOLDER_DESCRIPTION.to_string()
            }
        };

        let command = match raw.command {
            Some(Value::String(command)) => Some(command),
            Some(Value::Null) | None => None,
            Some(_) => {
                self.report(ConfigEntryError::InvalidCommand { at: path.clone() });
                None
            }
        };

        let children = match raw.sub_actions {
            Some(Value::Array(entries)) => self.parse_list(&entries, &path),
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                self.report(ConfigEntryError::SubActionsNotSequence { at: path.clone() });
                Vec::new()
            }
        };

        let node = ActionNode::new(key, description).children(children);
        Some(match command {
            Some(command) => node.command(command),
            None => node,
        })
    }
}

/// Exactly one ASCII letter or digit, normalized to lower case.
fn parse_key(value: &Value) -> Option<char> {
    let text = value.as_str()?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn index_location(parent: &str, index: usize) -> String {
    if parent.is_empty() {
        format!("entry #{}", index + 1)
    } else {
        format!("{} > entry #{}", parent, index + 1)
    }
}

fn key_location(parent: &str, key: char) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{} > {}", parent, key)
    }
}
