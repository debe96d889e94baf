//! Navigation State
//!
//! Sequence-driven state machine over a [`BindingTree`].
//!
//! The active node set is always the result of replaying the typed sequence
//! from the root. Backspace recomputes it with [`BindingTree::resolve`]
//! instead of keeping a stack of parents.

use tracing::debug;

use super::keymap::{is_bindable_key, InputToken};
use crate::bindings::{ActionNode, BindingTree, NodeSet};

/// Coarse position of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed; matching against the top-level bindings.
    Root,
    /// Inside some node's children (possibly an empty list).
    Positioned,
    /// The typed sequence no longer resolves.
    Invalid,
}

/// What a single token did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<'t> {
    /// Moved into the children of the matched node.
    Descended,
    /// Matched a node with a command. The state is back at the root; the
    /// command is the caller's to run.
    Dispatch {
        node: &'t ActionNode,
        command: &'t str,
        sequence: String,
    },
    /// Matched a node with neither command nor children; reset to the root.
    DeadEnd { sequence: String },
    /// No binding for the key; the whole sequence was discarded.
    Rejected { key: char, sequence: String },
    /// Backspace removed a key and the shorter sequence resolved.
    Backtracked,
    /// Backspace removed a key but the shorter sequence did not resolve.
    Broken,
    /// Escape cleared the sequence.
    Cleared,
    /// Nothing to do (backspace on an empty sequence, or a character no
    /// binding can have).
    Unchanged,
}

/// Typed sequence plus the node set it resolves to.
#[derive(Debug, Clone)]
pub struct NavigationState<'t> {
    tree: &'t BindingTree,
    sequence: Vec<char>,
    node_set: NodeSet<'t>,
}

impl<'t> NavigationState<'t> {
    /// Start at the root of `tree`.
    pub fn new(tree: &'t BindingTree) -> Self {
        Self {
            tree,
            sequence: Vec::new(),
            node_set: tree.top_level(),
        }
    }

    pub fn sequence(&self) -> &[char] {
        &self.sequence
    }

    pub fn sequence_string(&self) -> String {
        self.sequence.iter().collect()
    }

    pub fn node_set(&self) -> NodeSet<'t> {
        self.node_set
    }

    pub fn phase(&self) -> Phase {
        match (self.node_set, self.sequence.is_empty()) {
            (NodeSet::Invalid, _) => Phase::Invalid,
            (NodeSet::Nodes(_), true) => Phase::Root,
            (NodeSet::Nodes(_), false) => Phase::Positioned,
        }
    }

    /// Feed one token through the state machine.
    pub fn apply(&mut self, token: InputToken) -> Transition<'t> {
        match token {
            InputToken::Char(key) => self.press(key),
            InputToken::Backspace => self.backspace(),
            InputToken::Escape => self.escape(),
        }
    }

    /// Handle a character key. Only lower-case ASCII letters and digits
    /// can be bound; anything else leaves the state alone.
    pub fn press(&mut self, key: char) -> Transition<'t> {
        if !is_bindable_key(key) {
            debug!("Ignoring unbindable key {:?}", key);
            return Transition::Unchanged;
        }

        let Some(node) = self.node_set.find(key) else {
            let sequence = self.sequence_string();
            debug!("No binding for '{}' after {:?}, resetting", key, sequence);
            self.reset();
            return Transition::Rejected { key, sequence };
        };

        self.sequence.push(key);

        if let Some(command) = node.command.as_deref() {
            let sequence = self.sequence_string();
            self.reset();
            return Transition::Dispatch {
                node,
                command,
                sequence,
            };
        }

        if node.is_dead_end() {
            let sequence = self.sequence_string();
            debug!("Sequence {:?} has no command defined, resetting", sequence);
            self.reset();
            return Transition::DeadEnd { sequence };
        }

        self.node_set = NodeSet::Nodes(&node.children);
        Transition::Descended
    }

    /// Drop the last key and replay the rest from the root.
    pub fn backspace(&mut self) -> Transition<'t> {
        if self.sequence.pop().is_none() {
            return Transition::Unchanged;
        }

        self.node_set = self.tree.resolve(self.sequence.iter().copied());
        if self.node_set.is_invalid() {
            debug!("Sequence {:?} no longer resolves", self.sequence_string());
            return Transition::Broken;
        }
        Transition::Backtracked
    }

    /// Clear the sequence. Whether Escape also ends the session is up to
    /// the caller.
    pub fn escape(&mut self) -> Transition<'t> {
        self.reset();
        Transition::Cleared
    }

    /// Back to the root with nothing typed.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.node_set = self.tree.top_level();
    }
}
