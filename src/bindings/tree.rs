//! Binding Tree
//!
//! Ordered, immutable tree of action nodes and the single sequence lookup.

/// One binding: a trigger key, its label and what it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNode {
    pub key: char,
    pub description: String,
    pub children: Vec<ActionNode>,
    pub command: Option<String>,
}

impl ActionNode {
    pub fn new(key: char, description: impl Into<String>) -> Self {
        Self {
            key,
            description: description.into(),
            children: Vec::new(),
            command: None,
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn children(mut self, children: Vec<ActionNode>) -> Self {
        self.children = children;
        self
    }

    /// Neither a command nor anything below it.
    pub fn is_dead_end(&self) -> bool {
        self.command.is_none() && self.children.is_empty()
    }
}

/// The set of siblings the next key is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSet<'t> {
    Nodes(&'t [ActionNode]),
    Invalid,
}

impl<'t> NodeSet<'t> {
    /// First node with the given key, in declared order.
    pub fn find(&self, key: char) -> Option<&'t ActionNode> {
        match self {
            Self::Nodes(nodes) => nodes.iter().find(|node| node.key == key),
            Self::Invalid => None,
        }
    }

    pub fn nodes(&self) -> &'t [ActionNode] {
        match self {
            Self::Nodes(nodes) => nodes,
            Self::Invalid => &[],
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Implicit root holding the top-level bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTree {
    roots: Vec<ActionNode>,
}

impl BindingTree {
    pub fn new(roots: Vec<ActionNode>) -> Self {
        Self { roots }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn top_level(&self) -> NodeSet<'_> {
        NodeSet::Nodes(&self.roots)
    }

    /// Resolve a typed sequence from the root.
    ///
    /// Each character selects the first sibling with that key and descends
    /// into its children. Any miss short-circuits to [`NodeSet::Invalid`].
    pub fn resolve<I>(&self, sequence: I) -> NodeSet<'_>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self.top_level();
        for key in sequence {
            match current.find(key) {
                Some(node) => current = NodeSet::Nodes(&node.children),
                None => return NodeSet::Invalid,
            }
        }
        current
    }

    /// Total number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[ActionNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> BindingTree {
        BindingTree::new(vec![
            ActionNode::new('a', "Apps").children(vec![
                ActionNode::new('f', "Firefox").command("firefox"),
                ActionNode::new('t', "Terminal").command("alacritty"),
            ]),
            ActionNode::new('s', "System").children(vec![
                ActionNode::new('p', "Power").children(vec![
                    ActionNode::new('r', "Reboot").command("systemctl reboot"),
                ]),
            ]),
        ])
    }

    #[test]
    fn test_resolve_empty_sequence_is_top_level() {
        let tree = sample_tree();
        let set = tree.resolve("".chars());
        assert_eq!(set, tree.top_level());
        assert_eq!(set.nodes().len(), 2);
    }

    #[test]
    fn test_resolve_nested() {
        let tree = sample_tree();
        let set = tree.resolve("sp".chars());
        let keys: Vec<char> = set.nodes().iter().map(|n| n.key).collect();
        assert_eq!(keys, vec!['r']);
    }

    #[test]
    fn test_resolve_miss_is_invalid() {
        let tree = sample_tree();
        assert!(tree.resolve("x".chars()).is_invalid());
        assert!(tree.resolve("ax".chars()).is_invalid());
        assert!(tree.resolve("spqr".chars()).is_invalid());
    }

    #[test]
    fn test_resolve_leaf_yields_empty_children() {
        let tree = sample_tree();
        let set = tree.resolve("af".chars());
        assert!(!set.is_invalid());
        assert!(set.nodes().is_empty());
    }

    #[test]
    fn test_first_declared_match_wins() {
        let tree = BindingTree::new(vec![
            ActionNode::new('a', "First").command("one"),
            ActionNode::new('a', "Second").command("two"),
        ]);
        let node = tree.top_level().find('a').unwrap();
        assert_eq!(node.description, "First");
    }

    #[test]
    fn test_empty_tree() {
        let tree = BindingTree::empty();
        assert!(tree.is_empty());
        assert!(tree.top_level().nodes().is_empty());
        assert!(tree.resolve("a".chars()).is_invalid());
    }

    #[test]
    fn test_node_kinds() {
        let both = ActionNode::new('x', "Both")
            .command("cmd")
            .children(vec![ActionNode::new('y', "Child")]);
        assert!(!both.is_dead_end());
        assert!(!ActionNode::new('w', "Menu").children(vec![both]).is_dead_end());
        assert!(ActionNode::new('z', "Nothing").is_dead_end());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample_tree().node_count(), 6);
    }
}
