//! The standard trie engine, one character per node.
//!
//! ```example
//!             t
//!            /
//!           e
//!          / \
//!         s   a*
//!          \
//!           t*
//! ```
//! A word is stored by walking from the root one character at a time,
//! creating the nodes that do not exist yet, and appending the last node
//! to the order index.

use crate::{
    node::Node,
    slots::NodeIndex,
    tree::Tree,
};

/// Stores `word` with `value`, creating any missing nodes along the path.
/// Returns the previous value if the word was already stored, in which case
/// its iteration position is kept.
pub(crate) fn insert<V>(tree: &mut Tree<char, V>, word: &str, value: V) -> Option<V> {
    let mut parent = NodeIndex::ROOT;

    for c in word.chars() {
        parent = match tree.nodes.child(parent, c) {
            Some(node) => node,
            None => {
                let node = tree.nodes.insert(Node::keyed(c));
                tree.nodes.attach(parent, node);
                node
            }
        };
    }

    tree.store(parent, value)
}

/// Walks character by character, returning the node that matches `word`
/// exactly. The node is not necessarily terminal.
pub(crate) fn locate<V>(tree: &Tree<char, V>, word: &str) -> Option<NodeIndex> {
    let mut current = NodeIndex::ROOT;
    for c in word.chars() {
        current = tree.nodes.child(current, c)?;
    }
    Some(current)
}

/// Finds the terminal node of `word`.
pub(crate) fn lookup<V>(tree: &Tree<char, V>, word: &str) -> Option<NodeIndex> {
    locate(tree, word).filter(|node| tree.nodes[*node].is_terminal())
}

/// Collects every stored word starting with `prefix`, breadth-first.
pub(crate) fn prefix_scan<V>(tree: &Tree<char, V>, prefix: &str) -> Vec<(String, NodeIndex)> {
    if prefix.is_empty() {
        return vec![];
    }
    match locate(tree, prefix) {
        Some(node) => tree.collect_from(node, prefix.to_string()),
        None => vec![],
    }
}

/// Removes `word`, returning its value. Afterwards every ancestor that is
/// left childless and non-terminal is pruned, up to the first ancestor that
/// still has children or is itself a word.
///
/// If the word is not stored the tree is not modified.
pub(crate) fn remove<V>(tree: &mut Tree<char, V>, word: &str) -> Option<V> {
    let mut node = lookup(tree, word)?;
    let value = tree.unmark_terminal(node);

    while node != NodeIndex::ROOT
        && tree.nodes[node].sub_key_len() == 0
        && !tree.nodes[node].is_terminal()
    {
        let Some(parent) = tree.nodes[node].parent() else {
            break;
        };
        let Some(key) = *tree.nodes[node].key() else {
            break;
        };

        if let Some(child) = tree.nodes.detach(parent, key) {
            if let Some(mut removed) = tree.nodes.remove(child) {
                removed.clear();
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %key, "pruned empty branch");

        node = parent;
    }

    value
}
