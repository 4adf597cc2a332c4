//! The compressed (radix) trie engine.
//!
//! Every node holds a non-empty run of characters. The tree is kept minimal
//! at all times:
//! * siblings never share a common prefix, so a branching point is always
//!   its own node, created by [split_node] when an insert diverges in the
//!   middle of a segment;
//! * a node that does not terminate a word always has at least two children,
//!   which [merge_node] restores after a delete.
//!
//! ```example
//!   insert "test", "testing", "go", "gone"      remove "go"
//!
//!           (root)                               (root)
//!           /    \                               /    \
//!       test*     go*                        test*     gone*
//!         |        |                           |
//!        ing*     ne*                         ing*
//! ```

use crate::{
    node::Node,
    slots::NodeIndex,
    tree::Tree,
};

/// The length in bytes of the longest common prefix of `a` and `b`,
/// always on a character boundary of both.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Splits the segment of `node` at byte offset `at`. The node keeps the head
/// of its segment and becomes a structural parent of a new node holding the
/// tail. The tail inherits the children, the value and the order entry of
/// the node, so the iteration position of the word is unchanged.
///
/// `at` must fall strictly inside the segment.
pub(crate) fn split_node<V>(tree: &mut Tree<String, V>, node: NodeIndex, at: usize) -> NodeIndex {
    let head = &mut tree.nodes[node];
    debug_assert!(
        head.key().as_ref().is_some_and(|k| at > 0 && at < k.len()),
        "Split point {at} is outside of the segment."
    );

    let tail_key = head
        .key_mut()
        .as_mut()
        .map(|key| key.split_off(at))
        .unwrap_or_default();
    let value = head.value_mut().take();
    let entry = head.entry();
    head.set_entry(None);
    let children = std::mem::take(&mut head.sub_keys);

    #[cfg(feature = "tracing")]
    tracing::trace!(at, head = ?head.key(), tail = %tail_key, "splitting node");

    let mut tail = Node::keyed(tail_key);
    tail.sub_keys = children;
    *tail.value_mut() = value;
    tail.set_entry(entry);
    let tail = tree.nodes.insert(tail);

    for i in 0..tree.nodes[tail].sub_key_len() {
        let child = tree.nodes[tail].sub_keys[i];
        tree.nodes[child].set_parent(Some(tail));
    }
    if let Some(entry) = entry {
        tree.order.relink(entry, tail);
    }

    tree.nodes.attach(node, tail);
    tail
}

/// Collapses a structural node into its only child. The node absorbs the
/// segment of the child, its children, its value and its order entry, and
/// the child is discarded.
///
/// The node must not be the root, must not be terminal and must have
/// exactly one child.
pub(crate) fn merge_node<V>(tree: &mut Tree<String, V>, node: NodeIndex) {
    debug_assert!(!tree.nodes[node].is_root());
    debug_assert!(!tree.nodes[node].is_terminal());
    debug_assert_eq!(tree.nodes[node].sub_key_len(), 1);

    let child = tree.nodes[node].sub_keys[0];
    let Some(mut absorbed) = tree.nodes.remove(child) else {
        return;
    };

    let segment = absorbed.key_mut().take();
    let value = absorbed.value_mut().take();
    let entry = absorbed.entry();
    let grandchildren = absorbed.clear();

    let merged = &mut tree.nodes[node];
    if let (Some(key), Some(segment)) = (merged.key_mut().as_mut(), segment) {
        key.push_str(&segment);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(merged = ?merged.key(), "merging node into its only child");

    merged.sub_keys = grandchildren;
    *merged.value_mut() = value;
    merged.set_entry(entry);

    for i in 0..tree.nodes[node].sub_key_len() {
        let grandchild = tree.nodes[node].sub_keys[i];
        tree.nodes[grandchild].set_parent(Some(node));
    }
    if let Some(entry) = entry {
        tree.order.relink(entry, node);
    }
}

/// Stores `word` with `value`. At every level the remainder of the word is
/// matched against the child that starts with the same character:
/// * no such child: a new leaf holding the whole remainder is attached;
/// * the segment of the child is a prefix of the remainder: descend;
/// * they share a shorter common prefix: the child is split at the end of
///   that prefix and the search continues below it.
///
/// Returns the previous value if the word was already stored.
pub(crate) fn insert<V>(tree: &mut Tree<String, V>, word: &str, value: V) -> Option<V> {
    debug_assert!(!word.is_empty(), "Cannot insert the empty word.");

    let mut parent = NodeIndex::ROOT;
    let mut rest = word;

    loop {
        let first = rest.chars().next()?;

        let Some(child) = tree.nodes.child(parent, first) else {
            let leaf = tree.nodes.insert(Node::keyed(rest.to_string()));
            tree.nodes.attach(parent, leaf);
            return tree.store(leaf, value);
        };

        let key = tree.nodes[child].key().as_deref().unwrap_or_default();
        let common = common_prefix_len(key, rest);
        if common < key.len() {
            split_node(tree, child, common);
        }

        if common == rest.len() {
            return tree.store(child, value);
        }

        rest = &rest[common..];
        parent = child;
    }
}

/// Finds the node whose full path is exactly `word`.
pub(crate) fn locate<V>(tree: &Tree<String, V>, word: &str) -> Option<NodeIndex> {
    let mut current = NodeIndex::ROOT;
    let mut rest = word;
    while let Some(first) = rest.chars().next() {
        let child = tree.nodes.child(current, first)?;
        rest = rest.strip_prefix(tree.nodes[child].key().as_deref()?)?;
        current = child;
    }
    Some(current)
}

/// Finds the terminal node of `word`.
pub(crate) fn lookup<V>(tree: &Tree<String, V>, word: &str) -> Option<NodeIndex> {
    locate(tree, word).filter(|node| tree.nodes[*node].is_terminal())
}

/// Collects every stored word starting with `prefix`, breadth-first. The
/// prefix may end in the middle of a segment, the scan then starts at the
/// node holding that segment.
pub(crate) fn prefix_scan<V>(tree: &Tree<String, V>, prefix: &str) -> Vec<(String, NodeIndex)> {
    let mut current = NodeIndex::ROOT;
    let mut rest = prefix;

    while let Some(first) = rest.chars().next() {
        let Some(child) = tree.nodes.child(current, first) else {
            break;
        };
        let key = tree.nodes[child].key().as_deref().unwrap_or_default();

        if let Some(after) = rest.strip_prefix(key) {
            if after.is_empty() {
                return tree.collect_from(child, prefix.to_string());
            }
            rest = after;
            current = child;
        } else if key.starts_with(rest) {
            let mut path = prefix.to_string();
            path.push_str(&key[rest.len()..]);
            return tree.collect_from(child, path);
        } else {
            break;
        }
    }

    vec![]
}

/// Removes `word`, returning its value. The tree is then compacted upwards:
/// empty structural leaves are pruned, and the first structural ancestor left
/// with a single child is merged with it.
///
/// If the word is not stored the tree is not modified.
pub(crate) fn remove<V>(tree: &mut Tree<String, V>, word: &str) -> Option<V> {
    let mut node = lookup(tree, word)?;
    let value = tree.unmark_terminal(node);

    while node != NodeIndex::ROOT && !tree.nodes[node].is_terminal() {
        match tree.nodes[node].sub_key_len() {
            0 => {
                let Some(parent) = tree.nodes[node].parent() else {
                    break;
                };
                let Some(first) = tree.nodes[node].key().as_deref().and_then(|k| k.chars().next()) else {
                    break;
                };

                if let Some(child) = tree.nodes.detach(parent, first) {
                    if let Some(mut removed) = tree.nodes.remove(child) {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(segment = ?removed.key(), "pruned empty branch");

                        removed.clear();
                    }
                }

                node = parent;
            }
            1 => {
                merge_node(tree, node);
                break;
            }
            _ => break,
        }
    }

    value
}
