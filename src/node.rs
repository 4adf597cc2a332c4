use std::fmt::Debug;

use crate::{order::EntryIndex, slots::NodeIndex};

/// A key fragment held by a single [Node].
///
/// The standard trie stores exactly one [char] per node, while the compressed
/// trie stores a non-empty run of characters as a [String]. Siblings are
/// distinguished (and ordered) by the first character of their fragment.
pub(crate) trait Segment: Debug {
    /// The first character of the fragment. Fragments are never empty.
    fn first(&self) -> char;
    /// Appends the fragment to the buffer.
    fn write_into(&self, buffer: &mut String);
}

impl Segment for char {
    fn first(&self) -> char {
        *self
    }
    fn write_into(&self, buffer: &mut String) {
        buffer.push(*self);
    }
}

impl Segment for String {
    fn first(&self) -> char {
        // UNWRAP: Compressed segments are never empty, only the root
        // has no segment and it never takes part in a sibling search.
        self.chars().next().expect("Compressed segment was empty.")
    }
    fn write_into(&self, buffer: &mut String) {
        buffer.push_str(self);
    }
}

/// A Trie node that holds a key fragment, the indices of its children,
/// a back-reference to its parent and, if it terminates a stored word,
/// the value and the order entry of that word.
///
/// In the case of a root node the key and the parent will both be
/// [Option::None]. The root never terminates a word.
#[derive(Debug, Clone)]
pub(crate) struct Node<S, V> {
    /// The node key.
    key: Option<S>,
    /// The parent of this node, this is [Option::None] for the root
    /// and for nodes that are not yet attached.
    parent: Option<NodeIndex>,
    /// The node subkeys, sorted by the first character of their segment.
    pub(crate) sub_keys: Vec<NodeIndex>,
    /// The value of the node. This is only populated if this node terminates
    /// a word.
    value: Option<V>,
    /// The position of this node inside of the order index. Present iff
    /// the node terminates a word.
    entry: Option<EntryIndex>,
}

impl<S, V> Node<S, V> {
    /// Creates a new root node. This just consists
    /// of a normal node with a `null` key.
    pub const fn root() -> Self {
        Node {
            key: None,
            parent: None,
            sub_keys: Vec::new(),
            value: None,
            entry: None,
        }
    }
    /// Creates an unattached keyed node.
    pub fn keyed(key: S) -> Self {
        Self {
            key: Some(key),
            parent: None,
            sub_keys: Vec::new(),
            value: None,
            entry: None,
        }
    }
}

impl<S, V> Node<S, V> {
    /// Gets the node key. This will be [Option::None] in the case
    /// that we are dealing with a root node.
    pub fn key(&self) -> &Option<S> {
        &self.key
    }
    pub fn key_mut(&mut self) -> &mut Option<S> {
        &mut self.key
    }
    pub fn is_root(&self) -> bool {
        self.key.is_none()
    }
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }
    pub(crate) fn set_parent(&mut self, parent: Option<NodeIndex>) {
        self.parent = parent;
    }
    /// Checks if the node terminates a stored word.
    pub fn is_terminal(&self) -> bool {
        self.entry.is_some()
    }
    pub fn entry(&self) -> Option<EntryIndex> {
        self.entry
    }
    pub(crate) fn set_entry(&mut self, entry: Option<EntryIndex>) {
        self.entry = entry;
    }
    /// Returns the length of the subkey array, or in other words,
    /// how many children the specific node has.
    pub fn sub_key_len(&self) -> usize {
        self.sub_keys.len()
    }
    /// Returns an immutable reference to the inner value.
    pub fn value(&self) -> &Option<V> {
        &self.value
    }
    /// Returns a mutable reference to the inner value.
    pub fn value_mut(&mut self) -> &mut Option<V> {
        &mut self.value
    }
    /// Detaches the node from the tree and from the order index,
    /// returning its former children. Siblings are not touched.
    pub fn clear(&mut self) -> Vec<NodeIndex> {
        self.parent = None;
        self.entry = None;
        self.value = None;
        std::mem::take(&mut self.sub_keys)
    }
}

#[cfg(test)]
mod tests {
    use crate::{order::OrderIndex, slots::NodeIndex};

    use super::{Node, Segment};

    #[test]
    pub fn root_is_not_terminal() {
        let root = Node::<char, ()>::root();
        assert!(root.is_root());
        assert!(!root.is_terminal());
        assert!(root.parent().is_none());
    }

    #[test]
    pub fn clear_detaches_everything() {
        let mut order = OrderIndex::new();
        let mut node = Node::<String, u8>::keyed("abc".to_string());
        node.set_parent(Some(NodeIndex::ROOT));
        node.set_entry(Some(order.append(NodeIndex::ROOT)));
        *node.value_mut() = Some(3);
        node.sub_keys.push(NodeIndex::ROOT);

        let children = node.clear();
        assert_eq!(children, vec![NodeIndex::ROOT]);
        assert!(node.parent().is_none());
        assert!(!node.is_terminal());
        assert!(node.value().is_none());
        assert_eq!(node.sub_key_len(), 0);
        assert_eq!(node.key().as_deref(), Some("abc"));
    }

    #[test]
    pub fn segment_writes() {
        assert_eq!('é'.first(), 'é');
        assert_eq!("héllo".to_string().first(), 'h');

        let mut buffer = String::new();
        'x'.write_into(&mut buffer);
        "yz".to_string().write_into(&mut buffer);
        assert_eq!(buffer, "xyz");
    }
}
