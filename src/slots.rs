use std::ops::{Index, IndexMut};

use crate::node::{Node, Segment};

/// The array that holds all the underlying node data. It works
/// by holding a freelist for filling tombstone slots, and by maintaining
/// a simple vector.
///
/// The slots will always have a root. In practice, this means that it will
/// never error because the root was indexed and it did not exist. Great
/// care is put into maintaining the root within the list.
#[derive(Debug, Clone)]
pub(crate) struct Slots<S, V> {
    /// A list of optional slots containing nodes. These may be
    /// [Option::None] in the case of a tombstone, i.e., a node
    /// that once was but has since been deleted.
    slots: Vec<Option<Node<S, V>>>,
    /// A freelist of all the available space within the array.
    free_list: Vec<usize>,
}

/// Represents the index of a node within the [Slots]. Indices of removed
/// nodes are recycled, so an index is only meaningful while the node it
/// was handed out for is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

impl NodeIndex {
    /// The root node, which always has an internal index of 0.
    pub const ROOT: NodeIndex = NodeIndex(0);

    /// Gets the internal position of the node as a [usize].
    pub fn position(&self) -> usize {
        self.0
    }
}

impl<S, V> Slots<S, V> {
    /// Creates a new [Slots] with a certain amount of capacity. The
    /// root is inserted at position zero.
    pub fn with_capacity(cap: usize) -> Self {
        let mut slots = Vec::with_capacity(cap.max(1));
        slots.push(Some(Node::root()));
        Self {
            slots,
            free_list: vec![],
        }
    }
    /// Gets the capacity of the [Slots].
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
    /// The amount of live nodes, the root included.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
    /// Inserts a [Node] into the underlying [Vec], returning
    /// the new [NodeIndex].
    pub fn insert(&mut self, item: Node<S, V>) -> NodeIndex {
        match self.free_list.pop() {
            Some(avail) => {
                self.slots[avail] = Some(item);
                NodeIndex(avail)
            }
            None => {
                self.slots.push(Some(item));
                NodeIndex(self.slots.len() - 1)
            }
        }
    }
    /// Removes a node from the underlying [Vec]. The root can never
    /// be removed, asking for it yields [Option::None].
    pub fn remove(&mut self, index: NodeIndex) -> Option<Node<S, V>> {
        if index == NodeIndex::ROOT {
            return None;
        }
        let pos = &mut self.slots[index.position()];
        if pos.is_some() {
            // Add the position to the free list.
            self.free_list.push(index.position());
        }
        pos.take()
    }
    /// Clears the underlying vector, reinserting the root node into
    /// the [Slots].
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.slots.push(Some(Node::root()));
    }
    /// Returns an iterator of node indices alongside the [Node] objects themselves.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node<S, V>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, f)| Some((NodeIndex(i), f.as_ref()?)))
    }
}

impl<S: Segment, V> Slots<S, V> {
    /// Performs a binary search over the children of `source` by the first
    /// character of their segments.
    fn bin_search(&self, source: NodeIndex, first: char) -> Result<usize, usize> {
        self[source].sub_keys.binary_search_by(|node| {
            // UNWRAP: This unwrap is okay, because no node can point to the root node.
            // The root node is the only node that has a null key.
            self[*node]
                .key()
                .as_ref()
                .expect("Node key was null.")
                .first()
                .cmp(&first)
        })
    }
    /// Finds the child of `source` whose segment starts with `first`.
    pub fn child(&self, source: NodeIndex, first: char) -> Option<NodeIndex> {
        let position = self.bin_search(source, first).ok()?;
        Some(self[source].sub_keys[position])
    }
    /// Attaches `child` under `source`, setting the back-reference of the
    /// child. Returns the child that previously occupied the same key, which
    /// the engines never let happen.
    pub fn attach(&mut self, source: NodeIndex, child: NodeIndex) -> Option<NodeIndex> {
        let first = self[child]
            .key()
            .as_ref()
            .expect("Cannot attach the root node.")
            .first();
        self[child].set_parent(Some(source));
        match self.bin_search(source, first) {
            Ok(valid) => Some(std::mem::replace(&mut self[source].sub_keys[valid], child)),
            Err(invalid) => {
                self[source].sub_keys.insert(invalid, child);
                None
            }
        }
    }
    /// Detaches the child of `source` keyed by `first`, returning it if
    /// it was present. The back-reference of the child is cleared.
    pub fn detach(&mut self, source: NodeIndex, first: char) -> Option<NodeIndex> {
        let position = self.bin_search(source, first).ok()?;
        let child = self[source].sub_keys.remove(position);
        self[child].set_parent(None);
        Some(child)
    }
    /// Reconstructs the path of a node by traversing up the structure,
    /// concatenating the segments up to (excluding) the root.
    pub fn path(&self, index: NodeIndex) -> String {
        let mut segments = vec![];
        let mut current = index;
        while let Some(parent) = self[current].parent() {
            if let Some(key) = self[current].key() {
                segments.push(key);
            }
            current = parent;
        }
        let mut word = String::new();
        for segment in segments.into_iter().rev() {
            segment.write_into(&mut word);
        }
        word
    }
    /// Reconstructs the complete stored word of a node, this is
    /// [Option::None] if the node does not terminate a word.
    #[cfg(test)]
    pub fn full_word(&self, index: NodeIndex) -> Option<String> {
        if !self[index].is_terminal() {
            return None;
        }
        Some(self.path(index))
    }
}

impl<S, V> Index<NodeIndex> for Slots<S, V> {
    type Output = Node<S, V>;
    fn index(&self, index: NodeIndex) -> &Self::Output {
        self.slots[index.position()]
            .as_ref()
            .expect("Could not find node at requested index.")
    }
}

impl<S, V> IndexMut<NodeIndex> for Slots<S, V> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        self.slots[index.position()]
            .as_mut()
            .expect("Could not find node at requested index.")
    }
}
