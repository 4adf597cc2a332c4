use std::collections::VecDeque;

use crate::{
    node::Segment,
    order::{Cursor, OrderIndex},
    slots::{NodeIndex, Slots},
};

/// The node arena together with the order index. Both are created,
/// mutated and cleared together, so a node is word-terminal exactly
/// when the order index holds an entry for it.
#[derive(Debug, Clone)]
pub(crate) struct Tree<S, V> {
    /// The node pool, this is where the nodes are actually stored. Parent and
    /// child links are [NodeIndex] values into this pool.
    pub(crate) nodes: Slots<S, V>,
    /// The insertion order of the stored words.
    pub(crate) order: OrderIndex,
}

impl<S, V> Tree<S, V> {
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Slots::with_capacity(nodes),
            order: OrderIndex::new(),
        }
    }
    /// The amount of stored words, backed by the order index.
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(words = self.order.len(), "clearing tree");

        self.order.clear();
        self.nodes.clear();
    }
    /// Marks a node as terminating a word by appending it to the order index.
    /// Does nothing if the node already is terminal.
    pub fn mark_terminal(&mut self, node: NodeIndex) {
        if self.nodes[node].is_terminal() {
            return;
        }
        let entry = self.order.append(node);
        self.nodes[node].set_entry(Some(entry));
    }
    /// Removes the order entry of a node, returning the value it held.
    pub fn unmark_terminal(&mut self, node: NodeIndex) -> Option<V> {
        let entry = self.nodes[node].entry()?;
        self.order.remove(entry);
        self.nodes[node].set_entry(None);
        self.nodes[node].value_mut().take()
    }
    /// Stores a value on a word-terminal node, returning the old value.
    pub fn store(&mut self, node: NodeIndex, value: V) -> Option<V> {
        self.mark_terminal(node);
        self.nodes[node].value_mut().replace(value)
    }
    /// Gets the value of a node if the node is word-terminal.
    pub fn value(&self, node: NodeIndex) -> Option<&V> {
        let node = &self.nodes[node];
        if !node.is_terminal() {
            return None;
        }
        node.value().as_ref()
    }
    pub fn value_mut(&mut self, node: NodeIndex) -> Option<&mut V> {
        let node = &mut self.nodes[node];
        if !node.is_terminal() {
            return None;
        }
        node.value_mut().as_mut()
    }
    /// A lazy walk over the word-terminal nodes in insertion order.
    pub fn cursor(&self) -> Cursor<'_> {
        self.order.iter()
    }
}

impl<S: Segment, V> Tree<S, V> {
    /// Collects the words of the subtree rooted at `start`, whose full path
    /// is `path`. The start node comes first if it is terminal, followed by
    /// every terminal descendant in breadth-first order.
    pub fn collect_from(&self, start: NodeIndex, path: String) -> Vec<(String, NodeIndex)> {
        let mut found = vec![];
        let mut queue = VecDeque::from([(start, path)]);

        while let Some((index, word)) = queue.pop_front() {
            let node = &self.nodes[index];
            for child in &node.sub_keys {
                let mut extended = word.clone();
                if let Some(key) = self.nodes[*child].key() {
                    key.write_into(&mut extended);
                }
                queue.push_back((*child, extended));
            }
            if node.is_terminal() {
                found.push((word, index));
            }
        }

        found
    }

    /// Verifies every structural invariant shared by both layouts,
    /// panicking on the first violation.
    #[cfg(test)]
    pub fn check_invariants(&self) {
        let mut terminals = 0;
        for (index, node) in self.nodes.iter() {
            if node.is_root() {
                assert_eq!(index, NodeIndex::ROOT, "Only the root may be unkeyed.");
                assert!(!node.is_terminal(), "The root must never be terminal.");
                assert!(node.parent().is_none());
            }

            let mut previous = None;
            for child in &node.sub_keys {
                assert_eq!(
                    self.nodes[*child].parent(),
                    Some(index),
                    "Child {child:?} does not point back to {index:?}."
                );
                let first = self.nodes[*child].key().as_ref().unwrap().first();
                if let Some(previous) = previous {
                    assert!(previous < first, "Children are not sorted by first char.");
                }
                previous = Some(first);
            }

            if let Some(parent) = node.parent() {
                assert!(self.nodes[parent].sub_keys.contains(&index));
            }

            match node.entry() {
                Some(entry) => {
                    terminals += 1;
                    assert_eq!(self.order.node(entry), index);
                    assert!(node.value().is_some(), "Terminal {index:?} lost its value.");
                }
                None => assert!(node.value().is_none(), "Stale value on {index:?}."),
            }

            if !node.is_root() && node.parent().is_none() {
                panic!("Detached node {index:?} is still in the pool.");
            }
        }

        assert_eq!(terminals, self.order.len());
        assert_eq!(self.cursor().count(), self.order.len());
        assert_eq!(self.cursor().rev().count(), self.order.len());
    }
}
