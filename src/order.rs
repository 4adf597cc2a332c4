//! The insertion-order index.
//!
//! A doubly linked list whose entries live in their own arena, next to the
//! node arena of the tree. Every entry refers to exactly one word-terminal
//! node through its [NodeIndex], and every word-terminal node refers back to
//! its entry through an [EntryIndex]. Appending, detaching an arbitrary entry
//! and stepping in either direction are all O(1).

use crate::slots::NodeIndex;

/// Represents the index of an entry within the [OrderIndex].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EntryIndex(usize);

/// A slot in the entry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntrySlot {
    Occupied {
        node: NodeIndex,
        prev: Option<EntryIndex>,
        next: Option<EntryIndex>,
    },
    /// Next free slot index.
    Free(Option<usize>),
}

#[derive(Debug, Clone)]
pub(crate) struct OrderIndex {
    entries: Vec<EntrySlot>,
    head: Option<EntryIndex>,
    tail: Option<EntryIndex>,
    free_head: Option<usize>,
    len: usize,
}

impl Default for OrderIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIndex {
    /// Creates an empty index with no head and no tail.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }
    /// The number of entries in the index.
    pub fn len(&self) -> usize {
        self.len
    }
    /// Drops every entry. The tree is left untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }
    fn alloc(&mut self, slot: EntrySlot) -> EntryIndex {
        match self.free_head {
            Some(free) => {
                self.free_head = match self.entries[free] {
                    EntrySlot::Free(next) => next,
                    EntrySlot::Occupied { .. } => panic!("Corrupted free list."),
                };
                self.entries[free] = slot;
                EntryIndex(free)
            }
            None => {
                self.entries.push(slot);
                EntryIndex(self.entries.len() - 1)
            }
        }
    }
    fn links(&self, entry: EntryIndex) -> (NodeIndex, Option<EntryIndex>, Option<EntryIndex>) {
        match self.entries[entry.0] {
            EntrySlot::Occupied { node, prev, next } => (node, prev, next),
            EntrySlot::Free(_) => panic!("Entry {entry:?} is not in the index."),
        }
    }
    fn set_next(&mut self, entry: EntryIndex, to: Option<EntryIndex>) {
        if let EntrySlot::Occupied { next, .. } = &mut self.entries[entry.0] {
            *next = to;
        }
    }
    fn set_prev(&mut self, entry: EntryIndex, to: Option<EntryIndex>) {
        if let EntrySlot::Occupied { prev, .. } = &mut self.entries[entry.0] {
            *prev = to;
        }
    }
    /// Links a new entry for `node` at the tail. The caller stores the
    /// returned [EntryIndex] on the node.
    pub fn append(&mut self, node: NodeIndex) -> EntryIndex {
        let old_tail = self.tail;
        let entry = self.alloc(EntrySlot::Occupied {
            node,
            prev: old_tail,
            next: None,
        });

        match old_tail {
            Some(tail) => self.set_next(tail, Some(entry)),
            None => self.head = Some(entry),
        }

        self.tail = Some(entry);
        self.len += 1;
        entry
    }
    /// Detaches an entry from wherever it sits in the list, returning the
    /// node it was referring to. The caller clears the back-reference on
    /// the node.
    pub fn remove(&mut self, entry: EntryIndex) -> NodeIndex {
        let (node, prev, next) = self.links(entry);

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }

        self.entries[entry.0] = EntrySlot::Free(self.free_head);
        self.free_head = Some(entry.0);
        self.len -= 1;
        node
    }
    /// Points an existing entry at a different node, keeping its position.
    pub fn relink(&mut self, entry: EntryIndex, to: NodeIndex) {
        if let EntrySlot::Occupied { node, .. } = &mut self.entries[entry.0] {
            *node = to;
        }
    }
    /// The node an entry refers to.
    #[cfg(test)]
    pub fn node(&self, entry: EntryIndex) -> NodeIndex {
        self.links(entry).0
    }
    /// Returns a lazy cursor over the index. It walks from the head
    /// forwards and from the tail backwards.
    pub fn iter(&self) -> Cursor<'_> {
        Cursor {
            index: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

/// A double-ended walk over an [OrderIndex], yielding the referenced nodes.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    index: &'a OrderIndex,
    front: Option<EntryIndex>,
    back: Option<EntryIndex>,
    remaining: usize,
}

impl Iterator for Cursor<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let (node, _, next) = self.index.links(self.front?);
        self.front = next;
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Cursor<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let (node, prev, _) = self.index.links(self.back?);
        self.back = prev;
        self.remaining -= 1;
        Some(node)
    }
}

impl ExactSizeIterator for Cursor<'_> {}
