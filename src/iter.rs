use std::iter::FusedIterator;

use crate::{node::Segment, order::Cursor, slots::NodeIndex, tree::Tree};

/// Turns a word-terminal node back into its word and value. This hides the
/// segment type of the tree from the iterators, so that both layouts share
/// the same iterator types.
pub(crate) trait Resolve<V> {
    fn word(&self, node: NodeIndex) -> String;
    fn value(&self, node: NodeIndex) -> Option<&V>;
}

impl<S: Segment, V> Resolve<V> for Tree<S, V> {
    fn word(&self, node: NodeIndex) -> String {
        self.nodes.path(node)
    }
    fn value(&self, node: NodeIndex) -> Option<&V> {
        Tree::value(self, node)
    }
}

/// An iterator over the words of a set, in insertion order. It can
/// be reversed with [Iterator::rev].
#[derive(Clone)]
pub struct WordIter<'a> {
    cursor: Cursor<'a>,
    tree: &'a dyn Resolve<()>,
}

impl<'a> WordIter<'a> {
    pub(crate) fn new<S: Segment>(tree: &'a Tree<S, ()>) -> Self {
        Self {
            cursor: tree.cursor(),
            tree,
        }
    }
}

impl Iterator for WordIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().map(|node| self.tree.word(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl DoubleEndedIterator for WordIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back().map(|node| self.tree.word(node))
    }
}

impl ExactSizeIterator for WordIter<'_> {}
impl FusedIterator for WordIter<'_> {}

/// An iterator over the entries of a map, in insertion order.
pub struct EntryIter<'a, V> {
    cursor: Cursor<'a>,
    tree: &'a dyn Resolve<V>,
}

/// An iterator over the keys of a map, in insertion order.
pub struct KeyIter<'a, V> {
    inner: EntryIter<'a, V>,
}

/// An iterator over the values of a map, in insertion order.
pub struct ValueIter<'a, V> {
    inner: EntryIter<'a, V>,
}

impl<'a, V> EntryIter<'a, V> {
    pub(crate) fn new<S: Segment>(tree: &'a Tree<S, V>) -> Self {
        Self {
            cursor: tree.cursor(),
            tree,
        }
    }
    fn resolve(&self, node: NodeIndex) -> Option<(String, &'a V)> {
        // Terminal nodes always hold a value, the map never stores a
        // word without one.
        Some((self.tree.word(node), self.tree.value(node)?))
    }
}

impl<V> Clone for EntryIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            tree: self.tree,
        }
    }
}

impl<'a, V> Iterator for EntryIter<'a, V> {
    type Item = (String, &'a V);

    /// Iterates over the borrowed entries within a map.
    /// ```
    /// use ordtrie::TrieMap;
    ///
    /// let map = TrieMap::from([("hello", 4), ("bye", 3)]);
    ///
    /// let mut entries = map.iter();
    ///
    /// assert_eq!(entries.next().unwrap(), ("hello".to_string(), &4));
    /// assert_eq!(entries.next().unwrap(), ("bye".to_string(), &3));
    /// assert!(entries.next().is_none());
    /// ```
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.next()?;
        self.resolve(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<V> DoubleEndedIterator for EntryIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.cursor.next_back()?;
        self.resolve(node)
    }
}

impl<V> ExactSizeIterator for EntryIter<'_, V> {}
impl<V> FusedIterator for EntryIter<'_, V> {}

impl<'a, V> KeyIter<'a, V> {
    pub(crate) fn new(inner: EntryIter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Iterator for KeyIter<'_, V> {
    type Item = String;

    /// Iterates over the keys within a map.
    ///
    /// ```
    /// use ordtrie::CompressedTrieMap;
    ///
    /// let mut map = CompressedTrieMap::new();
    ///
    /// map.insert("hello", 1);
    /// map.insert("bye", 2);
    ///
    /// let mut keys = map.keys();
    ///
    /// assert_eq!(keys.next().unwrap(), "hello");
    /// assert_eq!(keys.next().unwrap(), "bye");
    /// assert_eq!(keys.next().as_ref(), None);
    /// ```
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for KeyIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<V> ExactSizeIterator for KeyIter<'_, V> {}

impl<'a, V> ValueIter<'a, V> {
    pub(crate) fn new(inner: EntryIter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for ValueIter<'a, V> {
    type Item = &'a V;

    /// Iterates over the values within a map.
    ///
    /// ```
    /// use ordtrie::TrieMap;
    ///
    /// let mut map = TrieMap::new();
    ///
    /// map.insert("hello", 1);
    /// map.insert("bye", 2);
    ///
    /// let mut values = map.values();
    ///
    /// assert_eq!(values.next().cloned(), Some(1));
    /// assert_eq!(values.next().cloned(), Some(2));
    /// assert_eq!(values.next().cloned(), None);
    /// ```
    fn next(&mut self) -> Option<Self::Item> {
        // The value is resolved without building the word.
        let node = self.inner.cursor.next()?;
        self.inner.tree.value(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ValueIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.inner.cursor.next_back()?;
        self.inner.tree.value(node)
    }
}

impl<V> ExactSizeIterator for ValueIter<'_, V> {}

#[cfg(test)]
mod tests {
    use crate::{compressed, standard, tree::Tree};

    use super::{EntryIter, KeyIter, ValueIter, WordIter};

    #[test]
    pub fn words_both_directions() {
        let mut tree = Tree::<char, ()>::with_capacity(0);
        for word in ["b", "a", "ab", "ba"] {
            standard::insert(&mut tree, word, ());
        }

        let forward = WordIter::new(&tree).collect::<Vec<_>>();
        let mut backward = WordIter::new(&tree).rev().collect::<Vec<_>>();
        assert_eq!(forward, ["b", "a", "ab", "ba"]);
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(WordIter::new(&tree).len(), 4);
    }

    #[test]
    pub fn entries_keys_values() {
        let mut tree = Tree::<String, u32>::with_capacity(0);
        compressed::insert(&mut tree, "car", 1);
        compressed::insert(&mut tree, "cart", 2);
        compressed::insert(&mut tree, "cat", 3);

        let entries = EntryIter::new(&tree).rev().collect::<Vec<_>>();
        assert_eq!(
            entries,
            [("cat".to_string(), &3), ("cart".to_string(), &2), ("car".to_string(), &1)]
        );

        let keys = KeyIter::new(EntryIter::new(&tree)).collect::<Vec<_>>();
        assert_eq!(keys, ["car", "cart", "cat"]);

        let values = ValueIter::new(EntryIter::new(&tree)).rev().copied().collect::<Vec<_>>();
        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    pub fn iteration_restarts_from_current_state() {
        let mut tree = Tree::<char, ()>::with_capacity(0);
        standard::insert(&mut tree, "one", ());
        let before = WordIter::new(&tree).collect::<Vec<_>>();
        standard::insert(&mut tree, "two", ());
        let after = WordIter::new(&tree).collect::<Vec<_>>();
        assert_eq!(before, ["one"]);
        assert_eq!(after, ["one", "two"]);
    }
}
