use std::{
    fmt::{self, Debug},
    ops::{Index, IndexMut},
};

use crate::{
    compressed,
    error::{TrieError, validate_word},
    iter::{EntryIter, KeyIter, ValueIter},
    standard,
    tree::Tree,
};

/// A map from strings to values stored in a standard trie, one character
/// per node.
///
/// Entries are iterated in the order their keys were first inserted.
/// Updating the value of an existing key keeps its position.
///
/// ```
/// use ordtrie::TrieMap;
///
/// let mut map = TrieMap::new();
/// map.insert("car", 1);
/// map.insert("cart", 2);
/// map.insert("cat", 3);
///
/// assert_eq!(map.get("cart"), Some(&2));
/// assert_eq!(map.find("ca"), [
///     ("car".to_string(), &1),
///     ("cat".to_string(), &3),
///     ("cart".to_string(), &2),
/// ]);
/// ```
pub struct TrieMap<V> {
    tree: Tree<char, V>,
}

/// A map from strings to values stored in a radix-compressed trie.
///
/// It behaves exactly like [TrieMap], only the internal layout differs.
pub struct CompressedTrieMap<V> {
    tree: Tree<String, V>,
}

impl<V> Default for TrieMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieMap<V> {
    /// Creates a new, empty [TrieMap].
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Creates a new [TrieMap] with room for a certain amount of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            tree: Tree::with_capacity(nodes),
        }
    }
    /// The amount of nodes the [TrieMap] can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
    /// Returns the amount of entries within the [TrieMap].
    pub fn len(&self) -> usize {
        self.tree.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }
    /// Inserts a key-value pair, returning the previous value of the key.
    ///
    /// # Panics
    /// If the key is empty. See [TrieMap::try_insert] for a non-panicking
    /// version.
    ///
    /// ```
    /// use ordtrie::TrieMap;
    ///
    /// let mut map = TrieMap::new();
    /// assert_eq!(map.insert("hello", 1), None);
    /// assert_eq!(map.insert("hello", 2), Some(1));
    /// assert_eq!(map["hello"], 2);
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(old) => old,
            Err(error) => panic!("{error}"),
        }
    }
    /// Inserts a key-value pair, returning the previous value of the key.
    ///
    /// # Errors
    /// If the key is empty, in which case the value is dropped.
    pub fn try_insert(&mut self, key: &str, value: V) -> Result<Option<V>, TrieError> {
        validate_word(key, "key")?;
        Ok(standard::insert(&mut self.tree, key, value))
    }
    /// Gets a reference to the value of a key.
    ///
    /// ```
    /// use ordtrie::TrieMap;
    ///
    /// let map = TrieMap::from([("gone", 4)]);
    /// assert_eq!(map.get("gone"), Some(&4));
    /// assert_eq!(map.get("go"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        let node = standard::lookup(&self.tree, key)?;
        self.tree.value(node)
    }
    /// Gets a mutable reference to the value of a key.
    ///
    /// ```
    /// use ordtrie::TrieMap;
    ///
    /// let mut map = TrieMap::from([("count", 1)]);
    /// *map.get_mut("count").unwrap() += 1;
    /// assert_eq!(map["count"], 2);
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let node = standard::lookup(&self.tree, key)?;
        self.tree.value_mut(node)
    }
    pub fn contains_key(&self, key: &str) -> bool {
        standard::lookup(&self.tree, key).is_some()
    }
    /// Removes a key, returning its value if it was present.
    ///
    /// ```
    /// use ordtrie::TrieMap;
    ///
    /// let mut map = TrieMap::from([("go", 1), ("gone", 2)]);
    /// assert_eq!(map.remove("go"), Some(1));
    /// assert_eq!(map.remove("go"), None);
    /// assert_eq!(map.get("gone"), Some(&2));
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        standard::remove(&mut self.tree, key)
    }
    /// Finds every entry whose key starts with `prefix`, breadth-first.
    pub fn find(&self, prefix: &str) -> Vec<(String, &V)> {
        standard::prefix_scan(&self.tree, prefix)
            .into_iter()
            .filter_map(|(key, node)| Some((key, self.tree.value(node)?)))
            .collect()
    }
    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> EntryIter<'_, V> {
        EntryIter::new(&self.tree)
    }
    pub fn keys(&self) -> KeyIter<'_, V> {
        KeyIter::new(self.iter())
    }
    pub fn values(&self) -> ValueIter<'_, V> {
        ValueIter::new(self.iter())
    }
}

impl<V> Default for CompressedTrieMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CompressedTrieMap<V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            tree: Tree::with_capacity(nodes),
        }
    }
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
    pub fn len(&self) -> usize {
        self.tree.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn clear(&mut self) {
        self.tree.clear();
    }
    /// Inserts a key-value pair, returning the previous value of the key.
    ///
    /// # Panics
    /// If the key is empty.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(old) => old,
            Err(error) => panic!("{error}"),
        }
    }
    /// # Errors
    /// If the key is empty.
    pub fn try_insert(&mut self, key: &str, value: V) -> Result<Option<V>, TrieError> {
        validate_word(key, "key")?;
        Ok(compressed::insert(&mut self.tree, key, value))
    }
    pub fn get(&self, key: &str) -> Option<&V> {
        let node = compressed::lookup(&self.tree, key)?;
        self.tree.value(node)
    }
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let node = compressed::lookup(&self.tree, key)?;
        self.tree.value_mut(node)
    }
    pub fn contains_key(&self, key: &str) -> bool {
        compressed::lookup(&self.tree, key).is_some()
    }
    /// Removes a key, returning its value if it was present.
    ///
    /// ```
    /// use ordtrie::CompressedTrieMap;
    ///
    /// let mut map = CompressedTrieMap::from([("test", 1), ("testing", 2)]);
    /// assert_eq!(map.remove("test"), Some(1));
    /// assert_eq!(map.get("testing"), Some(&2));
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        compressed::remove(&mut self.tree, key)
    }
    /// Finds every entry whose key starts with `prefix`, breadth-first. The
    /// prefix may end in the middle of a compressed segment.
    pub fn find(&self, prefix: &str) -> Vec<(String, &V)> {
        compressed::prefix_scan(&self.tree, prefix)
            .into_iter()
            .filter_map(|(key, node)| Some((key, self.tree.value(node)?)))
            .collect()
    }
    pub fn iter(&self) -> EntryIter<'_, V> {
        EntryIter::new(&self.tree)
    }
    pub fn keys(&self) -> KeyIter<'_, V> {
        KeyIter::new(self.iter())
    }
    pub fn values(&self) -> ValueIter<'_, V> {
        ValueIter::new(self.iter())
    }
}

macro_rules! impl_map_traits {
    ($map:ident) => {
        impl<V: Clone> Clone for $map<V> {
            fn clone(&self) -> Self {
                Self {
                    tree: self.tree.clone(),
                }
            }
        }

        impl<V: Debug> Debug for $map<V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.iter()).finish()
            }
        }

        impl<V: PartialEq> PartialEq for $map<V> {
            /// Two maps are equal if they hold the same entries in the same order.
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<V: Eq> Eq for $map<V> {}

        impl<V> Index<&str> for $map<V> {
            type Output = V;

            fn index(&self, index: &str) -> &Self::Output {
                self.get(index).expect("Invalid trie index.")
            }
        }

        impl<V> IndexMut<&str> for $map<V> {
            fn index_mut(&mut self, index: &str) -> &mut Self::Output {
                self.get_mut(index).expect("Invalid trie index.")
            }
        }

        impl<'a, V> IntoIterator for &'a $map<V> {
            type Item = (String, &'a V);
            type IntoIter = EntryIter<'a, V>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<K, V> Extend<(K, V)> for $map<V>
        where
            K: AsRef<str>,
        {
            #[inline]
            fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
                for (key, value) in iter {
                    self.insert(key.as_ref(), value);
                }
            }
        }

        impl<K, V> FromIterator<(K, V)> for $map<V>
        where
            K: AsRef<str>,
        {
            fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
                let mut map = Self::new();
                map.extend(iter);
                map
            }
        }

        impl<K, V, const N: usize> From<[(K, V); N]> for $map<V>
        where
            K: AsRef<str>,
        {
            fn from(arr: [(K, V); N]) -> Self {
                Self::from_iter(arr)
            }
        }

        #[cfg(feature = "arbitrary")]
        impl<'a, V> arbitrary::Arbitrary<'a> for $map<V>
        where
            V: arbitrary::Arbitrary<'a>,
        {
            fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
                let entries = <Vec<(String, V)> as arbitrary::Arbitrary>::arbitrary(u)?;
                Ok(entries.into_iter().filter(|(k, _)| !k.is_empty()).collect())
            }
        }
    };
}

impl_map_traits!(TrieMap);
impl_map_traits!(CompressedTrieMap);
