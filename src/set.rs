use std::fmt::{self, Debug};

use crate::{
    compressed,
    error::{TrieError, validate_word},
    iter::WordIter,
    standard,
    tree::Tree,
};

/// A set of strings stored in a standard trie, one character per node.
///
/// Words are iterated in insertion order, forwards or (with [Iterator::rev])
/// backwards. Re-inserting a stored word does not move it.
#[derive(Clone)]
pub struct Trie {
    /// The node pool together with the insertion order.
    tree: Tree<char, ()>,
}

/// A set of strings stored in a radix-compressed trie, where every node
/// holds a run of characters and structural nodes always branch.
///
/// It behaves exactly like [Trie], only the internal layout differs.
#[derive(Clone)]
pub struct CompressedTrie {
    tree: Tree<String, ()>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates a new [Trie] with no words. This will create a [Trie]
    /// with a capacity of zero using the [Trie::with_capacity] method.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Creates a new [Trie] with room for a certain amount of nodes.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let trie = Trie::with_capacity(20);
    /// assert!(trie.is_empty());
    /// assert!(trie.capacity() >= 20);
    /// ```
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            tree: Tree::with_capacity(nodes),
        }
    }
    /// The amount of nodes the [Trie] can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
    /// Returns the amount of words within the [Trie].
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello");
    /// trie.insert("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }
    /// Returns true if the [Trie] is empty,
    /// else it will return false.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Will clear the [Trie] data structure.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let mut trie = Trie::from(["hello"]);
    /// assert!(!trie.is_empty());
    ///
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// assert!(!trie.contains("hello"));
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }
    /// Adds a word to the [Trie], returning true if it was not
    /// stored before.
    ///
    /// # Panics
    /// If the word is empty. See [Trie::try_insert] for a non-panicking
    /// version.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("hello"));
    /// assert!(!trie.insert("hello"));
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        match self.try_insert(word) {
            Ok(inserted) => inserted,
            Err(error) => panic!("{error}"),
        }
    }
    /// Adds a word to the [Trie], returning true if it was not
    /// stored before.
    ///
    /// # Errors
    /// If the word is empty.
    ///
    /// ```
    /// use ordtrie::{Trie, TrieError};
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.try_insert("hello"), Ok(true));
    /// assert_eq!(trie.try_insert(""), Err(TrieError::EmptyWord { argument: "word" }));
    /// ```
    pub fn try_insert(&mut self, word: &str) -> Result<bool, TrieError> {
        validate_word(word, "word")?;
        Ok(standard::insert(&mut self.tree, word, ()).is_none())
    }
    /// Checks if the [Trie] contains a word. A word that was only stored
    /// as the prefix of another word is not contained.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let trie = Trie::from(["gone"]);
    /// assert!(trie.contains("gone"));
    /// assert!(!trie.contains("go"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        standard::lookup(&self.tree, word).is_some()
    }
    /// Removes a word from the [Trie], returning true if
    /// it was present within the data structure.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let mut trie = Trie::from(["go", "gone"]);
    ///
    /// assert!(trie.remove("go"));
    /// assert!(!trie.remove("go"));
    /// assert!(trie.contains("gone"));
    /// ```
    pub fn remove(&mut self, word: &str) -> bool {
        standard::remove(&mut self.tree, word).is_some()
    }
    /// Finds every word starting with `prefix`, the prefix itself included
    /// if it is a stored word. The words come in breadth-first order, that
    /// is, shorter words before longer ones, not alphabetically.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let trie = Trie::from(["cart", "car", "cat", "dog"]);
    ///
    /// assert_eq!(trie.find("ca"), ["car", "cat", "cart"]);
    /// assert_eq!(trie.find("cart"), ["cart"]);
    /// assert!(trie.find("x").is_empty());
    /// ```
    pub fn find(&self, prefix: &str) -> Vec<String> {
        standard::prefix_scan(&self.tree, prefix)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }
    /// Returns an iterator over the words of the [Trie]
    /// in insertion order.
    ///
    /// ```
    /// use ordtrie::Trie;
    ///
    /// let trie = Trie::from(["hello", "bye"]);
    ///
    /// let mut words = trie.iter();
    /// assert_eq!(words.next().unwrap(), "hello");
    /// assert_eq!(words.next().unwrap(), "bye");
    /// assert!(words.next().is_none());
    ///
    /// let reversed = trie.iter().rev().collect::<Vec<_>>();
    /// assert_eq!(reversed, ["bye", "hello"]);
    /// ```
    pub fn iter(&self) -> WordIter<'_> {
        WordIter::new(&self.tree)
    }
}

impl Default for CompressedTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressedTrie {
    /// Creates a new, empty [CompressedTrie].
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Creates a new [CompressedTrie] with room for a certain amount of nodes.
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
    /// Adds a word, returning true if it was not stored before.
    ///
    /// # Panics
    /// If the word is empty.
    ///
    /// ```
    /// use ordtrie::CompressedTrie;
    ///
    /// let mut trie = CompressedTrie::new();
    /// assert!(trie.insert("romane"));
    /// assert!(trie.insert("romanus"));
    /// assert!(!trie.insert("romane"));
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        match self.try_insert(word) {
            Ok(inserted) => inserted,
            Err(error) => panic!("{error}"),
        }
    }
    /// Adds a word, returning true if it was not stored before.
    ///
    /// # Errors
    /// If the word is empty.
    pub fn try_insert(&mut self, word: &str) -> Result<bool, TrieError> {
        validate_word(word, "word")?;
        Ok(compressed::insert(&mut self.tree, word, ()).is_none())
    }
    pub fn contains(&self, word: &str) -> bool {
        compressed::lookup(&self.tree, word).is_some()
    }
    /// Removes a word, returning true if it was present. Structural nodes
    /// left with a single child are merged into it.
    pub fn remove(&mut self, word: &str) -> bool {
        compressed::remove(&mut self.tree, word).is_some()
    }
    /// Finds every word starting with `prefix`, breadth-first. The prefix
    /// may end in the middle of a compressed segment.
    ///
    /// ```
    /// use ordtrie::CompressedTrie;
    ///
    /// let trie = CompressedTrie::from(["test", "testing", "go", "gone"]);
    ///
    /// assert_eq!(trie.find("g"), ["go", "gone"]);
    /// assert_eq!(trie.find("testi"), ["testing"]);
    /// ```
    pub fn find(&self, prefix: &str) -> Vec<String> {
        compressed::prefix_scan(&self.tree, prefix)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }
    /// Returns an iterator over the words in insertion order.
    pub fn iter(&self) -> WordIter<'_> {
        WordIter::new(&self.tree)
    }
}

macro_rules! impl_set_traits {
    ($set:ident) => {
        impl Debug for $set {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl PartialEq for $set {
            /// Two sets are equal if they hold the same words in the same order.
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl Eq for $set {}

        impl<'a> IntoIterator for &'a $set {
            type Item = String;
            type IntoIter = WordIter<'a>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<W> Extend<W> for $set
        where
            W: AsRef<str>,
        {
            /// Extends the set with words. Panics on the empty word,
            /// just like `insert`.
            #[inline]
            fn extend<T: IntoIterator<Item = W>>(&mut self, iter: T) {
                for word in iter {
                    self.insert(word.as_ref());
                }
            }
        }

        impl<W> FromIterator<W> for $set
        where
            W: AsRef<str>,
        {
            fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
                let mut set = Self::new();
                set.extend(iter);
                set
            }
        }

        impl<W, const N: usize> From<[W; N]> for $set
        where
            W: AsRef<str>,
        {
            fn from(arr: [W; N]) -> Self {
                Self::from_iter(arr)
            }
        }

        #[cfg(feature = "arbitrary")]
        impl<'a> arbitrary::Arbitrary<'a> for $set {
            /// Builds a set out of an arbitrary list of words, skipping
            /// the empty ones.
            fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
                let words = <Vec<String> as arbitrary::Arbitrary>::arbitrary(u)?;
                Ok(words.into_iter().filter(|w| !w.is_empty()).collect())
            }
        }
    };
}

impl_set_traits!(Trie);
impl_set_traits!(CompressedTrie);

#[cfg(test)]
mod tests {
    use super::{CompressedTrie, Trie};

    const ALL_WORDS: [&str; 16] = [
        "test",
        "testing",
        "gone",
        "bed",
        "bear",
        "get",
        "apple",
        "go",
        "romane",
        "romanus",
        "romulus",
        "rom",
        "rubens",
        "ruber",
        "rubicon",
        "rubicundus",
    ];

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    pub fn insert_words_and_clear() {
        let mut trie = Trie::new();
        let mut compressed = CompressedTrie::new();

        for (i, word) in ALL_WORDS.iter().enumerate() {
            assert!(!trie.contains(word));
            assert!(trie.insert(word));
            assert!(compressed.insert(word));
            assert!(trie.contains(word));
            assert!(compressed.contains(word));
            assert_eq!(trie.len(), i + 1);
            assert_eq!(compressed.len(), i + 1);
        }

        assert_eq!(trie.iter().collect::<Vec<_>>(), ALL_WORDS);
        assert_eq!(compressed.iter().collect::<Vec<_>>(), ALL_WORDS);

        for word in ALL_WORDS {
            assert!(!trie.insert(word));
            assert!(!compressed.insert(word));
        }
        assert_eq!(trie.len(), ALL_WORDS.len());
        assert_eq!(trie.iter().collect::<Vec<_>>(), ALL_WORDS);

        trie.clear();
        compressed.clear();
        assert!(trie.is_empty());
        assert!(compressed.is_empty());
        assert_eq!(trie.iter().count(), 0);
        assert!(!compressed.contains("test"));
    }

    #[test]
    pub fn insert_and_delete_words() {
        let mut trie = Trie::from(ALL_WORDS);
        let mut compressed = CompressedTrie::from(ALL_WORDS);

        // Valid prefix, invalid word.
        assert!(!trie.remove("gon"));
        assert!(!compressed.remove("gon"));
        // Invalid prefix.
        assert!(!trie.remove("invalid"));
        assert!(!compressed.remove("invalid"));
        assert!(!trie.remove(""));

        for (i, word) in ALL_WORDS.iter().enumerate() {
            assert!(trie.remove(word));
            assert!(compressed.remove(word));
            assert!(!trie.contains(word));
            assert!(!compressed.contains(word));
            assert_eq!(trie.len(), ALL_WORDS.len() - i - 1);
            assert_eq!(trie.iter().collect::<Vec<_>>(), ALL_WORDS[i + 1..]);
            assert_eq!(compressed.iter().collect::<Vec<_>>(), ALL_WORDS[i + 1..]);
        }
    }

    #[test]
    pub fn layouts_find_the_same_words() {
        let trie = Trie::from(ALL_WORDS);
        let compressed = CompressedTrie::from(ALL_WORDS);

        for word in ALL_WORDS {
            for end in 0..=word.len() {
                let prefix = &word[..end];
                assert_eq!(
                    sorted(trie.find(prefix)),
                    sorted(compressed.find(prefix)),
                    "Prefix {prefix:?}."
                );
            }
        }
        assert!(trie.find("").is_empty());
        assert!(compressed.find("").is_empty());
    }

    #[test]
    pub fn reversed_is_the_mirror_image() {
        let trie = Trie::from(ALL_WORDS);
        let mut reversed = trie.iter().rev().collect::<Vec<_>>();
        reversed.reverse();
        assert_eq!(reversed, ALL_WORDS);
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    pub fn insert_empty_panics() {
        Trie::new().insert("");
    }

    #[test]
    pub fn try_insert_empty() {
        let mut trie = CompressedTrie::new();
        assert!(trie.try_insert("").is_err());
        assert!(trie.is_empty());
    }

    #[test]
    pub fn debug_and_eq() {
        let a = Trie::from(["b", "a"]);
        let b = Trie::from(["a", "b"]);
        assert_eq!(format!("{a:?}"), "{\"b\", \"a\"}");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());

        let words = (&a).into_iter().collect::<Vec<_>>();
        assert_eq!(words, ["b", "a"]);
    }

    #[test]
    pub fn unicode_words() {
        let mut trie = CompressedTrie::new();
        trie.insert("héllo");
        trie.insert("hélp");
        trie.insert("日本語");
        trie.insert("日本");
        assert!(trie.contains("héllo"));
        assert!(!trie.contains("hé"));
        assert_eq!(trie.find("hé"), ["héllo", "hélp"]);
        assert_eq!(trie.find("日"), ["日本", "日本語"]);
        assert!(trie.remove("日本"));
        assert!(trie.contains("日本語"));
    }

    #[test]
    pub fn test_arbitrary_against_model() {
        arbtest::arbtest(|u| {
            let mut trie = Trie::new();
            let mut compressed = CompressedTrie::new();
            let mut model = Vec::<String>::new();

            for _ in 0..u.int_in_range(0..=48)? {
                let mut word = String::new();
                for _ in 0..u.int_in_range(1..=4)? {
                    word.push(*u.choose(&['x', 'y', 'ü'])?);
                }

                if u.arbitrary::<bool>()? {
                    let fresh = !model.contains(&word);
                    assert_eq!(trie.insert(&word), fresh);
                    assert_eq!(compressed.insert(&word), fresh);
                    if fresh {
                        model.push(word);
                    }
                } else {
                    let present = model.contains(&word);
                    assert_eq!(trie.remove(&word), present);
                    assert_eq!(compressed.remove(&word), present);
                    model.retain(|w| *w != word);
                }
            }

            assert_eq!(trie.len(), model.len());
            assert_eq!(trie.iter().collect::<Vec<_>>(), model);
            assert_eq!(compressed.iter().collect::<Vec<_>>(), model);
            for word in &model {
                assert_eq!(sorted(trie.find(word)), sorted(compressed.find(word)));
            }
            Ok(())
        });
    }
}
