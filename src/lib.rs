//! Prefix tries over strings that remember the order in which words were
//! inserted.
//!
//! Two layouts are provided, each as a set and as a map:
//! * [Trie] and [TrieMap] store one character per node;
//! * [CompressedTrie] and [CompressedTrieMap] store runs of characters and
//!   keep the tree minimal after every insert and remove.
//!
//! Both layouts answer every query identically. Iteration always follows
//! insertion order, while [Trie::find] walks the matching subtree
//! breadth-first.
//!
//! ```
//! use ordtrie::{CompressedTrie, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("cart");
//! trie.insert("car");
//! trie.insert("cat");
//!
//! assert!(trie.contains("car"));
//! assert!(!trie.contains("ca"));
//! assert_eq!(trie.iter().collect::<Vec<_>>(), ["cart", "car", "cat"]);
//! assert_eq!(trie.find("ca"), ["car", "cat", "cart"]);
//!
//! let compressed = trie.iter().collect::<CompressedTrie>();
//! assert_eq!(compressed.find("car"), ["car", "cart"]);
//! ```

mod compressed;
mod error;
mod iter;
mod map;
mod node;
mod order;
mod set;
mod slots;
mod standard;
mod tree;

pub use crate::error::TrieError;
pub use crate::iter::{EntryIter, KeyIter, ValueIter, WordIter};
pub use crate::map::{CompressedTrieMap, TrieMap};
pub use crate::set::{CompressedTrie, Trie};
