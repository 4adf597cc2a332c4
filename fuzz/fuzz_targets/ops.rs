#![no_main]

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use ordtrie::{CompressedTrieMap, TrieMap};
use std::collections::HashMap;

#[derive(Arbitrary, Debug)]
pub enum Ops {
    Insert(String, u8),
    Delete(String),
    Get(String),
    Find(String),
    Clear,
}

fn sorted(mut entries: Vec<(String, &u8)>) -> Vec<(String, u8)> {
    entries.sort();
    entries.into_iter().map(|(k, v)| (k, *v)).collect()
}

fuzz_target!(|data: Vec<Ops>| {
    let mut trie = TrieMap::<u8>::new();
    let mut compressed = CompressedTrieMap::<u8>::new();

    let mut twin = HashMap::<String, u8>::new();
    let mut order = Vec::<String>::new();

    for datum in data {
        match datum {
            Ops::Insert(key, value) => {
                if key.is_empty() {
                    assert!(trie.try_insert(&key, value).is_err());
                    assert!(compressed.try_insert(&key, value).is_err());
                    continue;
                }
                let old = twin.insert(key.clone(), value);
                if old.is_none() {
                    order.push(key.clone());
                }
                assert_eq!(trie.insert(&key, value), old);
                assert_eq!(compressed.insert(&key, value), old);
            }
            Ops::Delete(key) => {
                let old = twin.remove(&key);
                order.retain(|k| *k != key);
                assert_eq!(trie.remove(&key), old);
                assert_eq!(compressed.remove(&key), old);
            }
            Ops::Get(key) => {
                assert_eq!(trie.get(&key), twin.get(&key));
                assert_eq!(compressed.get(&key), twin.get(&key));
            }
            Ops::Find(prefix) => {
                let mut expected = twin
                    .iter()
                    .filter(|(k, _)| !prefix.is_empty() && k.starts_with(&prefix))
                    .map(|(k, v)| (k.clone(), *v))
                    .collect::<Vec<_>>();
                expected.sort();
                assert_eq!(sorted(trie.find(&prefix)), expected);
                assert_eq!(sorted(compressed.find(&prefix)), expected);
            }
            Ops::Clear => {
                trie.clear();
                compressed.clear();
                twin.clear();
                order.clear();
            }
        }

        assert_eq!(trie.len(), twin.len());
        assert_eq!(compressed.len(), twin.len());
    }

    assert!(trie.keys().eq(order.iter().cloned()));
    assert!(compressed.keys().rev().eq(order.iter().rev().cloned()));
});
