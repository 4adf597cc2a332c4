#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use ordtrie::{CompressedTrie, Trie};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    let Ok(trie) = Trie::arbitrary(&mut unstructured) else {
        return;
    };
    let compressed = trie.iter().collect::<CompressedTrie>();
    assert!(trie.iter().eq(compressed.iter()));

    let Ok(word) = String::arbitrary(&mut unstructured) else {
        return;
    };
    let mut found = trie.find(&word);
    let mut found_compressed = compressed.find(&word);
    found.sort();
    found_compressed.sort();
    assert_eq!(found, found_compressed);
    assert_eq!(trie.contains(&word), compressed.contains(&word));
});
