//! Insert, lookup and prefix search benchmarks for both trie layouts.
//!
//! The word lists are generated from a seeded random source over a small
//! alphabet, so that words share plenty of prefixes and every run measures
//! the same input.

use std::collections::HashSet;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ordtrie::{CompressedTrie, Trie};
use rand::{Rng, SeedableRng, rngs::StdRng};

const ALPHABET: &[u8] = b"abcdefghijklmnop";

fn generate_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut words = HashSet::with_capacity(count);
    while words.len() < count {
        let len = rng.random_range(2..=12);
        let word = (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect::<String>();
        words.insert(word);
    }
    words.into_iter().collect()
}

fn get_big_text() -> Vec<String> {
    generate_words(20_000, 1984)
}

fn get_small_text() -> Vec<String> {
    generate_words(500, 1633)
}

fn get_random_text() -> Vec<String> {
    generate_words(5_000, 7)
}

fn trie_insert_big(b: &mut Criterion) {
    let words = get_big_text();
    b.bench_function("trie insert - big", |b| {
        b.iter(|| black_box(&words).iter().collect::<Trie>())
    });
    b.bench_function("compressed insert - big", |b| {
        b.iter(|| black_box(&words).iter().collect::<CompressedTrie>())
    });
}

fn trie_insert_small(b: &mut Criterion) {
    let words = get_small_text();
    b.bench_function("trie insert - small", |b| {
        b.iter(|| black_box(&words).iter().collect::<Trie>())
    });
    b.bench_function("compressed insert - small", |b| {
        b.iter(|| black_box(&words).iter().collect::<CompressedTrie>())
    });
}

fn trie_remove_big(b: &mut Criterion) {
    let words = get_big_text();
    let trie = words.iter().collect::<Trie>();
    let compressed = words.iter().collect::<CompressedTrie>();
    b.bench_function("trie remove - big", |b| {
        b.iter(|| {
            let mut trie = trie.clone();
            for word in &words {
                trie.remove(black_box(word));
            }
            trie
        })
    });
    b.bench_function("compressed remove - big", |b| {
        b.iter(|| {
            let mut compressed = compressed.clone();
            for word in &words {
                compressed.remove(black_box(word));
            }
            compressed
        })
    });
}

fn trie_find(b: &mut Criterion) {
    let words = get_big_text();
    let trie = words.iter().collect::<Trie>();
    let compressed = words.iter().collect::<CompressedTrie>();
    let prefixes = ALPHABET
        .iter()
        .flat_map(|a| ALPHABET.iter().map(move |b| format!("{}{}", *a as char, *b as char)))
        .collect::<Vec<_>>();

    b.bench_function("trie find - two letters", |b| {
        b.iter(|| prefixes.iter().map(|p| trie.find(black_box(p)).len()).sum::<usize>())
    });
    b.bench_function("compressed find - two letters", |b| {
        b.iter(|| prefixes.iter().map(|p| compressed.find(black_box(p)).len()).sum::<usize>())
    });
}

/// Replaces every n-th random word by a stored one, so that roughly
/// `hit_percent` of the lookups succeed.
fn generate_samples(hits: &[String], hit_percent: i32) -> Vec<String> {
    let roulette_inc = hit_percent as f64 / 100.;
    let mut roulette = 0.;

    let mut result = get_random_text();
    let mut hit_iter = hits.iter().cycle();

    for w in result.iter_mut() {
        roulette += roulette_inc;
        if roulette >= 1. {
            roulette -= 1.;
            if let Some(hit) = hit_iter.next() {
                w.clone_from(hit);
            }
        }
    }

    result
}

macro_rules! bench_percents_impl {
    ( [ $( ($size:expr, $percent:expr ), )+ ] ) => {$(
        paste::paste! {
            fn [< trie_contains_ $size _ $percent >] (b: &mut Criterion) {
                let words = [< get_ $size _text >]();
                let trie = words.iter().collect::<Trie>();
                let compressed = words.iter().collect::<CompressedTrie>();
                let samples = generate_samples(&words, $percent);
                b.bench_function(
                    concat!(
                        "trie contains - ",
                        stringify!($size),
                        " - ",
                        stringify!($percent),
                        "%"
                    ), |b| {
                    b.iter(|| {
                        samples.iter()
                            .filter(|w| trie.contains(black_box(w)))
                            .count()
                    })
                });
                b.bench_function(
                    concat!(
                        "compressed contains - ",
                        stringify!($size),
                        " - ",
                        stringify!($percent),
                        "%"
                    ), |b| {
                    b.iter(|| {
                        samples.iter()
                            .filter(|w| compressed.contains(black_box(w)))
                            .count()
                    })
                });
            }
        }
    )+};

    (  _groups [ $( ($size:expr, $percent:expr ), )+ ] ) => {
        paste::paste! {
            criterion_group!(
                contains_benches,
                $(
                    [< trie_contains_ $size _ $percent >],
                )+
            );
        }
    };
}

macro_rules! cartesian_impl {
    ($out:tt [] $b:tt $init_b:tt) => {
        bench_percents_impl!($out);
        bench_percents_impl!(_groups $out);
    };
    ($out:tt [$a:expr, $($at:tt)*] [] $init_b:tt) => {
        cartesian_impl!($out [$($at)*] $init_b $init_b);
    };
    ([$($out:tt)*] [$a:expr, $($at:tt)*] [$b:expr, $($bt:tt)*] $init_b:tt) => {
        cartesian_impl!([$($out)* ($a, $b),] [$a, $($at)*] [$($bt)*] $init_b);
    };
}

macro_rules! bench_contains_percents {
    ([$($size:tt)*], [$($percent:tt)*]) => {
        cartesian_impl!([] [$($size)*,] [$($percent)*,] [$($percent)*,]);
    };
}

bench_contains_percents!([big, small], [100, 50, 10, 1]);

criterion_group!(insert_benches, trie_insert_big, trie_insert_small);
criterion_group!(remove_benches, trie_remove_big);
criterion_group!(find_benches, trie_find);

criterion_main!(contains_benches, insert_benches, remove_benches, find_benches);
