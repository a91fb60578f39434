use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jt_core::ambiguity::AmbiguityMap;
use jt_core::dict::DisambiguationTrie;

const WORDS: &[(&str, u32)] = &[
    ("the", 5000),
    ("they", 900),
    ("then", 800),
    ("there", 1200),
    ("these", 700),
    ("this", 2500),
    ("that", 3000),
    ("to", 4800),
    ("today", 400),
    ("together", 300),
    ("cat", 50),
    ("cats", 40),
    ("catch", 25),
    ("catalog", 60),
    ("can", 1500),
    ("cannot", 200),
    ("candle", 30),
    ("house", 600),
    ("hello", 350),
    ("help", 500),
    ("helping", 120),
    ("world", 650),
    ("would", 1800),
    ("word", 400),
    ("words", 250),
    ("keyboard", 80),
    ("button", 90),
    ("buttons", 40),
];

fn bench_trie() -> DisambiguationTrie {
    let lines: Vec<String> = WORDS
        .iter()
        .map(|(word, count)| format!("{word};{count};NN"))
        .collect();
    let mut trie = DisambiguationTrie::new();
    trie.bulk_load(&lines, &HashSet::new());
    trie
}

static INPUTS: &[(&str, &str)] = &[("short", "t"), ("medium", "the"), ("long", "together")];

fn bench_lookup(c: &mut Criterion) {
    let trie = bench_trie();
    let map = AmbiguityMap::standard();
    let mut group = c.benchmark_group("trie/lookup");
    for &(label, word) in INPUTS {
        let keys = map.translate(word).unwrap();
        group.bench_with_input(BenchmarkId::new(label, keys.len()), &keys, |b, keys| {
            b.iter(|| trie.ranked_lookup(keys, 10));
        });
    }
    group.finish();
}

fn bench_bulk_load(c: &mut Criterion) {
    let lines: Vec<String> = WORDS
        .iter()
        .map(|(word, count)| format!("{word};{count};NN"))
        .collect();
    c.bench_function("trie/bulk_load", |b| {
        b.iter(|| {
            let mut trie = DisambiguationTrie::new();
            trie.bulk_load(&lines, &HashSet::new())
        });
    });
}

criterion_group!(benches, bench_lookup, bench_bulk_load);
criterion_main!(benches);
