
use std::collections::HashSet;

use crate::ambiguity::{AmbiguityClass, AmbiguityMap};
use crate::dict::DisambiguationTrie;

pub(super) fn keys(word: &str) -> Vec<AmbiguityClass> {
    AmbiguityMap::standard()
        .translate(word)
        .unwrap_or_else(|| panic!("{word} is untranslatable"))
}

pub(super) fn classes(indices: &[u8]) -> Vec<AmbiguityClass> {
    indices
        .iter()
        .map(|&i| AmbiguityClass::new(i).unwrap())
        .collect()
}

pub(super) fn sample_trie() -> DisambiguationTrie {
    let lines = [
        "cat;50;NN;cat",
        "cap;30;NN",
        "bat;20;NN",
        "cats;40;NNS",
        "catch;25;VB",
        "catalog;60;NN",
        "cup;10;NN",
        "act;15;VB",
    ];
    let mut trie = DisambiguationTrie::new();
    trie.bulk_load(lines, &HashSet::new());
    trie
}
