use std::collections::HashSet;

use super::*;
use crate::dict::{CandidateKind, DisambiguationTrie};

#[test]
fn register_and_list() {
    let mut words = CustomWords::new();
    assert!(words.register("Zelda"));
    assert!(words.register("Kirby"));
    assert_eq!(words.list(), ["Zelda".to_string(), "Kirby".to_string()]);
}

#[test]
fn register_duplicate() {
    let mut words = CustomWords::new();
    assert!(words.register("Zelda"));
    assert!(!words.register("Zelda"));
    assert!(!words.register("  Zelda "));
    assert_eq!(words.len(), 1);
}

#[test]
fn register_blank() {
    let mut words = CustomWords::new();
    assert!(!words.register("   "));
    assert!(words.is_empty());
}

#[test]
fn unregister() {
    let mut words = CustomWords::new();
    words.register("Zelda");
    words.register("Kirby");
    assert!(words.unregister("Zelda"));
    assert!(!words.unregister("Zelda"));
    assert_eq!(words.list(), ["Kirby".to_string()]);
}

#[test]
fn from_lines_takes_first_field() {
    let words = CustomWords::from_lines(["Zelda;1000;NNP", "Kirby", "", "Zelda;5"]);
    assert_eq!(words.list(), ["Zelda".to_string(), "Kirby".to_string()]);
}

#[test]
fn lines_load_as_custom_entries() {
    let mut words = CustomWords::new();
    words.register("Zelda");

    let mut trie = DisambiguationTrie::new();
    let stats = trie.bulk_load(words.to_lines(), &HashSet::new());
    assert_eq!(stats.inserted, 1);

    let keys = trie.ambiguity_map().translate("zelda").unwrap();
    let items = trie.lookup(&keys, 10);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, CandidateKind::Exact);
    assert_eq!(items[0].output, "Zelda");
    assert_eq!(items[0].count, CUSTOM_WORD_COUNT);
    assert_eq!(items[0].pos, CUSTOM_WORD_POS);
}

#[test]
fn save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("customWords.txt");

    let mut words = CustomWords::new();
    words.register("Zelda");
    words.register("Kirby");
    words.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let loaded = CustomWords::open(&path).unwrap();
    assert_eq!(loaded.list(), words.list());
}

#[test]
fn open_missing_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let words = CustomWords::open(&dir.path().join("absent.txt")).unwrap();
    assert!(words.is_empty());
}
