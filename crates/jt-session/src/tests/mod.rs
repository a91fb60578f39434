mod pages;

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use jt_core::dict::DisambiguationTrie;
use jt_core::pages::PageGraph;
use jt_core::settings::LayoutMode;

use super::{HostRequest, InputSession, PressResponse, SessionConfig, SessionState};

/// Main-page button indices.
pub(super) mod btn {
    pub const UNDO: usize = 1;
    pub const SEL: usize = 6;
}

pub(super) fn test_config() -> SessionConfig {
    SessionConfig {
        show_word_frequencies: true,
        show_ambiguous_run: true,
        max_completions: 10,
        undo_limit: 256,
    }
}

pub(super) fn test_pages() -> Arc<PageGraph> {
    static PAGES: OnceLock<Arc<PageGraph>> = OnceLock::new();
    PAGES
        .get_or_init(|| Arc::new(PageGraph::standard(LayoutMode::Alphabetical)))
        .clone()
}

pub(super) fn make_test_trie(lines: &[&str]) -> DisambiguationTrie {
    let mut trie = DisambiguationTrie::new();
    trie.bulk_load(lines, &HashSet::new());
    trie
}

pub(super) fn make_session(lines: &[&str]) -> InputSession {
    InputSession::new(make_test_trie(lines), test_pages(), test_config())
}

pub(super) fn make_test_session() -> InputSession {
    make_session(&[
        "cat;50;NN;cat",
        "cats;100;NNS",
        "catch;10;VB",
        "act;40;VB",
        "bat;20;NN",
        "the;500;DT",
        "hello;80;UH",
    ])
}

/// Main-page button carrying the ambiguity class of `letter`.
pub(super) fn button_for(letter: char) -> usize {
    let class = jt_core::ambiguity::AmbiguityMap::standard()
        .class_of(letter)
        .unwrap_or_else(|| panic!("{letter:?} has no class"));
    [0, 2, 3, 4, 5, 7][class.index()]
}

/// Press the ambiguous buttons spelling `word` on the Main page.
pub(super) fn type_word(session: &mut InputSession, word: &str) -> PressResponse {
    let mut last = None;
    for letter in word.chars() {
        last = Some(session.handle_press(button_for(letter)));
    }
    last.expect("word must not be empty")
}

pub(super) fn outputs(resp: &PressResponse) -> Vec<&str> {
    resp.snapshot
        .candidates
        .iter()
        .map(|c| c.output.as_str())
        .collect()
}
