//! Disambiguation dictionary.
//!
//! `DisambiguationTrie` maps ambiguity-class sequences to word entries and
//! answers ranked lookups (exact matches followed by frequency-ordered
//! completions). Word lists are loaded from `;`-delimited text files and may be
//! compiled into a binary snapshot for faster startup.

mod loader;
#[cfg(test)]
mod tests;
mod trie;
mod trie_io;

pub use loader::{load_dictionary, read_reject_set, read_word_list, DictionarySources};
pub use trie::{DisambiguationTrie, LoadStats, CUSTOM_WORD_COUNT, CUSTOM_WORD_POS};

use std::io;

use serde::{Deserialize, Serialize};

/// Unified error type for dictionary text loading and snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected JTDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (stored {stored:08x}, computed {computed:08x})")]
    Checksum { stored: u32, computed: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}

/// One dictionary word stored at a trie node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub output: String,
    pub display: Option<String>,
    /// Relative frequency, used only for ordering.
    pub count: u32,
    pub pos: Option<String>,
}

impl WordEntry {
    pub fn new(output: impl Into<String>, count: u32) -> Self {
        Self {
            output: output.into(),
            display: None,
            count,
            pos: None,
        }
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

/// Where a selection-list item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CandidateKind {
    /// Key path equals the typed run.
    Exact,
    /// Reachable strictly below the typed run.
    Completion,
    /// Navigation to a sub-page.
    PageLink,
    /// Word offered by a collaborator; saved as a custom word on commit.
    CustomCommit,
    /// Accepted by Term but never produced.
    Reserved,
}

impl CandidateKind {
    /// Single-letter tag shown in the debug candidate list.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Exact => "X",
            Self::Completion => "L",
            Self::PageLink => "P",
            Self::CustomCommit => "2",
            Self::Reserved => "E",
        }
    }

    /// Whether Term may commit an item of this kind.
    pub fn is_committable(self) -> bool {
        !matches!(self, Self::PageLink)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateItem {
    pub kind: CandidateKind,
    pub display: String,
    pub output: String,
    pub count: u32,
    pub pos: String,
}

impl CandidateItem {
    pub(crate) fn from_entry(kind: CandidateKind, entry: &WordEntry) -> Self {
        Self {
            kind,
            display: entry.display.clone().unwrap_or_else(|| entry.output.clone()),
            output: entry.output.clone(),
            count: entry.count,
            pos: entry.pos.clone().unwrap_or_default(),
        }
    }

    pub fn page_link(page: &str) -> Self {
        Self {
            kind: CandidateKind::PageLink,
            display: page.to_string(),
            output: page.to_string(),
            count: 0,
            pos: String::new(),
        }
    }

    pub fn custom_commit(word: &str) -> Self {
        Self {
            kind: CandidateKind::CustomCommit,
            display: word.to_string(),
            output: word.to_string(),
            count: CUSTOM_WORD_COUNT,
            pos: CUSTOM_WORD_POS.to_string(),
        }
    }
}

/// Order a raw lookup result for presentation: exact matches before
/// completions, each group by descending count. The sort is stable, so equal
/// counts keep their trie order.
pub fn rank_candidates(items: &mut [CandidateItem]) {
    items.sort_by_key(|item| {
        let group = match item.kind {
            CandidateKind::Exact => 0,
            CandidateKind::Completion => 1,
            _ => 2,
        };
        (group, std::cmp::Reverse(item.count))
    });
}
