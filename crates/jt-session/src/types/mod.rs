mod snapshot;
pub use snapshot::*;

use std::sync::Arc;

use jt_core::dict::CandidateItem;
use jt_core::pages::Button;
use jt_core::settings::Settings;

/// Presses shown in the key-history line before older ones are elided.
pub(super) const KEY_HISTORY_SHOWN: usize = 20;

/// Presses kept in [`SessionState::key_history`]. The live ambiguous run is
/// always kept whole, even when longer.
pub(super) const KEY_HISTORY_KEPT: usize = 64;

/// Session options taken from [`Settings`] at construction and on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub show_word_frequencies: bool,
    pub show_ambiguous_run: bool,
    pub max_completions: usize,
    pub undo_limit: usize,
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            show_word_frequencies: settings.display.show_word_frequencies,
            show_ambiguous_run: settings.display.show_ambiguous_run,
            max_completions: settings.engine.max_completions,
            undo_limit: settings.engine.undo_limit,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_settings(jt_core::settings::settings())
    }
}

/// Everything one press may change. Cloned whole into the undo log.
///
/// Buttons are shared with the page graph, so a clone copies pointers, not
/// button definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_page: String,
    pub selection_index: Option<usize>,
    /// Most recent presses, oldest first. Capped at 64 entries plus whatever
    /// the ambiguous run needs.
    pub key_history: Vec<Arc<Button>>,
    /// Presses recorded since the session started, including those trimmed
    /// from `key_history`.
    pub presses: usize,
    /// Candidates injected by instructions (page links, offered custom words),
    /// shown ahead of dictionary results.
    pub transient: Vec<CandidateItem>,
    pub ambiguous_run: Vec<Arc<Button>>,
    pub output: String,
    pub shift_on: bool,
    pub caps_on: bool,
    pub speech_on: bool,
}

impl SessionState {
    pub fn new(start_page: &str) -> Self {
        Self {
            current_page: start_page.to_string(),
            selection_index: None,
            key_history: Vec::new(),
            presses: 0,
            transient: Vec::new(),
            ambiguous_run: Vec::new(),
            output: String::new(),
            shift_on: true,
            caps_on: false,
            speech_on: true,
        }
    }

    pub(super) fn clear_selection(&mut self) {
        self.selection_index = None;
        self.transient.clear();
    }

    /// Whether `key_history` still starts at the first press.
    pub(super) fn history_is_complete(&self) -> bool {
        self.presses == self.key_history.len()
    }

    /// Drop the oldest presses beyond the cap. Keeps the ambiguous run, the
    /// select presses after it and the press that ended it.
    pub(super) fn trim_key_history(&mut self) {
        let trailing_selects = self
            .key_history
            .iter()
            .rev()
            .take_while(|b| b.is_select())
            .count();
        let keep = KEY_HISTORY_KEPT.max(trailing_selects + self.ambiguous_run.len() + 1);
        if self.key_history.len() > keep {
            let excess = self.key_history.len() - keep;
            self.key_history.drain(..excess);
        }
    }
}

/// Work the host must carry out after a press. Never awaited by the session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum HostRequest {
    Speak(String),
    /// Append this word to the persisted custom-word list.
    PersistCustomWord(String),
    ScrollUp,
    ScrollDown,
    OpenMenu,
    Home,
    SymbolMode(u8),
}

/// Result of one press: the new UI snapshot plus host requests, in the
/// order the instructions raised them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PressResponse {
    pub snapshot: UiSnapshot,
    pub requests: Vec<HostRequest>,
}

/// Case transform applied to candidates: caps upper-cases everything, shift
/// upper-cases the first character, otherwise the text is left as loaded.
pub(super) fn case_transform(text: &str, shift_on: bool, caps_on: bool) -> String {
    if caps_on {
        text.to_uppercase()
    } else if shift_on {
        capitalize_first(text)
    } else {
        text.to_string()
    }
}

/// Case rule for literal text and button labels: like [`case_transform`],
/// except that with neither flag set the text is lower-cased.
pub(super) fn case_fold(text: &str, shift_on: bool, caps_on: bool) -> String {
    if caps_on || shift_on {
        case_transform(text, shift_on, caps_on)
    } else {
        text.to_lowercase()
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
