//! Button-press state machine for single-handed ambiguous text entry.
//!
//! `InputSession` owns the live editing state, the undo log and the trie it
//! disambiguates against. Each press runs the pressed button's instructions
//! and returns a [`PressResponse`] that the host renders and acts on.

pub(crate) mod types;

mod candidate_gen;
mod instructions;
mod response;
mod undo;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use jt_core::dict::{CandidateItem, DisambiguationTrie};
use jt_core::pages::{Button, PageGraph};

pub use types::{HostRequest, PressResponse, SessionConfig, SessionState, UiSnapshot};

use undo::UndoLog;

/// Live session: one state, one undo log, one trie.
pub struct InputSession {
    trie: DisambiguationTrie,
    pages: Arc<PageGraph>,
    config: SessionConfig,

    state: SessionState,
    undo: UndoLog,
    /// Selection list shown after the previous press. Select and Term act on
    /// this list, not on one computed mid-press.
    selection: Vec<CandidateItem>,
}

impl InputSession {
    pub fn new(trie: DisambiguationTrie, pages: Arc<PageGraph>, config: SessionConfig) -> Self {
        let state = SessionState::new(pages.start_page());
        let mut session = Self {
            trie,
            pages,
            config,
            state,
            undo: UndoLog::new(config.undo_limit),
            selection: Vec::new(),
        };
        session.refresh_selection();
        session
    }

    /// Process one press. Out-of-range indices leave the session untouched.
    pub fn handle_press(&mut self, index: usize) -> PressResponse {
        let _span = debug_span!("handle_press", button = index).entered();

        let Some(button) = self.button_at(index) else {
            debug!(page = %self.state.current_page, "press ignored: no such button");
            return self.make_response(Vec::new());
        };

        self.undo.push(self.state.clone());
        self.state.key_history.push(Arc::clone(&button));
        self.state.presses += 1;
        self.recompute_ambiguous_run();
        self.state.trim_key_history();

        let mut requests = Vec::new();
        for instruction in &button.instructions {
            self.execute(instruction, &mut requests);
        }

        self.refresh_selection();
        debug!(
            page = %self.state.current_page,
            run = self.state.ambiguous_run.len(),
            candidates = self.selection.len(),
            "press handled"
        );
        self.make_response(requests)
    }

    /// Put a word offered by a collaborator (e.g. a spelled-out word) at the
    /// head of the selection list. Committing it with Term saves it as a
    /// custom word. Undoable like a press.
    pub fn offer_custom_word(&mut self, word: &str) -> PressResponse {
        let word = word.trim();
        if word.is_empty() {
            return self.make_response(Vec::new());
        }
        self.undo.push(self.state.clone());
        self.state
            .transient
            .insert(0, CandidateItem::custom_commit(word));
        self.refresh_selection();
        self.make_response(Vec::new())
    }

    /// Back to the initial state with new options. Clears the undo log.
    pub fn reset(&mut self, config: SessionConfig) {
        self.config = config;
        self.undo.clear();
        self.undo.set_limit(config.undo_limit);
        self.state = SessionState::new(self.pages.start_page());
        self.refresh_selection();
    }

    /// Snapshot of the current state without pressing anything.
    pub fn snapshot(&self) -> UiSnapshot {
        self.project()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selection_list(&self) -> &[CandidateItem] {
        &self.selection
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn trie(&self) -> &DisambiguationTrie {
        &self.trie
    }

    pub fn pages(&self) -> &PageGraph {
        &self.pages
    }

    fn button_at(&self, index: usize) -> Option<Arc<Button>> {
        self.pages
            .page(&self.state.current_page)?
            .button(index)
            .cloned()
    }
}
