use std::sync::Arc;

use jt_core::ambiguity::AmbiguityClass;
use jt_core::dict::{CandidateItem, CandidateKind};
use jt_core::pages::Button;

use super::types::case_transform;
use super::InputSession;

/// Trailing run of ambiguous presses, oldest first. Select presses at the very
/// end are skipped; anything else ends the run.
pub(super) fn ambiguous_run(history: &[Arc<Button>]) -> Vec<Arc<Button>> {
    let mut run = Vec::new();
    for button in history.iter().rev() {
        if button.is_ambig() {
            run.push(Arc::clone(button));
        } else if button.is_select() && run.is_empty() {
            continue;
        } else {
            break;
        }
    }
    run.reverse();
    run
}

/// Completion counts are shown at a tenth of their stored value. Applied
/// after ranking, so it never changes order.
pub(super) fn decay_completions(items: &mut [CandidateItem]) {
    for item in items
        .iter_mut()
        .filter(|c| c.kind == CandidateKind::Completion)
    {
        item.count /= 10;
    }
}

impl InputSession {
    pub(super) fn recompute_ambiguous_run(&mut self) {
        self.state.ambiguous_run = ambiguous_run(&self.state.key_history);
    }

    fn run_classes(&self) -> Vec<AmbiguityClass> {
        self.state
            .ambiguous_run
            .iter()
            .filter_map(|b| b.ambig_class())
            .collect()
    }

    /// Rebuild the live selection list: transient items, then the ranked
    /// lookup for the ambiguous run, all case-transformed.
    pub(super) fn refresh_selection(&mut self) {
        let mut list = self.state.transient.clone();

        let keys = self.run_classes();
        if !keys.is_empty() {
            let mut found = self.trie.ranked_lookup(&keys, self.config.max_completions);
            decay_completions(&mut found);
            list.extend(found);
        }

        let (shift, caps) = (self.state.shift_on, self.state.caps_on);
        for item in &mut list {
            item.display = case_transform(&item.display, shift, caps);
            // A page link's output names its target page.
            if item.kind != CandidateKind::PageLink {
                item.output = case_transform(&item.output, shift, caps);
            }
        }
        self.selection = list;
    }

    /// Item under the cursor in the list shown after the previous press.
    /// A cursor past the end counts as nothing selected.
    pub(super) fn selected_item(&self) -> Option<&CandidateItem> {
        self.state
            .selection_index
            .and_then(|i| self.selection.get(i))
    }
}
