use jt_core::dict::CandidateItem;

use super::types::{case_fold, HostRequest, PressResponse, UiSnapshot, KEY_HISTORY_SHOWN};
use super::InputSession;

impl InputSession {
    pub(super) fn make_response(&self, requests: Vec<HostRequest>) -> PressResponse {
        PressResponse {
            snapshot: self.project(),
            requests,
        }
    }

    /// UI projection of the current state and selection list.
    pub(super) fn project(&self) -> UiSnapshot {
        let state = &self.state;

        let mut preview_text = state.output.clone();
        if let Some(item) = self.selected_item().filter(|c| c.kind.is_committable()) {
            preview_text.push_str(&item.output);
        }

        let candidate_list_text = self
            .selection
            .iter()
            .enumerate()
            .map(|(i, item)| self.candidate_line(item, state.selection_index == Some(i)))
            .collect::<Vec<_>>()
            .join("\n");

        let ambiguous_run_text = if self.config.show_ambiguous_run {
            state
                .ambiguous_run
                .iter()
                .map(|b| b.label.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            String::new()
        };

        let button_labels = self
            .pages
            .page(&state.current_page)
            .map(|page| {
                page.buttons()
                    .iter()
                    .map(|b| case_fold(&b.label_text(), state.shift_on, state.caps_on))
                    .collect()
            })
            .unwrap_or_default();

        UiSnapshot {
            output_text: state.output.clone(),
            preview_text,
            candidate_list_text,
            candidates: self.selection.clone(),
            selected: state.selection_index,
            ambiguous_run_text,
            key_history_text: self.key_history_text(),
            page: state.current_page.clone(),
            button_labels,
            shift_on: state.shift_on,
            caps_on: state.caps_on,
            speech_on: state.speech_on,
        }
    }

    fn candidate_line(&self, item: &CandidateItem, selected: bool) -> String {
        let marker = if selected { '>' } else { ' ' };
        if self.config.show_word_frequencies {
            format!(
                "{marker} {}  {} {} {}",
                item.display,
                item.count,
                item.kind.tag(),
                item.pos
            )
            .trim_end()
            .to_string()
        } else {
            format!("{marker} {}", item.display)
        }
    }

    /// Labels of the most recent presses, oldest first. Older presses are
    /// elided as `...`. Under shift the first press of the history is
    /// upper-cased.
    fn key_history_text(&self) -> String {
        let history = &self.state.key_history;
        let complete = self.state.history_is_complete();
        let skip = history.len().saturating_sub(KEY_HISTORY_SHOWN);
        let labels = history.iter().enumerate().skip(skip).map(|(i, b)| {
            let first = i == 0 && complete;
            if self.state.caps_on || (first && self.state.shift_on) {
                b.label.to_uppercase()
            } else {
                b.label.to_lowercase()
            }
        });

        let mut parts: Vec<String> = Vec::with_capacity(KEY_HISTORY_SHOWN + 1);
        if skip > 0 || !complete {
            parts.push("...".to_string());
        }
        parts.extend(labels);
        parts.join(" ")
    }
}
