use jt_core::dict::CandidateItem;
use serde::Serialize;

/// Everything a renderer needs after a press. Derived purely from the session
/// state and the live selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiSnapshot {
    /// Committed text.
    pub output_text: String,
    /// Committed text with the selected candidate previewed at the end.
    pub preview_text: String,
    /// One line per candidate: cursor marker and display text, plus count,
    /// kind tag and part of speech when word frequencies are shown.
    pub candidate_list_text: String,
    pub candidates: Vec<CandidateItem>,
    pub selected: Option<usize>,
    /// Labels of the buttons in the ambiguous run. Empty unless enabled.
    pub ambiguous_run_text: String,
    pub key_history_text: String,
    pub page: String,
    pub button_labels: Vec<String>,
    pub shift_on: bool,
    pub caps_on: bool,
    pub speech_on: bool,
}
