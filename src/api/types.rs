use jt_core::dict::{CandidateItem, CandidateKind};
use jt_session::{HostRequest, PressResponse, UiSnapshot};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum JtError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<jt_core::dict::DictError> for JtError {
    fn from(e: jt_core::dict::DictError) -> Self {
        match e {
            jt_core::dict::DictError::Io(e) => JtError::Io { msg: e.to_string() },
            other => JtError::InvalidData {
                msg: other.to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct JtCandidate {
    pub kind: JtCandidateKind,
    pub display: String,
    pub output: String,
    pub count: u32,
    pub pos: String,
}

#[derive(uniffi::Record)]
pub struct JtDictStats {
    pub nodes: u64,
    pub entries: u64,
}

/// Everything the host draws after a press.
#[derive(Clone, Debug, uniffi::Record)]
pub struct JtSnapshot {
    pub output_text: String,
    pub preview_text: String,
    pub candidate_list_text: String,
    pub candidates: Vec<JtCandidate>,
    pub selected: Option<u32>,
    pub ambiguous_run_text: String,
    pub key_history_text: String,
    pub page: String,
    pub button_labels: Vec<String>,
    pub shift_on: bool,
    pub caps_on: bool,
    pub speech_on: bool,
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct JtPressResponse {
    pub snapshot: JtSnapshot,
    pub requests: Vec<JtRequest>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum JtCandidateKind {
    Exact,
    Completion,
    PageLink,
    CustomCommit,
    Reserved,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum JtRequest {
    Speak { text: String },
    PersistCustomWord { word: String },
    ScrollUp,
    ScrollDown,
    OpenMenu,
    Home,
    SymbolMode { mode: u8 },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<CandidateKind> for JtCandidateKind {
    fn from(kind: CandidateKind) -> Self {
        match kind {
            CandidateKind::Exact => Self::Exact,
            CandidateKind::Completion => Self::Completion,
            CandidateKind::PageLink => Self::PageLink,
            CandidateKind::CustomCommit => Self::CustomCommit,
            CandidateKind::Reserved => Self::Reserved,
        }
    }
}

impl From<CandidateItem> for JtCandidate {
    fn from(item: CandidateItem) -> Self {
        Self {
            kind: item.kind.into(),
            display: item.display,
            output: item.output,
            count: item.count,
            pos: item.pos,
        }
    }
}

impl From<HostRequest> for JtRequest {
    fn from(request: HostRequest) -> Self {
        match request {
            HostRequest::Speak(text) => Self::Speak { text },
            HostRequest::PersistCustomWord(word) => Self::PersistCustomWord { word },
            HostRequest::ScrollUp => Self::ScrollUp,
            HostRequest::ScrollDown => Self::ScrollDown,
            HostRequest::OpenMenu => Self::OpenMenu,
            HostRequest::Home => Self::Home,
            HostRequest::SymbolMode(mode) => Self::SymbolMode { mode },
        }
    }
}

impl From<UiSnapshot> for JtSnapshot {
    fn from(snap: UiSnapshot) -> Self {
        Self {
            output_text: snap.output_text,
            preview_text: snap.preview_text,
            candidate_list_text: snap.candidate_list_text,
            candidates: snap.candidates.into_iter().map(JtCandidate::from).collect(),
            selected: snap.selected.map(|i| i as u32),
            ambiguous_run_text: snap.ambiguous_run_text,
            key_history_text: snap.key_history_text,
            page: snap.page,
            button_labels: snap.button_labels,
            shift_on: snap.shift_on,
            caps_on: snap.caps_on,
            speech_on: snap.speech_on,
        }
    }
}

impl From<PressResponse> for JtPressResponse {
    fn from(resp: PressResponse) -> Self {
        Self {
            snapshot: resp.snapshot.into(),
            requests: resp.requests.into_iter().map(JtRequest::from).collect(),
        }
    }
}
