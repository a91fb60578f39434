//! JustType engine bindings.
//!
//! The engine itself lives in `jt-core` (dictionary, page graph, settings) and
//! `jt-session` (press state machine). This crate exports them to host
//! applications through UniFFI.

uniffi::setup_scaffolding!();

mod api;
pub mod trace_init;

pub use api::{
    JtCandidate, JtCandidateKind, JtCustomWords, JtDictStats, JtDictionary, JtEngine, JtError,
    JtPressResponse, JtRequest, JtSession, JtSnapshot,
};
