//! UniFFI export layer.
//!
//! Each public type here maps to a generated class, record or enum in the
//! host language.

mod engine;
mod resources;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use engine::JtEngine;
pub use resources::{JtCustomWords, JtDictionary};
pub use session::JtSession;
pub use types::{
    JtCandidate, JtCandidateKind, JtDictStats, JtError, JtPressResponse, JtRequest, JtSnapshot,
};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), JtError> {
    let content = std::fs::read_to_string(&path).map_err(|e| JtError::Io {
        msg: format!("{path}: {e}"),
    })?;
    jt_core::settings::init_custom(content)
        .map_err(|e| JtError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    jt_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn pages_default_config() -> String {
    jt_core::pages::DEFAULT_PAGES_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
