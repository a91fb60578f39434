//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub display: DisplaySettings,
    pub layout: LayoutSettings,
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// Show count, kind and part of speech next to each candidate.
    pub show_word_frequencies: bool,
    /// Show the labels of the buttons in the current ambiguous run.
    pub show_ambiguous_run: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    pub mode: LayoutMode,
}

/// Letter order used for derived ambiguous-button labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Alphabetical,
    Optimized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub max_completions: usize,
    pub undo_limit: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(engine.max_completions);
    // Undo needs the snapshot of this press plus the one before it.
    if s.engine.undo_limit < 2 {
        return Err(SettingsError::InvalidValue {
            field: "engine.undo_limit".to_string(),
            reason: "must be at least 2".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(!s.display.show_word_frequencies);
        assert!(!s.display.show_ambiguous_run);
        assert_eq!(s.layout.mode, LayoutMode::Alphabetical);
        assert_eq!(s.engine.max_completions, 10);
        assert_eq!(s.engine.undo_limit, 256);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[display]
show_word_frequencies = true
show_ambiguous_run = true

[layout]
mode = "optimized"

[engine]
max_completions = 4
undo_limit = 16
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.display.show_word_frequencies);
        assert_eq!(s.layout.mode, LayoutMode::Optimized);
        assert_eq!(s.engine.max_completions, 4);
    }

    #[test]
    fn error_zero_completions() {
        let toml = DEFAULT_SETTINGS_TOML.replace("max_completions = 10", "max_completions = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "engine.max_completions")
        );
    }

    #[test]
    fn error_tiny_undo_limit() {
        let toml = DEFAULT_SETTINGS_TOML.replace("undo_limit = 256", "undo_limit = 1");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_unknown_layout() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"alphabetical\"", "\"qwerty\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
