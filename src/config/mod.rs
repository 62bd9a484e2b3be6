use crate::storage::{DARK_MODE_KEY, NOTES_KEY};
use serde::{Deserialize, Serialize};

/// Host-page configuration.
///
/// Read from `window.ENV` when the page defines it; every field falls back to
/// its default independently.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Storage key holding the JSON array of notes.
    pub notes_key: String,
    /// Storage key holding `"true"` / `"false"`.
    pub theme_key: String,
    /// Start with an empty board instead of failing when the stored notes
    /// cannot be parsed.
    pub recover_malformed_store: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            notes_key: NOTES_KEY.to_string(),
            theme_key: DARK_MODE_KEY.to_string(),
            recover_malformed_store: true,
        }
    }
}

impl WidgetConfig {
    /// Reads `window.ENV.NOTES_KEY`, `window.ENV.THEME_KEY` and
    /// `window.ENV.RECOVER_MALFORMED_STORE`.
    pub fn from_window() -> Self {
        let mut config = Self::default();

        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return config;
        };
        if env.is_undefined() || !env.is_object() {
            return config;
        }

        let read = |name: &str| js_sys::Reflect::get(&env, &name.into()).ok();

        if let Some(key) = read("NOTES_KEY").and_then(|v| v.as_string()) {
            config = config.with_notes_key(&key);
        }
        if let Some(key) = read("THEME_KEY").and_then(|v| v.as_string()) {
            config = config.with_theme_key(&key);
        }
        if let Some(flag) = read("RECOVER_MALFORMED_STORE").and_then(|v| v.as_bool()) {
            config.recover_malformed_store = flag;
        }

        config
    }

    /// Blank keys are ignored.
    pub fn with_notes_key(mut self, key: &str) -> Self {
        if !key.trim().is_empty() {
            self.notes_key = key.trim().to_string();
        }
        self
    }

    pub fn with_theme_key(mut self, key: &str) -> Self {
        if !key.trim().is_empty() {
            self.theme_key = key.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let c = WidgetConfig::default();
        assert_eq!(c.notes_key, "notes");
        assert_eq!(c.theme_key, "isDarkMode");
        assert!(c.recover_malformed_store);
    }

    #[test]
    fn test_with_keys_ignores_blank() {
        let c = WidgetConfig::default()
            .with_notes_key("  ")
            .with_theme_key(" board_theme ");
        assert_eq!(c.notes_key, "notes");
        assert_eq!(c.theme_key, "board_theme");
    }

    #[test]
    fn test_config_deserialize_contract() {
        let json = r#"{"notes_key": "n", "theme_key": "t", "recover_malformed_store": false}"#;
        let c: WidgetConfig = serde_json::from_str(json).expect("config should parse");
        assert_eq!(c.notes_key, "n");
        assert!(!c.recover_malformed_store);
    }
}
