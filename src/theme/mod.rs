use crate::config::WidgetConfig;
use crate::error::NotesResult;
use crate::storage::KeyValueStore;

pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Label of the toggle button: it names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some(DARK_MODE_CLASS),
        }
    }
}

/// Persisted light/dark preference.
#[derive(Clone, Debug)]
pub struct ThemePreference<S: KeyValueStore> {
    is_dark: bool,
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Only the exact string `"true"` selects dark mode.
    ///
    /// An unreadable store is logged and treated as light.
    pub fn load_initial(store: S, config: &WidgetConfig) -> Self {
        let is_dark = match store.get(&config.theme_key) {
            Ok(v) => v.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("theme preference unreadable, using light mode: {e}");
                false
            }
        };

        Self {
            is_dark,
            store,
            key: config.theme_key.clone(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark)
    }

    /// Flips the flag, stores `"true"`/`"false"`, returns the new value.
    pub fn toggle(&mut self) -> NotesResult<bool> {
        self.is_dark = !self.is_dark;
        let value = if self.is_dark { "true" } else { "false" };
        self.store.set(&self.key, value)?;
        Ok(self.is_dark)
    }
}
