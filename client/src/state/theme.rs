//! Light/dark display preference.
//!
//! The stored value wins; without one the system colour-scheme preference
//! decides. Every toggle is written back through a [`PreferenceStore`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Initial theme from a stored value and the system preference.
    ///
    /// Unrecognized stored values are ignored.
    #[must_use]
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if system_prefers_dark { Self::Dark } else { Self::Light })
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle: the theme a click switches to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1f319}",
            Self::Dark => "\u{2600}\u{fe0f}",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory store used when browser storage is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Current theme plus the key it persists under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    pub theme: Theme,
    pub key: &'static str,
}

impl ThemePreference {
    pub fn load(store: &impl PreferenceStore, key: &'static str, system_prefers_dark: bool) -> Self {
        let stored = store.load(key);
        Self { theme: Theme::resolve(stored.as_deref(), system_prefers_dark), key }
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        store.save(self.key, self.theme.as_str());
        self.theme
    }
}
