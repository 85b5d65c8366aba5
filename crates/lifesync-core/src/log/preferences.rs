use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ValidationError::InvalidValue {
                field: "theme".into(),
                message: format!("expected 'light' or 'dark', got '{other}'"),
            }),
        }
    }
}

/// Theme preference stored under `lifesync-theme`.
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl Preferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current theme. Unreadable or unrecognised values fall back to light.
    /// Accepts both JSON strings and bare values.
    pub fn theme(&self) -> Theme {
        let raw = match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Theme::default(),
            Err(e) => {
                tracing::warn!("failed to read theme: {e}");
                return Theme::default();
            }
        };
        serde_json::from_str::<Theme>(&raw)
            .ok()
            .or_else(|| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        let raw = format!("\"{theme}\"");
        if let Err(e) = self.store.set(THEME_KEY, &raw) {
            tracing::warn!("failed to persist theme: {e}");
        }
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_light_and_toggles() {
        let prefs = Preferences::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.toggle_theme(), Theme::Light);
    }

    #[test]
    fn reads_bare_and_json_values() {
        let store = Arc::new(MemoryStore::new());
        let prefs = Preferences::new(store.clone());
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(prefs.theme(), Theme::Dark);
        store.set(THEME_KEY, "\"dark\"").unwrap();
        assert_eq!(prefs.theme(), Theme::Dark);
        store.set(THEME_KEY, "neon").unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn theme_parses_from_cli_input() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
