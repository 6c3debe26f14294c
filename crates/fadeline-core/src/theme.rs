//! Light/dark theme preference.

use tracing::debug;

use crate::storage::KeyValueStore;

/// Storage key of the preference.
pub const THEME_KEY: &str = "app:theme";

/// Site colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class set on the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Persists the preference as a JSON bool (`true` = dark).
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored preference; missing or unreadable values give the default.
    pub fn load(&self) -> Theme {
        match self.store.get_item(THEME_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => Theme::from(dark),
                Err(err) => {
                    debug!(raw, error = %err, "ignoring unreadable theme preference");
                    Theme::default()
                }
            },
            Ok(None) => Theme::default(),
            Err(err) => {
                debug!(error = %err, "theme preference unavailable");
                Theme::default()
            }
        }
    }

    /// Persist the preference. Failures are logged and ignored.
    pub fn save(&self, theme: Theme) {
        let raw = if theme.is_dark() { "true" } else { "false" };
        if let Err(err) = self.store.set_item(THEME_KEY, raw) {
            debug!(error = %err, "failed to persist theme preference");
        }
    }
}
