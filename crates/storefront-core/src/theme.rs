//! # Theme Preference
//!
//! Light/dark mode state. This module only holds the value; writing it to
//! disk is the application layer's job and happens after the mutation here
//! has already taken effect.
//!
//! ## Startup Restore
//! ```text
//! persisted "dark"   ──► Dark
//! persisted "light"  ──► Light
//! persisted "Dark"   ──► (unchanged, stays default)
//! nothing / error    ──► (unchanged, stays default)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Key under which the mode is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Display mode of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The persisted/serialized spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub const fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Strict parse of a persisted value. Only the exact stored spellings
    /// are recognized.
    pub fn from_persisted(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parse for user input (`"Dark"`, `" light "`).
impl std::str::FromStr for ThemeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(CoreError::UnknownThemeMode(s.to_string())),
        }
    }
}

// =============================================================================
// Theme Preference
// =============================================================================

/// The in-memory theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    /// Starts at the default (`Light`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode and returns the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Applies a value read from storage at startup.
    ///
    /// Returns `true` when the value was recognized and applied.
    pub fn restore(&mut self, persisted: Option<&str>) -> bool {
        match persisted.and_then(ThemeMode::from_persisted) {
            Some(mode) => {
                self.mode = mode;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toggle_set() {
        let mut theme = ThemePreference::new();
        assert_eq!(theme.current(), ThemeMode::Light);

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.current(), ThemeMode::Dark);

        theme.set(ThemeMode::Light);
        assert_eq!(theme.current(), ThemeMode::Light);
    }

    #[test]
    fn test_restore_recognized_values() {
        let mut theme = ThemePreference::new();
        assert!(theme.restore(Some("dark")));
        assert_eq!(theme.current(), ThemeMode::Dark);
    }

    #[test]
    fn test_restore_ignores_unknown_or_missing() {
        let mut theme = ThemePreference::new();
        assert!(!theme.restore(Some("Dark")));
        assert!(!theme.restore(Some("solarized")));
        assert!(!theme.restore(None));
        assert_eq!(theme.current(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_parsing() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("blue".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_serde_spelling() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), r#""dark""#);
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }
}
