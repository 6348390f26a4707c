// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme preference resolution.
//!
//! The page has one persisted setting: a binary dark/light preference stored
//! under [`THEME_KEY`]. Resolution is deterministic — anything other than the
//! recognized literals (absent key, corrupt value, storage unavailable)
//! resolves to [`Dark`](ThemePreference::Dark).
//!
//! [`toggle`](ThemePreference::toggle) is pure; it neither persists nor
//! applies. Call sites go through
//! [`commit_theme`](crate::backend::commit_theme) so stored, applied, and
//! in-memory preference never diverge.

use core::fmt;

/// Storage key for the persisted preference.
pub const THEME_KEY: &str = "theme";

/// Persisted binary choice of visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    /// Dark theme. The default when nothing valid is stored.
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl ThemePreference {
    /// Resolves a stored value, defaulting to [`Dark`](Self::Dark) when the
    /// value is absent or unrecognized.
    ///
    /// Only the exact literals `"dark"` and `"light"` are recognized.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Returns the opposite preference.
    #[inline]
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the persisted literal for this preference.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_defaults_to_dark() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
    }

    #[test]
    fn recognized_literals_round_trip() {
        for pref in [ThemePreference::Dark, ThemePreference::Light] {
            assert_eq!(ThemePreference::from_stored(Some(pref.as_str())), pref);
        }
    }

    #[test]
    fn corrupted_value_defaults_to_dark() {
        assert_eq!(
            ThemePreference::from_stored(Some("blue")),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::from_stored(Some("Light")),
            ThemePreference::Dark,
            "literals are case-sensitive"
        );
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(ThemePreference::Dark.toggle(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggle(), ThemePreference::Dark);
        for pref in [ThemePreference::Dark, ThemePreference::Light] {
            assert_eq!(pref.toggle().toggle(), pref);
        }
    }
}
