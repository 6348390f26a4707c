// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document metadata as an explicit output object.
//!
//! Rather than scattering direct document mutation through the page, the
//! theme controller produces a [`PageMetadata`] value and a single boundary
//! adapter (the web backend's metadata sink) applies it. That keeps every
//! decision about titles, descriptions, and theme colors testable without a
//! live document.
//!
//! The canonical-URL entry is the one piece applied from boundary context
//! instead of from this object: its value is the live document location,
//! which core has no notion of. The sink creates the entry if absent, else
//! updates it — same as the description entry.

use crate::theme::ThemePreference;

/// Document title set on load.
pub const PAGE_TITLE: &str = "AI & DEV Community - Connect • Learn • Innovate";

/// Meta description set on load.
pub const PAGE_DESCRIPTION: &str = "Join AI & DEV Community - A thriving hub for AI \
     enthusiasts and developers. Connect with like-minded professionals, learn \
     cutting-edge technologies, and innovate together.";

/// Browser-chrome theme color for the dark theme.
pub const THEME_COLOR_DARK: &str = "#0a0a0a";

/// Browser-chrome theme color for the light theme.
pub const THEME_COLOR_LIGHT: &str = "#f8fafc";

/// Everything the page asks the document to reflect.
///
/// Produced by [`page_metadata`]; applied by a
/// [`MetadataSink`](crate::backend::MetadataSink).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    /// Document title.
    pub title: &'static str,
    /// Meta description content.
    pub description: &'static str,
    /// Current preference, reflected as the root `data-theme` attribute.
    pub theme: ThemePreference,
    /// `meta[name=theme-color]` content for the current preference.
    pub theme_color: &'static str,
}

/// Builds the metadata object for the given preference.
///
/// Only the theme fields vary; title and description are fixed page copy.
/// Re-applying the result is idempotent, so callers apply the whole object on
/// every theme change.
#[must_use]
pub const fn page_metadata(theme: ThemePreference) -> PageMetadata {
    PageMetadata {
        title: PAGE_TITLE,
        description: PAGE_DESCRIPTION,
        theme,
        theme_color: match theme {
            ThemePreference::Dark => THEME_COLOR_DARK,
            ThemePreference::Light => THEME_COLOR_LIGHT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_color_tracks_preference() {
        assert_eq!(
            page_metadata(ThemePreference::Dark).theme_color,
            THEME_COLOR_DARK
        );
        assert_eq!(
            page_metadata(ThemePreference::Light).theme_color,
            THEME_COLOR_LIGHT
        );
    }

    #[test]
    fn copy_fields_do_not_vary_with_theme() {
        let dark = page_metadata(ThemePreference::Dark);
        let light = page_metadata(ThemePreference::Light);
        assert_eq!(dark.title, light.title);
        assert_eq!(dark.description, light.description);
    }
}
