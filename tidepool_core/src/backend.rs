// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary contract for platform integrations.
//!
//! Core owns the data model and sequencing; the boundary crate owns every
//! browser type. Three seams cross between them:
//!
//! - **Preference store** — best-effort key-value persistence
//!   ([`PreferenceStore`]). On the web this is `localStorage`; when the host
//!   disables storage, reads yield nothing and writes vanish silently, and
//!   the in-memory preference is the session's source of truth.
//!
//! - **Metadata sink** — applies a [`PageMetadata`] object to the document
//!   ([`MetadataSink`]). The single place document-level state mutates.
//!
//! - **Reveal presenter** — applies [`RevealChanges`] to the presentation
//!   tree ([`RevealPresenter`]).
//!
//! Timer setup is backend-specific and not abstracted by a trait; the setup
//! and lifecycle of a browser timeout has no meaningful host-side analogue.
//! Test drivers poll [`RevealSchedule::due`](crate::reveal::RevealSchedule::due)
//! directly.

use crate::metadata::{PageMetadata, page_metadata};
use crate::reveal::RevealChanges;
use crate::theme::{THEME_KEY, ThemePreference};

/// Best-effort key-value persistence scoped to the page's origin.
///
/// Implementations must not surface storage failures: a failed read is
/// `None`, a failed write is a no-op.
pub trait PreferenceStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<alloc::string::String>;
    /// Writes `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str);
}

/// Applies a metadata object to the document.
pub trait MetadataSink {
    /// Reflects `metadata` in the document: title, description, theme-color,
    /// and the root theme attribute. Idempotent.
    fn apply(&mut self, metadata: &PageMetadata);
}

/// Applies reveal transitions to the presentation tree.
pub trait RevealPresenter {
    /// Marks every link in `changes` visible.
    fn apply(&mut self, changes: &RevealChanges);
}

/// Loads the persisted preference, defaulting to dark.
#[must_use]
pub fn load_theme(store: &dyn PreferenceStore) -> ThemePreference {
    ThemePreference::from_stored(store.get(THEME_KEY).as_deref())
}

/// Persists and applies `pref` in one step.
///
/// The stored value, the document state, and the caller's in-memory
/// preference must never diverge after a toggle; routing every change through
/// here is what holds that invariant. The write happens before the apply so a
/// reload mid-commit sees the new preference.
pub fn commit_theme(
    pref: ThemePreference,
    store: &mut dyn PreferenceStore,
    sink: &mut dyn MetadataSink,
) {
    store.set(THEME_KEY, pref.as_str());
    sink.apply(&page_metadata(pref));
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::*;
    use crate::metadata::{PageMetadata, THEME_COLOR_LIGHT};

    /// In-memory store; `None` state models disabled storage.
    struct MemoryStore(Option<Vec<(String, String)>>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.as_ref()?.iter().find_map(|(k, v)| {
                if k.as_str() == key { Some(v.clone()) } else { None }
            })
        }

        fn set(&mut self, key: &str, value: &str) {
            let Some(entries) = self.0.as_mut() else {
                return;
            };
            if let Some(entry) = entries.iter_mut().find(|(k, _)| k.as_str() == key) {
                entry.1 = value.to_string();
            } else {
                entries.push((key.to_string(), value.to_string()));
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink(Vec<PageMetadata>);

    impl MetadataSink for RecordingSink {
        fn apply(&mut self, metadata: &PageMetadata) {
            self.0.push(*metadata);
        }
    }

    #[test]
    fn load_defaults_to_dark_on_empty_store() {
        let store = MemoryStore(Some(Vec::new()));
        assert_eq!(load_theme(&store), ThemePreference::Dark);
    }

    #[test]
    fn load_reads_stored_light() {
        let mut store = MemoryStore(Some(Vec::new()));
        store.set(THEME_KEY, "light");
        assert_eq!(load_theme(&store), ThemePreference::Light);
    }

    #[test]
    fn load_defaults_to_dark_on_corrupt_value() {
        let mut store = MemoryStore(Some(Vec::new()));
        store.set(THEME_KEY, "blue");
        assert_eq!(load_theme(&store), ThemePreference::Dark);
    }

    #[test]
    fn commit_keeps_store_and_document_consistent() {
        let mut store = MemoryStore(Some(Vec::new()));
        let mut sink = RecordingSink::default();

        let pref = load_theme(&store).toggle();
        commit_theme(pref, &mut store, &mut sink);

        assert_eq!(pref, ThemePreference::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        let applied = sink.0.last().expect("sink saw the commit");
        assert_eq!(applied.theme, pref);
        assert_eq!(applied.theme_color, THEME_COLOR_LIGHT);
    }

    #[test]
    fn double_toggle_commit_restores_original_state() {
        let mut store = MemoryStore(Some(Vec::new()));
        let mut sink = RecordingSink::default();

        let original = load_theme(&store);
        commit_theme(original.toggle(), &mut store, &mut sink);
        commit_theme(original.toggle().toggle(), &mut store, &mut sink);

        assert_eq!(load_theme(&store), original);
        assert_eq!(sink.0.last().map(|m| m.theme), Some(original));
    }

    #[test]
    fn disabled_storage_is_silent_and_memory_wins() {
        let mut store = MemoryStore(None);
        let mut sink = RecordingSink::default();

        assert_eq!(load_theme(&store), ThemePreference::Dark);
        let pref = ThemePreference::Light;
        commit_theme(pref, &mut store, &mut sink);

        // The write vanished, the apply still happened.
        assert_eq!(store.get(THEME_KEY), None);
        assert_eq!(sink.0.last().map(|m| m.theme), Some(pref));
    }
}
