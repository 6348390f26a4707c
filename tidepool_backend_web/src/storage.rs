// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `localStorage`-backed preference store.
//!
//! Storage can be disabled by the host environment (private browsing,
//! embedder policy), and access can throw. Every failure path here is
//! silent: reads yield `None`, writes are dropped, and the caller's
//! in-memory preference carries the session.

use alloc::string::String;

use tidepool_core::backend::PreferenceStore;

/// [`PreferenceStore`] over the origin's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl LocalPreferences {
    /// Creates the store. Storage availability is probed per call, not here,
    /// so a store constructed while storage is disabled starts working if the
    /// host later allows it.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            // Quota or policy failures are dropped; memory is authoritative.
            let _ = storage.set_item(key, value);
        }
    }
}
