// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web boundary for tidepool.
//!
//! This crate owns every browser API the page touches:
//!
//! - [`TimeoutArena`]: per-link `setTimeout` handles with bulk cancel
//! - [`LocalPreferences`]: `localStorage`-backed preference store
//! - [`DomMetadataSink`]: document title / metadata / theme attribute
//! - [`DomRevealPresenter`]: visibility classes on link elements
//! - [`activate`]: link activation (new-tab navigation or mail composition)
//! - [`ConsoleTrace`]: console-backed trace sink

#![no_std]

extern crate alloc;

mod console;
mod document;
mod storage;
mod timer;

pub use console::ConsoleTrace;
pub use document::{DomMetadataSink, DomRevealPresenter, VISIBLE_CLASS};
pub use storage::LocalPreferences;
pub use timer::TimeoutArena;

use alloc::format;

use wasm_bindgen::prelude::*;

use tidepool_core::link::LinkAction;
use tidepool_core::time::HostTime;

// Direct global binding instead of `web_sys::Window::performance()` — avoids
// fetching (and unwrapping) the Window/Performance objects on every read.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Returns the current host time from `performance.now()`, truncated to
/// millisecond ticks.
#[must_use]
pub fn now() -> HostTime {
    let ms = performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns a small positive f64; ms fits in u64"
    )]
    HostTime(ms as u64)
}

/// Performs a link's activation action.
///
/// [`Navigate`](LinkAction::Navigate) opens the URL in a new, unrelated
/// browsing context; [`Email`](LinkAction::Email) points the current context
/// at a mail composition. Browser-native navigation failures (blocked popup,
/// no mail handler) are outside this page's control and ignored.
pub fn activate(action: &LinkAction<'_>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match action {
        LinkAction::Navigate { url } => {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
        LinkAction::Email { address } => {
            let _ = window.location().set_href(&format!("mailto:{address}"));
        }
    }
}
