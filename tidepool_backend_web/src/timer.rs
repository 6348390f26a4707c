// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout`-backed timer arena.
//!
//! [`TimeoutArena`] owns one pending browser timeout per link, keyed by
//! [`LinkId`]. Teardown is a single bulk cancel — every handle is cleared and
//! every closure dropped, so no callback acts on a disposed page.
//!
//! [`LinkId`]: tidepool_core::link::LinkId

use alloc::boxed::Box;
use alloc::vec::Vec;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use tidepool_core::link::LinkId;
use tidepool_core::time::Duration;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object for every timer operation.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

type TimeoutClosure = Closure<dyn FnMut()>;

/// One pending timeout: the browser handle plus the closure keeping the
/// callback alive on the JS side.
struct Entry {
    id: i32,
    _closure: TimeoutClosure,
}

/// Arena of pending browser timeouts keyed by [`LinkId`].
///
/// Scheduling for a link that already has a pending timeout replaces it (the
/// prior timeout is cancelled). Dropping the arena cancels everything still
/// pending. Cancelling a timeout whose callback has already fired is a no-op
/// on the browser side; the arena does not track firing, only scheduling.
///
/// [`LinkId`]: tidepool_core::link::LinkId
#[derive(Default)]
pub struct TimeoutArena {
    entries: Vec<Option<Entry>>,
}

impl TimeoutArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `callback` to run once, `delay` after now, keyed by `link`.
    ///
    /// Delays beyond `i32::MAX` milliseconds are clamped; the browser API
    /// takes a signed 32-bit delay.
    pub fn schedule(&mut self, link: LinkId, delay: Duration, callback: impl FnMut() + 'static) {
        self.cancel(link);

        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let delay_ms = i32::try_from(delay.millis()).unwrap_or(i32::MAX);
        let id = set_timeout(closure.as_ref().unchecked_ref(), delay_ms);

        let slot = link.index() as usize;
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(Entry {
            id,
            _closure: closure,
        });
    }

    /// Cancels the pending timeout for `link`, if any. Idempotent.
    pub fn cancel(&mut self, link: LinkId) {
        if let Some(slot) = self.entries.get_mut(link.index() as usize)
            && let Some(entry) = slot.take()
        {
            clear_timeout(entry.id);
        }
    }

    /// Cancels every pending timeout and drops every closure.
    pub fn cancel_all(&mut self) {
        for slot in &mut self.entries {
            if let Some(entry) = slot.take() {
                clear_timeout(entry.id);
            }
        }
    }

    /// Number of links with a scheduled (not yet cancelled) timeout entry.
    #[must_use]
    pub fn scheduled(&self) -> usize {
        self.entries.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Drop for TimeoutArena {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl core::fmt::Debug for TimeoutArena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimeoutArena")
            .field("scheduled", &self.scheduled())
            .finish()
    }
}
