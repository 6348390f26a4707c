// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-console trace sink.

use alloc::format;

use wasm_bindgen::JsValue;

use tidepool_core::trace::{MountEvent, RevealEvent, ThemeEvent, TraceSink};

/// A [`TraceSink`] that logs lifecycle events to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTrace;

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

impl TraceSink for ConsoleTrace {
    fn on_mount(&mut self, e: &MountEvent) {
        log(&format!(
            "tidepool: mounted {} links at {}ms",
            e.links,
            e.at.millis()
        ));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        log(&format!(
            "tidepool: link {} revealed at {}ms",
            e.link.index(),
            e.at.millis()
        ));
    }

    fn on_theme(&mut self, e: &ThemeEvent) {
        log(&format!("tidepool: theme committed to {}", e.pref));
    }

    fn on_teardown(&mut self) {
        log("tidepool: torn down");
    }
}
