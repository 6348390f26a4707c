// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page lifecycle events.
//!
//! [`TraceSink`] has a default-no-op method per event, so a sink implements
//! only what it cares about. [`Tracer`] wraps an optional `&mut dyn
//! TraceSink`; with the `trace` feature **off** every method compiles to
//! nothing, with it **on** each method is a single `Option` branch before
//! dispatch. The web backend ships a console-backed sink.

use crate::link::LinkId;
use crate::theme::ThemePreference;
use crate::time::HostTime;

/// Emitted when the page mounts its reveal schedule.
#[derive(Clone, Copy, Debug)]
pub struct MountEvent {
    /// Number of links in the registry.
    pub links: u32,
    /// Host time at mount.
    pub at: HostTime,
}

/// Emitted when a link transitions to visible.
#[derive(Clone, Copy, Debug)]
pub struct RevealEvent {
    /// The revealed link.
    pub link: LinkId,
    /// Host time observed by the poll that revealed it.
    pub at: HostTime,
}

/// Emitted after a theme commit completes.
#[derive(Clone, Copy, Debug)]
pub struct ThemeEvent {
    /// The committed preference.
    pub pref: ThemePreference,
}

/// Receives trace events from the page lifecycle.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called when the reveal schedule mounts.
    fn on_mount(&mut self, e: &MountEvent) {
        _ = e;
    }

    /// Called for each link reveal.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called after a theme commit.
    fn on_theme(&mut self, e: &ThemeEvent) {
        _ = e;
    }

    /// Called at teardown, after timers are cancelled.
    fn on_teardown(&mut self) {}
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`MountEvent`].
    #[inline]
    pub fn mount(&mut self, e: &MountEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mount(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ThemeEvent`].
    #[inline]
    pub fn theme(&mut self, e: &ThemeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_theme(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits the teardown event.
    #[inline]
    pub fn teardown(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_teardown();
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct CountingSink {
        reveals: Vec<LinkId>,
        teardowns: u32,
    }

    impl TraceSink for CountingSink {
        fn on_reveal(&mut self, e: &RevealEvent) {
            self.reveals.push(e.link);
        }

        fn on_teardown(&mut self) {
            self.teardowns += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let mut sink = CountingSink::default();
        let mut tracer = Tracer::new(&mut sink);
        tracer.reveal(&RevealEvent {
            link: LinkId(2),
            at: HostTime(5),
        });
        tracer.teardown();
        assert_eq!(sink.reveals, [LinkId(2)]);
        assert_eq!(sink.teardowns, 1);
    }

    #[test]
    fn none_tracer_discards_events() {
        let mut tracer = Tracer::none();
        tracer.mount(&MountEvent {
            links: 7,
            at: HostTime(0),
        });
        tracer.teardown();
    }
}
