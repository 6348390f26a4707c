// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core logic for the tidepool link-in-bio page.
//!
//! `tidepool_core` holds everything about the page that can be reasoned about
//! without a browser: the link registry data model, the staggered reveal
//! schedule, theme preference resolution, the document-metadata output
//! object, and the decorative particle field. It is `no_std` compatible
//! (with `alloc`) and has no dependency on any web API.
//!
//! # Architecture
//!
//! The page composer wires three flows through a single boundary adapter:
//!
//! ```text
//!   registry ──► RevealSchedule::mount()
//!                     │    timers fire, driver polls
//!                     ▼
//!               RevealSchedule::due(now) ──► RevealChanges ──► RevealPresenter::apply()
//!
//!   PreferenceStore::get("theme") ──► ThemePreference ──► page_metadata()
//!                                                               │
//!   toggle ──► commit_theme() ──► PreferenceStore::set() ──► MetadataSink::apply()
//! ```
//!
//! **[`link`]** — [`LinkRecord`](link::LinkRecord) registry types with an
//! explicit [`LinkAction`](link::LinkAction) per record, plus fail-fast
//! validation of static registry data.
//!
//! **[`reveal`]** — Arena of per-link reveal deadlines with exactly-once
//! transitions and bulk teardown.
//!
//! **[`theme`]** — Persisted dark/light preference with deterministic
//! resolution of missing or corrupt values.
//!
//! **[`metadata`]** — [`PageMetadata`](metadata::PageMetadata) output object;
//! document mutation stays behind one sink.
//!
//! **[`particles`]** — Randomized particle specs for the background field.
//!
//! **[`backend`]** — The traits boundary crates implement, and
//! [`commit_theme`](backend::commit_theme), which couples persist + apply.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! lifecycle instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! **[`time`]** — Millisecond [`HostTime`](time::HostTime) and
//! [`Duration`](time::Duration).
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod link;
pub mod metadata;
pub mod particles;
pub mod reveal;
pub mod theme;
pub mod time;
pub mod trace;
