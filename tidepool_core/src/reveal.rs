// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered link-reveal scheduling.
//!
//! Each link starts `Pending` at mount and becomes `Visible` exactly once, no
//! earlier than its configured delay after the mount time. [`RevealSchedule`]
//! is a pure arena of per-link deadlines keyed by [`LinkId`]; it never sleeps
//! or spawns anything. A driver (on the web, one timeout per link) polls
//! [`due`](RevealSchedule::due) with the current time and applies the returned
//! [`RevealChanges`] through a presenter.
//!
//! Polling rather than callback-per-link keeps the exactly-once and
//! no-mutation-after-teardown guarantees in one testable place: a zero delay
//! fires on the first poll (the next scheduling opportunity, never
//! synchronously at mount), a stray driver callback after
//! [`teardown`](RevealSchedule::teardown) is a no-op, and two links with equal
//! deadlines may surface in either order within one poll.

use alloc::vec::Vec;

use crate::link::LinkId;
use crate::time::{Duration, HostTime};

/// Visibility of one link. Derived, ephemeral, never reverts within a mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Not yet visible; deadline pending.
    Pending,
    /// Revealed. Terminal for this mount.
    Visible,
}

/// Links that crossed their deadline in one [`RevealSchedule::due`] poll.
///
/// Links with equal deadlines appear in declared order here, but callers must
/// not rely on any cross-link ordering beyond the configured delays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealChanges {
    /// Links that just transitioned `Pending` → `Visible`.
    pub revealed: Vec<LinkId>,
}

impl RevealChanges {
    /// Returns `true` if no link transitioned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Arena of per-link reveal deadlines.
#[derive(Clone, Debug)]
pub struct RevealSchedule {
    delays: Vec<Duration>,
    deadlines: Vec<HostTime>,
    states: Vec<RevealState>,
    torn_down: bool,
}

impl RevealSchedule {
    /// Mounts a schedule for `delays.len()` links at time `now`.
    ///
    /// Link `i` (as [`LinkId`]) gets deadline `now + delays[i]`.
    #[must_use]
    pub fn mount(delays: &[Duration], now: HostTime) -> Self {
        Self {
            delays: delays.to_vec(),
            deadlines: delays.iter().map(|&d| now.saturating_add(d)).collect(),
            states: alloc::vec![RevealState::Pending; delays.len()],
            torn_down: false,
        }
    }

    /// Number of links in the schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the schedule tracks no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state of `link`, or `None` for an out-of-range handle.
    #[must_use]
    pub fn state(&self, link: LinkId) -> Option<RevealState> {
        self.states.get(link.index() as usize).copied()
    }

    /// Returns `true` once every link is visible.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|&s| s == RevealState::Visible)
    }

    /// Transitions every still-pending link whose deadline is at or before
    /// `now`, returning the links that changed.
    ///
    /// Each link transitions at most once per mount. After
    /// [`teardown`](Self::teardown) this returns empty changes and mutates
    /// nothing.
    pub fn due(&mut self, now: HostTime) -> RevealChanges {
        let mut changes = RevealChanges::default();
        if self.torn_down {
            return changes;
        }
        for (i, state) in self.states.iter_mut().enumerate() {
            if *state == RevealState::Pending && self.deadlines[i] <= now {
                *state = RevealState::Visible;
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "registries are tiny; indices fit in u32"
                )]
                changes.revealed.push(LinkId(i as u32));
            }
        }
        changes
    }

    /// Tears the schedule down: no further transitions occur.
    ///
    /// Drivers cancel their timers alongside this call; a callback that races
    /// teardown and still reaches [`due`](Self::due) observes no mutation.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    /// Returns `true` if [`teardown`](Self::teardown) has been called.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Re-mounts the schedule at `now`: every link returns to `Pending` with
    /// a fresh deadline and the torn-down flag is cleared.
    pub fn remount(&mut self, now: HostTime) {
        for (i, deadline) in self.deadlines.iter_mut().enumerate() {
            *deadline = now.saturating_add(self.delays[i]);
        }
        self.states.fill(RevealState::Pending);
        self.torn_down = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNT: HostTime = HostTime(10_000);

    fn schedule(delays_ms: &[u64]) -> RevealSchedule {
        let delays: Vec<Duration> = delays_ms.iter().map(|&d| Duration(d)).collect();
        RevealSchedule::mount(&delays, MOUNT)
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let mut s = schedule(&[100, 300]);
        assert!(s.due(MOUNT + Duration(99)).is_empty(), "99ms < 100ms delay");
        let changes = s.due(MOUNT + Duration(100));
        assert_eq!(changes.revealed, [LinkId(0)]);
        assert_eq!(s.state(LinkId(1)), Some(RevealState::Pending));
    }

    #[test]
    fn each_link_transitions_exactly_once() {
        let mut s = schedule(&[100, 300]);
        let first = s.due(MOUNT + Duration(500));
        assert_eq!(first.revealed, [LinkId(0), LinkId(1)]);
        let second = s.due(MOUNT + Duration(1_000));
        assert!(second.is_empty(), "no link may reveal twice");
        assert!(s.is_complete());
    }

    #[test]
    fn zero_delay_fires_on_first_poll_not_at_mount() {
        let s = schedule(&[0]);
        // Mounting alone performs no transition.
        assert_eq!(s.state(LinkId(0)), Some(RevealState::Pending));

        let mut s = s;
        let changes = s.due(MOUNT);
        assert_eq!(changes.revealed, [LinkId(0)]);
    }

    #[test]
    fn teardown_prevents_later_transitions() {
        let mut s = schedule(&[100]);
        s.teardown();
        let changes = s.due(MOUNT + Duration(1_000));
        assert!(changes.is_empty(), "no transition after teardown");
        assert_eq!(s.state(LinkId(0)), Some(RevealState::Pending));
        assert!(s.is_torn_down());
    }

    #[test]
    fn remount_resets_states_and_deadlines() {
        let mut s = schedule(&[100]);
        assert_eq!(s.due(MOUNT + Duration(100)).revealed, [LinkId(0)]);

        let remount_at = MOUNT + Duration(5_000);
        s.remount(remount_at);
        assert_eq!(s.state(LinkId(0)), Some(RevealState::Pending));
        assert!(s.due(remount_at + Duration(99)).is_empty(), "fresh deadline");
        assert_eq!(s.due(remount_at + Duration(100)).revealed, [LinkId(0)]);
    }

    #[test]
    fn remount_clears_teardown() {
        let mut s = schedule(&[0]);
        s.teardown();
        s.remount(MOUNT);
        assert!(!s.is_torn_down());
        assert_eq!(s.due(MOUNT).revealed, [LinkId(0)]);
    }

    #[test]
    fn equal_deadlines_surface_together() {
        let mut s = schedule(&[200, 200]);
        let changes = s.due(MOUNT + Duration(200));
        assert_eq!(changes.revealed.len(), 2, "both links cross together");
    }

    #[test]
    fn non_monotonic_delays_reveal_out_of_declared_order() {
        let mut s = schedule(&[900, 100]);
        assert_eq!(s.due(MOUNT + Duration(100)).revealed, [LinkId(1)]);
        assert_eq!(s.due(MOUNT + Duration(900)).revealed, [LinkId(0)]);
    }

    #[test]
    fn out_of_range_handle_has_no_state() {
        let s = schedule(&[100]);
        assert_eq!(s.state(LinkId(7)), None);
    }
}
