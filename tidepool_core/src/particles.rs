// Copyright 2026 the Tidepool Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative particle field generation.
//!
//! Pure aesthetics: a fixed count of elements with randomized position and
//! animation timing. The only invariant worth holding is the count —
//! randomness is neither seeded nor reproducible. The caller supplies the
//! uniform source (`js_sys::Math::random` on the web, a counter in tests), so
//! this stays off the boundary.

use alloc::vec::Vec;

/// Number of particles the page renders.
pub const PARTICLE_COUNT: usize = 30;

/// Upper bound for a particle's animation delay, in seconds.
const MAX_DELAY_S: f64 = 8.0;

/// Animation duration range, in seconds.
const MIN_DURATION_S: f64 = 6.0;
const DURATION_SPREAD_S: f64 = 8.0;

/// Position and animation timing for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position as a percentage of the container (`0..100`).
    pub left_pct: f64,
    /// Vertical position as a percentage of the container (`0..100`).
    pub top_pct: f64,
    /// Animation delay in seconds (`0..8`).
    pub delay_s: f64,
    /// Animation duration in seconds (`6..14`).
    pub duration_s: f64,
}

/// Generates `count` particle specs from a uniform `[0, 1)` sampler.
#[must_use]
pub fn particle_field(count: usize, sample: &mut impl FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            left_pct: sample() * 100.0,
            top_pct: sample() * 100.0,
            delay_s: sample() * MAX_DELAY_S,
            duration_s: MIN_DURATION_S + sample() * DURATION_SPREAD_S,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic sampler cycling through `[0, 1)`.
    fn cycling_sampler() -> impl FnMut() -> f64 {
        let mut i = 0_u32;
        move || {
            i = (i + 7) % 100;
            f64::from(i) / 100.0
        }
    }

    #[test]
    fn count_is_exact_regardless_of_sampler() {
        let mut low = || 0.0;
        let mut high = || 0.999_999;
        assert_eq!(particle_field(PARTICLE_COUNT, &mut low).len(), 30);
        assert_eq!(particle_field(PARTICLE_COUNT, &mut high).len(), 30);
        assert_eq!(
            particle_field(PARTICLE_COUNT, &mut cycling_sampler()).len(),
            30
        );
        assert!(particle_field(0, &mut low).is_empty());
    }

    #[test]
    fn specs_stay_within_configured_ranges() {
        for spec in particle_field(PARTICLE_COUNT, &mut cycling_sampler()) {
            assert!((0.0..100.0).contains(&spec.left_pct), "left percentage");
            assert!((0.0..100.0).contains(&spec.top_pct), "top percentage");
            assert!((0.0..MAX_DELAY_S).contains(&spec.delay_s), "delay");
            assert!(
                (MIN_DURATION_S..MIN_DURATION_S + DURATION_SPREAD_S).contains(&spec.duration_s),
                "duration"
            );
        }
    }
}
