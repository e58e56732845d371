// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schedule generation from age, nap count, and wake time.
//!
//! ## Algorithm
//!
//! 1) Resolve the age to an [`AgeBand`] and take the midpoint of its awake range as the
//!    awake window.
//! 2) Walk forward from the wake time. Each nap starts one awake window after the previous
//!    boundary and lasts the band's nap midpoint; the final nap of a multi-nap day uses the
//!    catnap midpoint.
//! 3) Bedtime is one more awake window after the last nap.
//! 4) If a bedtime ceiling is configured, bedtime is pulled back to it, but never closer
//!    than `min_gap` to the last nap.
//!
//! Generation never fails. Choices outside the band's recommendations are reported by
//! [`assess`](crate::advice::assess) instead.
//!
//! ```
//! use napline_schedule::{Minutes, PlannerConfig, generate};
//!
//! let s = generate(6, 3, Minutes::hm(7, 30), &PlannerConfig::default());
//! assert_eq!(s.naps.len(), 3);
//! assert_eq!(s.naps[0].start, Minutes(600));
//! assert_eq!(s.bedtime, Minutes::hm(20, 30));
//! ```

use alloc::vec::Vec;

use crate::band::{AgeBand, band_for_age};
use crate::config::PlannerConfig;
use crate::schedule::{NapBlock, Schedule};
use crate::time::Minutes;

/// Most naps a generated schedule holds.
pub const MAX_NAPS: usize = 5;

/// Shortest day a nap-free schedule gets, from wake to bedtime.
pub const MIN_NAP_FREE_DAY: i32 = 60;

/// A generated schedule together with how it was derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// The schedule.
    pub schedule: Schedule,
    /// The band the age resolved to.
    pub band: &'static AgeBand,
    /// Awake window used between sleeps.
    pub awake_window: i32,
    /// Whether the bedtime ceiling pulled bedtime earlier.
    pub bedtime_capped: bool,
}

/// Generate a schedule, returning it with its derivation details.
pub fn generate_detailed(
    age_months: u8,
    nap_count: usize,
    wake: Minutes,
    config: &PlannerConfig,
) -> Generated {
    let band = band_for_age(age_months);
    let nap_count = nap_count.min(MAX_NAPS);
    let awake_window = band.awake_window().max(config.min_gap);
    tracing::debug!(
        age_months,
        nap_count,
        awake_window,
        months = ?band.months,
        "resolved age band"
    );

    let mut cursor = wake;
    let mut naps = Vec::with_capacity(nap_count);
    for i in 0..nap_count {
        let start = cursor + awake_window;
        let length = band.nap_range(i, nap_count).midpoint().max(config.min_nap);
        let end = start + length;
        naps.push(NapBlock::new(start, end));
        cursor = end;
    }

    let natural = if naps.is_empty() {
        cursor + awake_window.max(MIN_NAP_FREE_DAY)
    } else {
        cursor + awake_window
    };
    let floor = if naps.is_empty() {
        cursor + MIN_NAP_FREE_DAY
    } else {
        cursor + config.min_gap
    };
    let bedtime = match config.bedtime_ceiling {
        Some(ceiling) if ceiling < natural => ceiling.max(floor),
        _ => natural,
    };
    let bedtime_capped = bedtime < natural;
    if bedtime_capped {
        tracing::debug!(
            natural = natural.get(),
            bedtime = bedtime.get(),
            "bedtime ceiling applied"
        );
    }

    Generated {
        schedule: Schedule::new(wake, naps, bedtime),
        band,
        awake_window,
        bedtime_capped,
    }
}

/// Generate a schedule for `age_months` with `nap_count` naps starting at `wake`.
///
/// `nap_count` above [`MAX_NAPS`] is treated as [`MAX_NAPS`].
pub fn generate(age_months: u8, nap_count: usize, wake: Minutes, config: &PlannerConfig) -> Schedule {
    generate_detailed(age_months, nap_count, wake, config).schedule
}
