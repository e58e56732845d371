// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advisory range checks against the age band.
//!
//! Advisories are labels for the UI. They never reject a schedule: generation and
//! dragging proceed no matter what [`assess`] reports.

use alloc::vec::Vec;

use crate::band::{AgeBand, RangeStatus, band_for_age};
use crate::config::PlannerConfig;
use crate::schedule::Schedule;

bitflags::bitflags! {
    /// Summary of everything outside the recommended ranges.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Advisories: u8 {
        /// At least one awake window is shorter than recommended.
        const AWAKE_SHORT = 0b0000_0001;
        /// At least one awake window is longer than recommended.
        const AWAKE_LONG  = 0b0000_0010;
        /// At least one nap is shorter than recommended.
        const NAP_SHORT   = 0b0000_0100;
        /// At least one nap is longer than recommended.
        const NAP_LONG    = 0b0000_1000;
        /// The nap count is outside the band's recommendation.
        const NAP_COUNT   = 0b0001_0000;
        /// Bedtime falls after the configured ceiling.
        const LATE_BEDTIME = 0b0010_0000;
    }
}

/// Per-item range statuses plus the flag summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    /// Band the age resolved to.
    pub band: &'static AgeBand,
    /// One entry per awake window, in [`Schedule::awake_windows`] order.
    pub awake: Vec<RangeStatus>,
    /// One entry per nap.
    pub naps: Vec<RangeStatus>,
    /// Combined flags.
    pub flags: Advisories,
}

impl Assessment {
    /// Whether everything is within the recommended ranges.
    pub fn is_clear(&self) -> bool {
        self.flags.is_empty()
    }
}

fn flag_for(status: RangeStatus, short: Advisories, long: Advisories) -> Advisories {
    match status {
        RangeStatus::Below => short,
        RangeStatus::Within => Advisories::empty(),
        RangeStatus::Above => long,
    }
}

/// Compare a schedule against the band for `age_months`.
pub fn assess(schedule: &Schedule, age_months: u8, config: &PlannerConfig) -> Assessment {
    let band = band_for_age(age_months);
    let mut flags = Advisories::empty();

    let awake: Vec<_> = schedule
        .awake_windows()
        .into_iter()
        .map(|w| band.awake.status(w))
        .collect();
    for &s in &awake {
        flags |= flag_for(s, Advisories::AWAKE_SHORT, Advisories::AWAKE_LONG);
    }

    let count = schedule.naps.len();
    let naps: Vec<_> = schedule
        .naps
        .iter()
        .enumerate()
        .map(|(i, n)| band.nap_range(i, count).status(n.duration()))
        .collect();
    for &s in &naps {
        flags |= flag_for(s, Advisories::NAP_SHORT, Advisories::NAP_LONG);
    }

    if !band.recommends(count) {
        flags |= Advisories::NAP_COUNT;
    }
    if config
        .bedtime_ceiling
        .is_some_and(|ceiling| schedule.bedtime > ceiling)
    {
        flags |= Advisories::LATE_BEDTIME;
    }

    Assessment {
        band,
        awake,
        naps,
        flags,
    }
}
