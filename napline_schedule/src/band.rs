// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Age bands: recommended awake-window and nap lengths by age in months.
//!
//! The table is contiguous from month 0 and its last band is open-ended, so every
//! age resolves to exactly one band through [`band_for_age`].

use core::ops::RangeInclusive;

/// An inclusive range of minutes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MinuteRange {
    /// Shortest recommended length.
    pub min: i32,
    /// Longest recommended length.
    pub max: i32,
}

impl MinuteRange {
    /// Create a range from its bounds.
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range, rounded half up.
    pub const fn midpoint(self) -> i32 {
        (self.min + self.max + 1).div_euclid(2)
    }

    /// Where `minutes` falls relative to this range.
    pub const fn status(self, minutes: i32) -> RangeStatus {
        if minutes < self.min {
            RangeStatus::Below
        } else if minutes > self.max {
            RangeStatus::Above
        } else {
            RangeStatus::Within
        }
    }
}

/// Position of a measured length relative to its recommended range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RangeStatus {
    /// Shorter than recommended.
    Below,
    /// Inside the recommended range.
    Within,
    /// Longer than recommended.
    Above,
}

/// Recommended sleep parameters for a contiguous range of ages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgeBand {
    /// Ages covered, in whole months. The last band also covers every older age.
    pub months: RangeInclusive<u8>,
    /// Time awake between two sleeps.
    pub awake: MinuteRange,
    /// Length of a regular nap.
    pub nap: MinuteRange,
    /// Length of the shorter final nap of the day.
    pub catnap: MinuteRange,
    /// Recommended number of naps per day.
    pub naps: RangeInclusive<u8>,
}

impl AgeBand {
    /// Representative awake window: the midpoint of [`AgeBand::awake`].
    pub const fn awake_window(&self) -> i32 {
        self.awake.midpoint()
    }

    /// Recommended range for nap `index` of a day with `count` naps.
    ///
    /// The final nap of a multi-nap day is a catnap.
    pub fn nap_range(&self, index: usize, count: usize) -> MinuteRange {
        if count > 1 && index + 1 == count {
            self.catnap
        } else {
            self.nap
        }
    }

    /// Whether `count` naps is within the recommended range for this band.
    pub fn recommends(&self, count: usize) -> bool {
        u8::try_from(count).is_ok_and(|c| self.naps.contains(&c))
    }
}

const fn band(
    first: u8,
    last: u8,
    awake: (i32, i32),
    nap: (i32, i32),
    catnap: (i32, i32),
    naps: (u8, u8),
) -> AgeBand {
    AgeBand {
        months: first..=last,
        awake: MinuteRange::new(awake.0, awake.1),
        nap: MinuteRange::new(nap.0, nap.1),
        catnap: MinuteRange::new(catnap.0, catnap.1),
        naps: naps.0..=naps.1,
    }
}

/// The band table, ordered by age.
pub static AGE_BANDS: [AgeBand; 7] = [
    band(0, 1, (40, 60), (30, 120), (20, 40), (4, 5)),
    band(2, 3, (60, 90), (45, 120), (20, 40), (4, 5)),
    band(4, 5, (90, 150), (60, 120), (20, 40), (3, 4)),
    band(6, 8, (120, 180), (60, 90), (20, 40), (2, 3)),
    band(9, 11, (150, 210), (60, 90), (30, 60), (2, 2)),
    band(12, 17, (180, 240), (60, 120), (45, 75), (1, 2)),
    band(18, u8::MAX, (240, 360), (90, 150), (60, 90), (1, 1)),
];

/// Resolve an age in months to its band.
pub fn band_for_age(months: u8) -> &'static AgeBand {
    AGE_BANDS
        .iter()
        .find(|b| b.months.contains(&months))
        .unwrap_or(&AGE_BANDS[AGE_BANDS.len() - 1])
}
