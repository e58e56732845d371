// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived totals: awake windows and sleep sums.
//!
//! These are recomputed from the schedule on every call.

use alloc::vec::Vec;

use crate::schedule::Schedule;
use crate::time::MINUTES_PER_DAY;

impl Schedule {
    /// Awake-window lengths in order: wake → first nap, between naps, last nap → bedtime.
    pub fn awake_windows(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.naps.len() + 1);
        let mut from = self.wake;
        for nap in &self.naps {
            out.push(from.until(nap.start));
            from = nap.end;
        }
        out.push(from.until(self.bedtime));
        out
    }

    /// Sum of nap lengths.
    pub fn total_day_sleep(&self) -> i32 {
        self.naps.iter().map(|n| n.duration()).sum()
    }

    /// Bedtime to the same wake time on the following day.
    pub fn night_sleep(&self) -> i32 {
        self.bedtime.until(self.wake + MINUTES_PER_DAY)
    }

    /// Day sleep plus night sleep.
    pub fn total_sleep(&self) -> i32 {
        self.total_day_sleep() + self.night_sleep()
    }

    /// Total time awake between wake and bedtime.
    pub fn total_awake(&self) -> i32 {
        self.wake.until(self.bedtime) - self.total_day_sleep()
    }
}
