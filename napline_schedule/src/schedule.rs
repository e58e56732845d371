// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schedule types: nap blocks, boundaries, and the ordering invariants.
//!
//! ## Invariants
//!
//! A valid [`Schedule`] satisfies, for a given [`PlannerConfig`]:
//!
//! - `wake < naps[0].start < naps[0].end < naps[1].start < ... < bedtime`;
//! - every awake window (wake → first nap, nap end → next nap start, last nap end →
//!   bedtime) is at least `min_gap` long;
//! - every nap is at least `min_nap` long.
//!
//! [`Schedule::check`] reports the first violation it finds.

use alloc::vec::Vec;

use crate::config::PlannerConfig;
use crate::time::Minutes;

/// One nap, as offsets from midnight of the wake day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NapBlock {
    /// Falling asleep.
    pub start: Minutes,
    /// Waking up.
    pub end: Minutes,
}

impl NapBlock {
    /// Create a nap from its start and end.
    pub const fn new(start: Minutes, end: Minutes) -> Self {
        Self { start, end }
    }

    /// Nap length in minutes.
    pub const fn duration(&self) -> i32 {
        self.start.until(self.end)
    }

    /// Whether `m` lies within the nap, inclusive of both ends.
    pub fn contains(&self, m: Minutes) -> bool {
        self.start <= m && m <= self.end
    }

    /// The same nap moved by `delta` minutes.
    pub fn shifted(&self, delta: i32) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }
}

/// A draggable time marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Morning wake time.
    Wake,
    /// Start of nap `i`.
    NapStart(usize),
    /// End of nap `i`.
    NapEnd(usize),
    /// Bedtime.
    Bedtime,
}

/// A day plan: wake time, naps in chronological order, and bedtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Morning wake time.
    pub wake: Minutes,
    /// Bedtime.
    pub bedtime: Minutes,
    /// Naps, earliest first.
    pub naps: Vec<NapBlock>,
}

/// An invariant violation found by [`Schedule::check`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// An awake window shorter than the configured minimum gap.
    #[error("awake window ending at {before:?} is {minutes} minutes, below the minimum gap")]
    GapTooSmall {
        /// Boundary that closes the awake window.
        before: Boundary,
        /// Measured window length.
        minutes: i32,
    },
    /// A nap shorter than the configured minimum nap.
    #[error("nap {index} lasts {minutes} minutes, below the minimum nap length")]
    NapTooShort {
        /// Nap index.
        index: usize,
        /// Measured nap length.
        minutes: i32,
    },
}

impl Schedule {
    /// Create a schedule from its parts without checking invariants.
    pub fn new(wake: Minutes, naps: Vec<NapBlock>, bedtime: Minutes) -> Self {
        Self {
            wake,
            bedtime,
            naps,
        }
    }

    /// Time of a boundary, or `None` when it names a nap that does not exist.
    pub fn get(&self, boundary: Boundary) -> Option<Minutes> {
        match boundary {
            Boundary::Wake => Some(self.wake),
            Boundary::Bedtime => Some(self.bedtime),
            Boundary::NapStart(i) => self.naps.get(i).map(|n| n.start),
            Boundary::NapEnd(i) => self.naps.get(i).map(|n| n.end),
        }
    }

    /// All boundaries in chronological order.
    pub fn boundaries(&self) -> impl Iterator<Item = (Boundary, Minutes)> + '_ {
        let naps = self.naps.iter().enumerate().flat_map(|(i, n)| {
            [(Boundary::NapStart(i), n.start), (Boundary::NapEnd(i), n.end)]
        });
        core::iter::once((Boundary::Wake, self.wake))
            .chain(naps)
            .chain(core::iter::once((Boundary::Bedtime, self.bedtime)))
    }

    /// Boundary that opens the awake window before nap `index`: wake or the previous nap's end.
    pub fn previous_boundary(&self, index: usize) -> Minutes {
        match index.checked_sub(1).and_then(|i| self.naps.get(i)) {
            Some(prev) => prev.end,
            None => self.wake,
        }
    }

    /// Boundary that closes the awake window after nap `index`: the next nap's start or bedtime.
    pub fn next_boundary(&self, index: usize) -> Minutes {
        match self.naps.get(index + 1) {
            Some(next) => next.start,
            None => self.bedtime,
        }
    }

    /// End of the last sleep before bedtime: the last nap's end, or wake with no naps.
    pub fn last_wake_boundary(&self) -> Minutes {
        self.naps.last().map_or(self.wake, |n| n.end)
    }

    /// The same schedule moved by `delta` minutes.
    pub fn shifted(&self, delta: i32) -> Self {
        Self {
            wake: self.wake + delta,
            bedtime: self.bedtime + delta,
            naps: self.naps.iter().map(|n| n.shifted(delta)).collect(),
        }
    }

    /// Verify ordering, minimum gaps, and minimum nap lengths.
    pub fn check(&self, config: &PlannerConfig) -> Result<(), ScheduleError> {
        let mut awake_from = self.wake;
        for (i, nap) in self.naps.iter().enumerate() {
            let gap = awake_from.until(nap.start);
            if gap < config.min_gap {
                return Err(ScheduleError::GapTooSmall {
                    before: Boundary::NapStart(i),
                    minutes: gap,
                });
            }
            if nap.duration() < config.min_nap {
                return Err(ScheduleError::NapTooShort {
                    index: i,
                    minutes: nap.duration(),
                });
            }
            awake_from = nap.end;
        }
        let gap = awake_from.until(self.bedtime);
        if gap < config.min_gap {
            return Err(ScheduleError::GapTooSmall {
                before: Boundary::Bedtime,
                minutes: gap,
            });
        }
        Ok(())
    }
}
