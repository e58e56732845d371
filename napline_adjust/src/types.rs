// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for adjustment: drag targets, grabs, outcomes, and errors.
//!
//! ## Overview
//!
//! A pointer-down resolves to a [`Grab`] (a boundary handle or a nap body). Starting a drag
//! turns it into a [`DragTarget`], which [`apply_drag`](crate::clamp::apply_drag) uses on
//! every pointer move.

use napline_schedule::{Boundary, Minutes, Schedule};

/// What a pointer-down landed on.
///
/// Produced by [`grab_at`](crate::surface::grab_at) and consumed by
/// [`DragState::begin`](crate::drag::DragState::begin).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Grab {
    /// A boundary handle.
    Handle(Boundary),
    /// The body of nap `i`; dragging moves the whole nap.
    NapBody(usize),
}

/// A drag in progress: which boundary moves and how.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// Wake time. Behavior depends on [`WakePolicy`](napline_schedule::WakePolicy).
    Wake,
    /// Bedtime.
    Bedtime,
    /// Start of nap `i`.
    NapStart(usize),
    /// End of nap `i`.
    NapEnd(usize),
    /// Whole nap, keeping its length.
    NapMove {
        /// Nap index.
        index: usize,
        /// Pointer minute minus nap start, captured when the drag began.
        grab_offset: i32,
    },
}

impl DragTarget {
    /// Target for dragging a boundary handle.
    pub const fn for_boundary(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Wake => Self::Wake,
            Boundary::Bedtime => Self::Bedtime,
            Boundary::NapStart(i) => Self::NapStart(i),
            Boundary::NapEnd(i) => Self::NapEnd(i),
        }
    }

    /// Nap index this target refers to, if any.
    pub const fn nap_index(&self) -> Option<usize> {
        match *self {
            Self::Wake | Self::Bedtime => None,
            Self::NapStart(i) | Self::NapEnd(i) | Self::NapMove { index: i, .. } => Some(i),
        }
    }
}

/// Result of resolving one drag step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragOutcome {
    /// The replacement schedule.
    pub schedule: Schedule,
    /// Minute the pointer asked for, after snapping (for nap moves, the requested start).
    pub requested: Minutes,
    /// Minute actually applied after clamping.
    pub applied: Minutes,
}

impl DragOutcome {
    /// Whether clamping moved the requested minute.
    pub fn clamped(&self) -> bool {
        self.requested != self.applied
    }
}

/// Rejected adjustment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdjustError {
    /// The target names a nap the schedule does not have.
    #[error("nap {index} does not exist in a schedule with {len} naps")]
    NapIndexOutOfRange {
        /// Requested nap index.
        index: usize,
        /// Number of naps in the schedule.
        len: usize,
    },
}
