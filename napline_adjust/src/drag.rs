// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state: idle, or dragging one target.
//!
//! ## Usage
//!
//! 1) On pointer-down, resolve what was hit with [`grab_at`](crate::surface::grab_at) and call
//!    [`DragState::begin`].
//! 2) On each pointer move, convert the pointer to a minute and call [`DragState::update`].
//!    The schedule is replaced as a whole on every step.
//! 3) On pointer release, call [`DragState::end`]. Ending always succeeds.
//!
//! While a drag is active the target stays fixed no matter where the pointer wanders, so a
//! handle cannot be "dropped" onto a neighbor mid-gesture.
//!
//! ## Minimal example
//!
//! ```
//! use napline_adjust::drag::DragState;
//! use napline_adjust::types::{DragTarget, Grab};
//! use napline_schedule::{Boundary, Minutes, PlannerConfig, generate};
//!
//! let cfg = PlannerConfig::default();
//! let mut schedule = generate(6, 3, Minutes::hm(7, 30), &cfg);
//! let mut drag = DragState::new();
//!
//! drag.begin(Grab::Handle(Boundary::Bedtime), schedule.bedtime, &schedule).unwrap();
//! let step = drag.update(&mut schedule, Minutes::hm(19, 0), &cfg).unwrap().unwrap();
//! assert_eq!(step.target, DragTarget::Bedtime);
//! assert_eq!(schedule.bedtime, Minutes::hm(19, 0));
//! assert_eq!(drag.end(), Some(DragTarget::Bedtime));
//! assert!(!drag.is_dragging());
//! ```

use napline_schedule::{Minutes, PlannerConfig, Schedule};

use crate::clamp::resolve_drag;
use crate::types::{AdjustError, DragTarget, Grab};

/// What one [`DragState::update`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragUpdate {
    /// Active target.
    pub target: DragTarget,
    /// Snapped minute the pointer asked for.
    pub requested: Minutes,
    /// Minute applied after clamping.
    pub applied: Minutes,
    /// Whether the schedule differs from before the step.
    pub changed: bool,
}

impl DragUpdate {
    /// Whether clamping moved the requested minute.
    pub fn clamped(&self) -> bool {
        self.requested != self.applied
    }
}

/// Gesture state machine over a single schedule.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    active: Option<DragTarget>,
}

impl DragState {
    /// Create an idle state.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Active target, if dragging.
    pub fn active(&self) -> Option<DragTarget> {
        self.active
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start dragging `grab`, replacing any drag already in progress.
    ///
    /// For a nap body, the offset between `pointer` and the nap start is captured
    /// so the nap does not jump under the pointer.
    pub fn begin(
        &mut self,
        grab: Grab,
        pointer: Minutes,
        schedule: &Schedule,
    ) -> Result<DragTarget, AdjustError> {
        let target = match grab {
            Grab::Handle(boundary) => {
                let target = DragTarget::for_boundary(boundary);
                if schedule.get(boundary).is_none() {
                    return Err(out_of_range(target, schedule));
                }
                target
            }
            Grab::NapBody(index) => {
                let nap = schedule
                    .naps
                    .get(index)
                    .ok_or(AdjustError::NapIndexOutOfRange {
                        index,
                        len: schedule.naps.len(),
                    })?;
                DragTarget::NapMove {
                    index,
                    grab_offset: nap.start.until(pointer),
                }
            }
        };
        tracing::trace!(?target, pointer = pointer.get(), "drag begin");
        self.active = Some(target);
        Ok(target)
    }

    /// Apply a pointer move to `schedule`.
    ///
    /// Returns `Ok(None)` when idle. On error the schedule is left untouched and the drag
    /// stays active.
    pub fn update(
        &mut self,
        schedule: &mut Schedule,
        pointer: Minutes,
        config: &PlannerConfig,
    ) -> Result<Option<DragUpdate>, AdjustError> {
        let Some(target) = self.active else {
            return Ok(None);
        };
        let outcome = resolve_drag(schedule, target, pointer, config)?;
        let changed = outcome.schedule != *schedule;
        *schedule = outcome.schedule;
        Ok(Some(DragUpdate {
            target,
            requested: outcome.requested,
            applied: outcome.applied,
            changed,
        }))
    }

    /// Stop dragging and return the target that was active.
    pub fn end(&mut self) -> Option<DragTarget> {
        let ended = self.active.take();
        if let Some(target) = ended {
            tracing::trace!(?target, "drag end");
        }
        ended
    }
}

fn out_of_range(target: DragTarget, schedule: &Schedule) -> AdjustError {
    AdjustError::NapIndexOutOfRange {
        index: target.nap_index().unwrap_or_default(),
        len: schedule.naps.len(),
    }
}
