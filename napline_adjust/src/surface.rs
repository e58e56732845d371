// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer surfaces and grab hit testing.
//!
//! A [`Surface`] maps between screen points and minutes. Implementations exist for a
//! [vertical timeline](crate::timeline::VerticalTimeline) and a
//! [clock face](crate::clock::ClockFace); [`grab_at`] works with either.
//!
//! ## Grab selection
//!
//! - Boundary handles win over nap bodies.
//! - Among handles within `tolerance`, the nearest is chosen. Equal distances are stable and
//!   the later boundary wins, so a nap end sitting on top of its start can still be pulled
//!   out.
//! - Otherwise, the first nap body containing the point is grabbed.

use kurbo::Point;
use napline_schedule::{Minutes, NapBlock, Schedule};

use crate::types::Grab;

/// Mapping between screen space and schedule minutes.
pub trait Surface {
    /// Whole minute under `pt`, unwrapped to the representative nearest `near`.
    ///
    /// Linear surfaces ignore `near`; circular ones use it to stay continuous across a
    /// full turn of the dial.
    fn minute_at(&self, pt: Point, near: Minutes) -> Minutes;

    /// Distance in pixels from `pt` to the handle drawn for `m`.
    fn handle_distance(&self, pt: Point, m: Minutes) -> f64;

    /// Whether `pt` lies on the drawn body of `nap`.
    fn nap_contains(&self, pt: Point, nap: &NapBlock) -> bool;

    /// [`Surface::minute_at`] snapped to a `step`-minute grid.
    fn snapped_minute_at(&self, pt: Point, near: Minutes, step: i32) -> Minutes {
        self.minute_at(pt, near).snap(step)
    }
}

/// Resolve what a pointer-down at `pt` grabs, if anything.
pub fn grab_at<S: Surface + ?Sized>(
    surface: &S,
    schedule: &Schedule,
    pt: Point,
    tolerance: f64,
) -> Option<Grab> {
    let mut best: Option<(f64, Grab)> = None;
    for (boundary, m) in schedule.boundaries() {
        let d = surface.handle_distance(pt, m);
        if d > tolerance {
            continue;
        }
        // Stable last-wins on equal distance.
        if best.is_none_or(|(bd, _)| d <= bd) {
            best = Some((d, Grab::Handle(boundary)));
        }
    }
    if let Some((_, grab)) = best {
        return Some(grab);
    }
    schedule
        .naps
        .iter()
        .position(|nap| surface.nap_contains(pt, nap))
        .map(Grab::NapBody)
}
