// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical timeline: minutes run top to bottom inside a rectangle.

use kurbo::{Point, Rect};
use napline_schedule::{Minutes, NapBlock};

use crate::surface::Surface;
use crate::util::round_to_minutes;

/// A vertical timeline spanning `start..=end` over the height of `bounds`.
///
/// Pointer positions above or below the rectangle map to `start` or `end`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VerticalTimeline {
    /// Area the timeline is drawn in.
    pub bounds: Rect,
    /// Minute at the top edge.
    pub start: Minutes,
    /// Minute at the bottom edge.
    pub end: Minutes,
}

impl VerticalTimeline {
    /// Create a timeline. `end` must be later than `start`.
    pub const fn new(bounds: Rect, start: Minutes, end: Minutes) -> Self {
        Self { bounds, start, end }
    }

    fn span(&self) -> i32 {
        self.start.until(self.end)
    }

    /// Vertical position of `m`. Minutes outside the span extrapolate linearly.
    pub fn y_of(&self, m: Minutes) -> f64 {
        let span = self.span();
        if span <= 0 {
            return self.bounds.y0;
        }
        let frac = f64::from(self.start.until(m)) / f64::from(span);
        self.bounds.y0 + frac * self.bounds.height()
    }

    /// Drawn rectangle of a nap.
    pub fn nap_rect(&self, nap: &NapBlock) -> Rect {
        Rect::new(
            self.bounds.x0,
            self.y_of(nap.start),
            self.bounds.x1,
            self.y_of(nap.end),
        )
    }
}

impl Surface for VerticalTimeline {
    fn minute_at(&self, pt: Point, _near: Minutes) -> Minutes {
        let height = self.bounds.height();
        if height <= 0.0 {
            return self.start;
        }
        let frac = ((pt.y - self.bounds.y0) / height).clamp(0.0, 1.0);
        self.start + round_to_minutes(frac * f64::from(self.span()))
    }

    fn handle_distance(&self, pt: Point, m: Minutes) -> f64 {
        let x = pt.x.clamp(self.bounds.x0, self.bounds.x1);
        pt.distance(Point::new(x, self.y_of(m)))
    }

    fn nap_contains(&self, pt: Point, nap: &NapBlock) -> bool {
        self.nap_rect(nap).contains(pt)
    }
}
