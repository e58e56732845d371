// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock face: minutes run clockwise around a dial, starting at the top.
//!
//! ## Unwrapping
//!
//! A dial angle names a time of day only up to whole turns. [`ClockFace::minute_at`] picks the
//! representative closest to a reference minute (normally the current value of the boundary
//! being dragged), so a handle dragged past midnight keeps counting up instead of jumping
//! back a day.
//!
//! ```
//! use kurbo::Point;
//! use napline_adjust::clock::{ClockFace, DialSpan};
//! use napline_adjust::surface::Surface;
//! use napline_schedule::Minutes;
//!
//! let dial = ClockFace::new(Point::new(100.0, 100.0), 80.0, 20.0, DialSpan::Day);
//! // Straight down on a 24-hour dial is noon.
//! assert_eq!(dial.minute_at(Point::new(100.0, 180.0), Minutes(700)), Minutes::hm(12, 0));
//! // Just past the top, dragged from 23:50, is ten past midnight of the next day.
//! let p = dial.point_of(Minutes(10));
//! assert_eq!(dial.minute_at(p, Minutes::hm(23, 50)), Minutes(1450));
//! ```

use core::f64::consts::TAU;

use kurbo::{Point, Vec2};
use napline_schedule::{MINUTES_PER_DAY, Minutes, NapBlock};

use crate::surface::Surface;
use crate::util::round_to_minutes;

/// How much time one full turn of the dial represents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DialSpan {
    /// 24 hours per turn; midnight at the top.
    #[default]
    Day,
    /// 12 hours per turn; midnight and noon at the top.
    HalfDay,
}

impl DialSpan {
    /// Minutes per full turn.
    pub const fn minutes(self) -> i32 {
        match self {
            Self::Day => MINUTES_PER_DAY,
            Self::HalfDay => MINUTES_PER_DAY / 2,
        }
    }
}

/// A circular dial with handles on a ring of `radius` and nap arcs `ring_width` wide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClockFace {
    /// Dial center.
    pub center: Point,
    /// Radius of the ring handles and arcs are drawn on.
    pub radius: f64,
    /// Thickness of nap arcs, centered on the ring.
    pub ring_width: f64,
    /// Time per turn.
    pub span: DialSpan,
}

impl ClockFace {
    /// Create a dial.
    pub const fn new(center: Point, radius: f64, ring_width: f64, span: DialSpan) -> Self {
        Self {
            center,
            radius,
            ring_width,
            span,
        }
    }

    /// Clockwise angle from the top, in `[0, TAU)`.
    fn angle_of(&self, pt: Point) -> f64 {
        let v = pt - self.center;
        // Screen y grows downward: top is -y, clockwise is +x.
        let a = Vec2::new(-v.y, v.x).atan2();
        if a < 0.0 { a + TAU } else { a }
    }

    /// Position of the handle for `m` on the ring.
    pub fn point_of(&self, m: Minutes) -> Point {
        let span = self.span.minutes();
        let frac = f64::from(m.get().rem_euclid(span)) / f64::from(span);
        let dir = Vec2::from_angle(frac * TAU);
        // `dir` is (cos, sin) measured from +x; rotate so 0 is at the top.
        self.center + Vec2::new(dir.y, -dir.x) * self.radius
    }

    /// Whether `pt` lies on the ring band where nap arcs are drawn.
    fn on_ring(&self, pt: Point) -> bool {
        let r = (pt - self.center).hypot();
        let half = self.ring_width / 2.0;
        r >= self.radius - half && r <= self.radius + half
    }
}

impl Surface for ClockFace {
    fn minute_at(&self, pt: Point, near: Minutes) -> Minutes {
        let span = self.span.minutes();
        let raw = round_to_minutes(self.angle_of(pt) / TAU * f64::from(span));
        let turns = (near.get() - raw + span / 2).div_euclid(span);
        Minutes(raw + turns * span)
    }

    fn handle_distance(&self, pt: Point, m: Minutes) -> f64 {
        pt.distance(self.point_of(m))
    }

    fn nap_contains(&self, pt: Point, nap: &NapBlock) -> bool {
        if !self.on_ring(pt) {
            return false;
        }
        let mid = nap.start + nap.duration() / 2;
        nap.contains(self.minute_at(pt, mid))
    }
}
