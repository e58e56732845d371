// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=napline_adjust --heading-base-level=0

//! Napline Adjust: constraint-clamped drag adjustment for nap schedules.
//!
//! ## Overview
//!
//! This crate turns pointer gestures on a rendered schedule into schedule edits that keep
//! every invariant of [`Schedule`](napline_schedule::Schedule) intact. It does not render
//! anything. Feed it pointer positions and it tells you what was grabbed and what the
//! schedule looks like after each move.
//!
//! ## Pieces
//!
//! - [`Surface`](crate::surface::Surface): maps screen points to minutes and back. Two are
//!   provided, a [`VerticalTimeline`](crate::timeline::VerticalTimeline) and a
//!   [`ClockFace`](crate::clock::ClockFace).
//! - [`grab_at`](crate::surface::grab_at): resolves a pointer-down to a
//!   [`Grab`](crate::types::Grab), either a boundary handle or a nap body.
//! - [`DragState`](crate::drag::DragState): idle vs. dragging. It captures the grab offset
//!   for whole-nap moves and keeps the target fixed until release.
//! - [`apply_drag`](crate::clamp::apply_drag): the pure clamping rules, usable without any of
//!   the above.
//!
//! ## Workflow
//!
//! 1) Pointer down: `grab_at(&surface, &schedule, pt, tolerance)` then
//!    `drag.begin(grab, surface.minute_at(pt, near), &schedule)`.
//! 2) Pointer move: `drag.update(&mut schedule, surface.minute_at(pt, near), &config)`.
//!    For a clock face, pass the dragged boundary's current minute as `near`.
//! 3) Pointer up: `drag.end()`.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use napline_adjust::drag::DragState;
//! use napline_adjust::surface::{Surface, grab_at};
//! use napline_adjust::timeline::VerticalTimeline;
//! use napline_schedule::{Minutes, PlannerConfig, generate};
//!
//! let cfg = PlannerConfig::default();
//! let mut schedule = generate(6, 3, Minutes::hm(7, 30), &cfg);
//! // 06:00–22:00 over 960 px.
//! let timeline = VerticalTimeline::new(
//!     Rect::new(0.0, 0.0, 120.0, 960.0),
//!     Minutes::hm(6, 0),
//!     Minutes::hm(22, 0),
//! );
//!
//! // Press on the first nap's end handle and drag it way down.
//! let down = Point::new(60.0, timeline.y_of(schedule.naps[0].end));
//! let grab = grab_at(&timeline, &schedule, down, 6.0).unwrap();
//! let mut drag = DragState::new();
//! drag.begin(grab, timeline.minute_at(down, schedule.wake), &schedule).unwrap();
//! let to = timeline.minute_at(Point::new(60.0, 900.0), schedule.wake);
//! drag.update(&mut schedule, to, &cfg).unwrap();
//! drag.end();
//!
//! // Clamped to the second nap's start minus the minimum gap.
//! assert_eq!(schedule.naps[0].end, schedule.naps[1].start - cfg.min_gap);
//! assert_eq!(schedule.check(&cfg), Ok(()));
//! ```
//!
//! ## Wake policy
//!
//! Dragging the wake handle either shifts the whole day rigidly
//! ([`WakePolicy::Shift`](napline_schedule::WakePolicy::Shift), the default) or moves the
//! wake time alone ([`WakePolicy::Clamp`](napline_schedule::WakePolicy::Clamp)).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod clamp;
pub mod clock;
pub mod drag;
pub mod surface;
pub mod timeline;
pub mod types;

mod util;

pub use clamp::{apply_drag, resolve_drag};
pub use clock::{ClockFace, DialSpan};
pub use drag::{DragState, DragUpdate};
pub use surface::{Surface, grab_at};
pub use timeline::VerticalTimeline;
pub use types::{AdjustError, DragOutcome, DragTarget, Grab};
