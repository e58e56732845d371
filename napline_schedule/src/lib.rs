// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=napline_schedule --heading-base-level=0

//! Napline Schedule: age-banded nap schedule generation.
//!
//! Napline Schedule is the geometry-free core of the planner.
//!
//! - Turn an age in months, a nap count, and a wake time into nap windows and a bedtime.
//! - Check schedules against their ordering and minimum-gap invariants.
//! - Derive totals (awake windows, day and night sleep) and advisory range flags.
//! - Format and parse times of day for display.
//!
//! Dragging boundaries on a timeline lives in `napline_adjust`, which builds on the
//! [`Schedule`] and [`PlannerConfig`] types here.
//!
//! # Example
//!
//! ```rust
//! use napline_schedule::{Minutes, PlannerConfig, assess, generate};
//! use napline_schedule::time::format_12h;
//!
//! let config = PlannerConfig::default();
//! let schedule = generate(6, 3, Minutes::hm(7, 30), &config);
//!
//! assert_eq!(format_12h(schedule.naps[0].start), "10:00 AM");
//! assert_eq!(format_12h(schedule.bedtime), "8:30 PM");
//! assert_eq!(schedule.check(&config), Ok(()));
//! assert!(assess(&schedule, 6, &config).is_clear());
//! ```
//!
//! ## Minutes
//!
//! Every time is a [`Minutes`] offset from midnight of the wake day. Offsets are not wrapped
//! during arithmetic, so a schedule may run past 1440; display code wraps them.
//!
//! ## Bedtime ceiling
//!
//! [`PlannerConfig::bedtime_ceiling`] (22:00 by default) silently pulls late generated
//! bedtimes back. Ordering takes priority: bedtime never lands closer than
//! [`PlannerConfig::min_gap`] to the last nap.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod advice;
pub mod band;
pub mod config;
pub mod generate;
pub mod planner;
pub mod schedule;
pub mod summary;
pub mod time;

pub use advice::{Advisories, Assessment, assess};
pub use band::{AgeBand, MinuteRange, RangeStatus, band_for_age};
pub use config::{ConfigError, PlannerConfig, WakePolicy};
pub use generate::{Generated, MAX_NAPS, generate, generate_detailed};
pub use planner::Planner;
pub use schedule::{Boundary, NapBlock, Schedule, ScheduleError};
pub use time::{MINUTES_PER_DAY, Minutes, ParseTimeError, TimeFormat, parse_time};
