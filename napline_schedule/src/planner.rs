// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planner session: the single owner of the current schedule.
//!
//! ## Lifecycle
//!
//! - [`Planner::new`] generates the first schedule.
//! - Changing the age or nap count regenerates from scratch. Only the current wake time
//!   carries over; manual nap and bedtime adjustments are discarded.
//! - Between regenerations, an adjuster mutates the schedule through
//!   [`Planner::schedule_mut`] or [`Planner::replace_schedule`].
//!
//! ```
//! use napline_schedule::{Minutes, Planner, PlannerConfig};
//!
//! let mut p = Planner::new(6, 3, Minutes::hm(7, 0), PlannerConfig::default());
//! p.schedule_mut().bedtime = Minutes::hm(19, 45);
//! p.set_nap_count(2);
//! // Regeneration keeps the wake time but not the manual bedtime.
//! assert_eq!(p.schedule().wake, Minutes::hm(7, 0));
//! assert_eq!(p.schedule().naps.len(), 2);
//! assert_ne!(p.schedule().bedtime, Minutes::hm(19, 45));
//! ```

use crate::advice::{Assessment, assess};
use crate::config::PlannerConfig;
use crate::generate::generate_detailed;
use crate::schedule::Schedule;
use crate::time::Minutes;

/// Owned planning session.
#[derive(Clone, Debug)]
pub struct Planner {
    age_months: u8,
    nap_count: usize,
    config: PlannerConfig,
    schedule: Schedule,
    bedtime_capped: bool,
}

impl Planner {
    /// Start a session and generate its first schedule.
    pub fn new(age_months: u8, nap_count: usize, wake: Minutes, config: PlannerConfig) -> Self {
        let generated = generate_detailed(age_months, nap_count, wake, &config);
        Self {
            age_months,
            nap_count,
            config,
            schedule: generated.schedule,
            bedtime_capped: generated.bedtime_capped,
        }
    }

    /// Age in months the schedule was generated for.
    pub fn age_months(&self) -> u8 {
        self.age_months
    }

    /// Requested nap count.
    pub fn nap_count(&self) -> usize {
        self.nap_count
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Current schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Mutable access for in-place adjustment.
    pub fn schedule_mut(&mut self) -> &mut Schedule {
        &mut self.schedule
    }

    /// Replace the schedule wholesale, returning the previous one.
    pub fn replace_schedule(&mut self, schedule: Schedule) -> Schedule {
        core::mem::replace(&mut self.schedule, schedule)
    }

    /// Whether the last regeneration pulled bedtime back to the ceiling.
    pub fn bedtime_capped(&self) -> bool {
        self.bedtime_capped
    }

    /// Change the age and regenerate, keeping the wake time.
    pub fn set_age(&mut self, age_months: u8) {
        self.age_months = age_months;
        self.regenerate(self.schedule.wake);
    }

    /// Change the nap count and regenerate, keeping the wake time.
    pub fn set_nap_count(&mut self, nap_count: usize) {
        self.nap_count = nap_count;
        self.regenerate(self.schedule.wake);
    }

    /// Regenerate from a new wake time.
    pub fn set_wake(&mut self, wake: Minutes) {
        self.regenerate(wake);
    }

    /// Swap the configuration and regenerate, keeping the wake time.
    pub fn set_config(&mut self, config: PlannerConfig) {
        self.config = config;
        self.regenerate(self.schedule.wake);
    }

    /// Advisory check of the current schedule.
    pub fn assess(&self) -> Assessment {
        assess(&self.schedule, self.age_months, &self.config)
    }

    fn regenerate(&mut self, wake: Minutes) {
        tracing::debug!(
            age_months = self.age_months,
            nap_count = self.nap_count,
            wake = wake.get(),
            "regenerating schedule"
        );
        let generated = generate_detailed(self.age_months, self.nap_count, wake, &self.config);
        self.schedule = generated.schedule;
        self.bedtime_capped = generated.bedtime_capped;
    }
}
