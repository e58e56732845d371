// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planner configuration shared by the generator and the drag adjuster.

use crate::time::{MINUTES_PER_DAY, Minutes, SNAP_STEP};

/// Smallest allowed gap between adjacent boundaries.
pub const MIN_GAP_FLOOR: i32 = 15;
/// Largest allowed gap between adjacent boundaries.
pub const MIN_GAP_CEILING: i32 = 30;

/// What dragging the wake-time handle does to the rest of the day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WakePolicy {
    /// Naps and bedtime move with the wake time by the same delta.
    #[default]
    Shift,
    /// Only the wake time moves, bounded by the first nap.
    Clamp,
}

/// Tunables for schedule generation and adjustment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Minimum minutes between a wake boundary and the following sleep boundary.
    pub min_gap: i32,
    /// Minimum length of a nap.
    pub min_nap: i32,
    /// Pointer snapping grid.
    pub snap_step: i32,
    /// Latest generated bedtime, if any.
    pub bedtime_ceiling: Option<Minutes>,
    /// Wake-drag behavior.
    pub wake_policy: WakePolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_gap: MIN_GAP_FLOOR,
            min_nap: 15,
            snap_step: SNAP_STEP,
            bedtime_ceiling: Some(Minutes::hm(22, 0)),
            wake_policy: WakePolicy::Shift,
        }
    }
}

/// Rejected [`PlannerConfig`] values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `min_gap` outside `15..=30`.
    #[error("minimum gap {0} must be between 15 and 30 minutes")]
    GapOutOfRange(i32),
    /// `min_nap` of zero or less.
    #[error("minimum nap length {0} must be positive")]
    NonPositiveNap(i32),
    /// `snap_step` of zero or less.
    #[error("snap step {0} must be positive")]
    NonPositiveSnap(i32),
    /// Bedtime ceiling outside a single day.
    #[error("bedtime ceiling {0} is not within a day")]
    CeilingOutOfDay(i32),
}

impl PlannerConfig {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GAP_FLOOR..=MIN_GAP_CEILING).contains(&self.min_gap) {
            return Err(ConfigError::GapOutOfRange(self.min_gap));
        }
        if self.min_nap <= 0 {
            return Err(ConfigError::NonPositiveNap(self.min_nap));
        }
        if self.snap_step <= 0 {
            return Err(ConfigError::NonPositiveSnap(self.snap_step));
        }
        if let Some(c) = self.bedtime_ceiling
            && !(0..MINUTES_PER_DAY).contains(&c.get())
        {
            return Err(ConfigError::CeilingOutOfDay(c.get()));
        }
        Ok(())
    }

    /// Same configuration with the bedtime ceiling removed.
    pub const fn without_ceiling(self) -> Self {
        Self {
            bedtime_ceiling: None,
            ..self
        }
    }

    /// Same configuration with a different wake policy.
    pub const fn with_wake_policy(self, wake_policy: WakePolicy) -> Self {
        Self {
            wake_policy,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(PlannerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let base = PlannerConfig::default();
        assert_eq!(
            PlannerConfig { min_gap: 10, ..base }.validate(),
            Err(ConfigError::GapOutOfRange(10))
        );
        assert_eq!(
            PlannerConfig { min_gap: 31, ..base }.validate(),
            Err(ConfigError::GapOutOfRange(31))
        );
        assert_eq!(
            PlannerConfig { min_nap: 0, ..base }.validate(),
            Err(ConfigError::NonPositiveNap(0))
        );
        assert_eq!(
            PlannerConfig {
                snap_step: -5,
                ..base
            }
            .validate(),
            Err(ConfigError::NonPositiveSnap(-5))
        );
        assert_eq!(
            PlannerConfig {
                bedtime_ceiling: Some(Minutes(1440)),
                ..base
            }
            .validate(),
            Err(ConfigError::CeilingOutOfDay(1440))
        );
    }

    #[test]
    fn builders_only_touch_their_field() {
        let c = PlannerConfig::default()
            .without_ceiling()
            .with_wake_policy(WakePolicy::Clamp);
        assert_eq!(c.bedtime_ceiling, None);
        assert_eq!(c.wake_policy, WakePolicy::Clamp);
        assert_eq!(c.min_gap, MIN_GAP_FLOOR);
    }
}
