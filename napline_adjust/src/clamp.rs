// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamping rules for each drag target.
//!
//! ## Rules
//!
//! The pointer's distance from the dragged boundary's current value is snapped to
//! [`PlannerConfig::snap_step`], and the result is bounded. A boundary that sits off the
//! grid (an odd wake time, an 83-minute nap) keeps its offset from the grid, and a pointer
//! resting on the current value never moves anything. With
//! `gap = min_gap`, `prev` the boundary before a nap (wake or the previous nap's end) and
//! `next` the boundary after it (the next nap's start or bedtime):
//!
//! | Target | Lower bound | Upper bound |
//! |---|---|---|
//! | `Wake`, [`WakePolicy::Shift`] | midnight | end of day minus one snap step |
//! | `Wake`, [`WakePolicy::Clamp`] | midnight | first nap start − gap (bedtime − 60 with no naps) |
//! | `Bedtime` | last nap end + gap (wake + 60 with no naps) | none |
//! | `NapStart(i)` | prev + gap | own end − `min_nap` |
//! | `NapEnd(i)` | own start + `min_nap` | next − gap |
//! | `NapMove` | prev + gap | next − gap − duration |
//!
//! Under [`WakePolicy::Shift`] the whole schedule translates by the wake delta, so every
//! other boundary keeps its distance from wake.
//!
//! Bounds never panic. If they cross (only possible for a schedule that already violates its
//! invariants), the lower bound wins.
//!
//! ```
//! use napline_adjust::clamp::apply_drag;
//! use napline_adjust::types::DragTarget;
//! use napline_schedule::{Minutes, PlannerConfig, generate};
//!
//! let cfg = PlannerConfig::default();
//! let s = generate(6, 3, Minutes::hm(7, 30), &cfg);
//! // Pull the first nap's end far past the second nap.
//! let out = apply_drag(&s, DragTarget::NapEnd(0), Minutes::hm(18, 0), &cfg).unwrap();
//! assert_eq!(out.naps[0].end, s.naps[1].start - cfg.min_gap);
//! ```

use napline_schedule::generate::MIN_NAP_FREE_DAY;
use napline_schedule::{MINUTES_PER_DAY, Minutes, NapBlock, PlannerConfig, Schedule, WakePolicy};

use crate::types::{AdjustError, DragOutcome, DragTarget};

fn nap(schedule: &Schedule, index: usize) -> Result<NapBlock, AdjustError> {
    schedule
        .naps
        .get(index)
        .copied()
        .ok_or(AdjustError::NapIndexOutOfRange {
            index,
            len: schedule.naps.len(),
        })
}

/// Move `current` toward `pointer` by the pointer's distance snapped to `step`.
fn snap_from(current: Minutes, pointer: Minutes, step: i32) -> Minutes {
    current + Minutes(current.until(pointer)).snap(step).get()
}

/// Resolve one drag step into a replacement schedule plus the requested/applied minutes.
pub fn resolve_drag(
    schedule: &Schedule,
    target: DragTarget,
    pointer: Minutes,
    config: &PlannerConfig,
) -> Result<DragOutcome, AdjustError> {
    let step = config.snap_step;
    let gap = config.min_gap;

    let (next, requested, applied) = match target {
        DragTarget::Wake => match config.wake_policy {
            WakePolicy::Shift => {
                let p = snap_from(schedule.wake, pointer, step);
                let hi = Minutes(MINUTES_PER_DAY - config.snap_step.max(1));
                let wake = p.bounded(Minutes::MIDNIGHT, hi);
                (schedule.shifted(wake - schedule.wake), p, wake)
            }
            WakePolicy::Clamp => {
                let p = snap_from(schedule.wake, pointer, step);
                let hi = schedule
                    .naps
                    .first()
                    .map_or(schedule.bedtime - MIN_NAP_FREE_DAY, |n| n.start - gap);
                let wake = p.bounded(Minutes::MIDNIGHT, hi);
                let mut next = schedule.clone();
                next.wake = wake;
                (next, p, wake)
            }
        },
        DragTarget::Bedtime => {
            let lo = match schedule.naps.last() {
                Some(last) => last.end + gap,
                None => schedule.wake + MIN_NAP_FREE_DAY,
            };
            let p = snap_from(schedule.bedtime, pointer, step);
            let bedtime = p.max(lo);
            let mut next = schedule.clone();
            next.bedtime = bedtime;
            (next, p, bedtime)
        }
        DragTarget::NapStart(i) => {
            let own = nap(schedule, i)?;
            let p = snap_from(own.start, pointer, step);
            let lo = schedule.previous_boundary(i) + gap;
            let hi = own.end - config.min_nap;
            let start = p.bounded(lo, hi);
            let mut next = schedule.clone();
            next.naps[i].start = start;
            (next, p, start)
        }
        DragTarget::NapEnd(i) => {
            let own = nap(schedule, i)?;
            let p = snap_from(own.end, pointer, step);
            let lo = own.start + config.min_nap;
            let hi = schedule.next_boundary(i) - gap;
            let end = p.bounded(lo, hi);
            let mut next = schedule.clone();
            next.naps[i].end = end;
            (next, p, end)
        }
        DragTarget::NapMove { index, grab_offset } => {
            let own = nap(schedule, index)?;
            let duration = own.duration();
            let lo = schedule.previous_boundary(index) + gap;
            let hi = schedule.next_boundary(index) - gap - duration;
            let wanted = snap_from(own.start, pointer - grab_offset, step);
            let start = wanted.bounded(lo, hi);
            let mut next = schedule.clone();
            next.naps[index] = NapBlock::new(start, start + duration);
            (next, wanted, start)
        }
    };

    tracing::trace!(
        ?target,
        pointer = pointer.get(),
        requested = requested.get(),
        applied = applied.get(),
        "drag step"
    );
    Ok(DragOutcome {
        schedule: next,
        requested,
        applied,
    })
}

/// Apply one drag step and return the replacement schedule.
///
/// The input schedule is never modified; callers swap the result in as a whole.
pub fn apply_drag(
    schedule: &Schedule,
    target: DragTarget,
    pointer: Minutes,
    config: &PlannerConfig,
) -> Result<Schedule, AdjustError> {
    resolve_drag(schedule, target, pointer, config).map(|o| o.schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use napline_schedule::generate;

    fn cfg() -> PlannerConfig {
        PlannerConfig::default()
    }

    fn reference() -> Schedule {
        // Naps [600,675] [825,900] [1050,1080], bedtime 1230.
        generate(6, 3, Minutes(450), &cfg())
    }

    #[test]
    fn nap_end_clamps_to_next_start_minus_gap() {
        let s = reference();
        let out = apply_drag(&s, DragTarget::NapEnd(0), Minutes(1000), &cfg()).unwrap();
        assert_eq!(out.naps[0].end, Minutes(825 - 15));
        assert_eq!(out.naps[1..], s.naps[1..]);
    }

    #[test]
    fn nap_end_respects_minimum_length() {
        let s = reference();
        let out = apply_drag(&s, DragTarget::NapEnd(0), Minutes(0), &cfg()).unwrap();
        assert_eq!(out.naps[0], NapBlock::new(Minutes(600), Minutes(615)));
    }

    #[test]
    fn nap_start_bounds() {
        let s = reference();
        let early = apply_drag(&s, DragTarget::NapStart(1), Minutes(0), &cfg()).unwrap();
        assert_eq!(early.naps[1].start, Minutes(675 + 15));
        let late = apply_drag(&s, DragTarget::NapStart(1), Minutes(2000), &cfg()).unwrap();
        assert_eq!(late.naps[1].start, Minutes(900 - 15));
        let first = apply_drag(&s, DragTarget::NapStart(0), Minutes(0), &cfg()).unwrap();
        assert_eq!(first.naps[0].start, Minutes(450 + 15));
    }

    #[test]
    fn wake_shift_translates_everything() {
        let s = reference();
        let out = apply_drag(&s, DragTarget::Wake, Minutes(480), &cfg()).unwrap();
        assert_eq!(out, s.shifted(30));
        assert_eq!(out.bedtime, Minutes(1260));
        assert_eq!(out.naps[2], NapBlock::new(Minutes(1080), Minutes(1110)));
    }

    #[test]
    fn wake_shift_stays_within_day() {
        let s = reference();
        let out = apply_drag(&s, DragTarget::Wake, Minutes(-200), &cfg()).unwrap();
        assert_eq!(out.wake, Minutes(0));
        assert_eq!(out, s.shifted(-450));
        let out = apply_drag(&s, DragTarget::Wake, Minutes(5000), &cfg()).unwrap();
        assert_eq!(out.wake, Minutes(1435));
    }

    #[test]
    fn wake_clamp_leaves_naps_fixed() {
        let c = cfg().with_wake_policy(WakePolicy::Clamp);
        let s = reference();
        let out = apply_drag(&s, DragTarget::Wake, Minutes(700), &c).unwrap();
        assert_eq!(out.wake, Minutes(600 - 15));
        assert_eq!(out.naps, s.naps);
        assert_eq!(out.bedtime, s.bedtime);
        let out = apply_drag(&s, DragTarget::Wake, Minutes(400), &c).unwrap();
        assert_eq!(out.wake, Minutes(400));
    }

    #[test]
    fn wake_clamp_without_naps_keeps_an_hour() {
        let c = cfg().with_wake_policy(WakePolicy::Clamp);
        let s = Schedule::new(Minutes(420), vec![], Minutes(720));
        let out = apply_drag(&s, DragTarget::Wake, Minutes(900), &c).unwrap();
        assert_eq!(out.wake, Minutes(720 - 60));
        assert_eq!(out.bedtime, Minutes(720));
        let out = apply_drag(&s, DragTarget::Wake, Minutes(-40), &c).unwrap();
        assert_eq!(out.wake, Minutes(0));
    }

    #[test]
    fn off_grid_wake_shifts_by_the_dragged_amount() {
        let s = generate(6, 3, Minutes(452), &cfg());
        let out = apply_drag(&s, DragTarget::Wake, Minutes(452 + 30), &cfg()).unwrap();
        assert_eq!(out, s.shifted(30));
        // A 13-minute pull snaps to 15, keeping the 2-minute offset.
        let out = apply_drag(&s, DragTarget::Wake, Minutes(452 + 13), &cfg()).unwrap();
        assert_eq!(out.wake, Minutes(467));
    }

    #[test]
    fn off_grid_boundaries_stay_put_under_their_own_position() {
        // The 2-3 month band's 83-minute naps end off the grid.
        let s = generate(2, 4, Minutes(420), &cfg());
        assert_eq!(s.naps[0], NapBlock::new(Minutes(495), Minutes(578)));
        let out = apply_drag(&s, DragTarget::NapEnd(0), Minutes(578), &cfg()).unwrap();
        assert_eq!(out, s);
        let out = apply_drag(&s, DragTarget::NapEnd(0), Minutes(584), &cfg()).unwrap();
        assert_eq!(out.naps[0].end, Minutes(583));
    }

    #[test]
    fn bedtime_bounds() {
        let s = reference();
        let early = apply_drag(&s, DragTarget::Bedtime, Minutes(0), &cfg()).unwrap();
        assert_eq!(early.bedtime, Minutes(1080 + 15));
        let late = apply_drag(&s, DragTarget::Bedtime, Minutes(1500), &cfg()).unwrap();
        assert_eq!(late.bedtime, Minutes(1500));
    }

    #[test]
    fn bedtime_without_naps_keeps_an_hour() {
        let s = Schedule::new(Minutes(420), vec![], Minutes(1200));
        let out = apply_drag(&s, DragTarget::Bedtime, Minutes(430), &cfg()).unwrap();
        assert_eq!(out.bedtime, Minutes(480));
    }

    #[test]
    fn nap_move_keeps_duration_and_bounds() {
        let s = reference();
        // Grabbed 20 minutes into the second nap.
        let target = DragTarget::NapMove {
            index: 1,
            grab_offset: 20,
        };
        let out = apply_drag(&s, target, Minutes(870), &cfg()).unwrap();
        assert_eq!(out.naps[1], NapBlock::new(Minutes(850), Minutes(925)));

        let out = apply_drag(&s, target, Minutes(2000), &cfg()).unwrap();
        // Next boundary 1050 − gap 15 − duration 75.
        assert_eq!(out.naps[1], NapBlock::new(Minutes(960), Minutes(1035)));

        let out = apply_drag(&s, target, Minutes(0), &cfg()).unwrap();
        assert_eq!(out.naps[1], NapBlock::new(Minutes(690), Minutes(765)));
    }

    #[test]
    fn pointer_is_snapped_before_clamping() {
        let s = reference();
        let out = resolve_drag(&s, DragTarget::NapEnd(1), Minutes(913), &cfg()).unwrap();
        assert_eq!(out.requested, Minutes(915));
        assert_eq!(out.schedule.naps[1].end, Minutes(915));
        assert!(!out.clamped());
        let out = resolve_drag(&s, DragTarget::NapEnd(1), Minutes(1049), &cfg()).unwrap();
        assert!(out.clamped());
        assert_eq!(out.applied, Minutes(1035));
    }

    #[test]
    fn dragging_to_current_position_is_a_no_op() {
        let s = reference();
        for target in [
            DragTarget::Wake,
            DragTarget::Bedtime,
            DragTarget::NapStart(0),
            DragTarget::NapEnd(2),
        ] {
            let here = match target {
                DragTarget::Wake => s.wake,
                DragTarget::Bedtime => s.bedtime,
                DragTarget::NapStart(i) => s.naps[i].start,
                DragTarget::NapEnd(i) => s.naps[i].end,
                DragTarget::NapMove { .. } => unreachable!(),
            };
            assert_eq!(apply_drag(&s, target, here, &cfg()).unwrap(), s);
        }
    }

    #[test]
    fn missing_nap_is_an_error() {
        let s = reference();
        assert_eq!(
            apply_drag(&s, DragTarget::NapStart(3), Minutes(0), &cfg()),
            Err(AdjustError::NapIndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn results_always_pass_check() {
        let s = reference();
        for target in [
            DragTarget::Wake,
            DragTarget::Bedtime,
            DragTarget::NapStart(2),
            DragTarget::NapEnd(1),
            DragTarget::NapMove {
                index: 0,
                grab_offset: 5,
            },
        ] {
            for p in [-3000, 0, 455, 830, 1075, 1440, 9000] {
                let out = apply_drag(&s, target, Minutes(p), &cfg()).unwrap();
                assert_eq!(out.check(&cfg()), Ok(()), "{target:?} to {p}");
            }
        }
    }
}
