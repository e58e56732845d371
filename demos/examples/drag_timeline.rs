// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pointer gestures on a vertical timeline.
//!
//! Grabs a handle and a nap body, drags them past their neighbors, and prints where the
//! clamping rules stop them.
//!
//! Run:
//! - `cargo run -p napline_demos --example drag_timeline`
//! - `RUST_LOG=napline_adjust=trace cargo run -p napline_demos --example drag_timeline`

use anyhow::{Context, Result};
use kurbo::{Point, Rect};
use napline_adjust::{DragState, Surface, VerticalTimeline, grab_at};
use napline_schedule::{Minutes, Planner, PlannerConfig, Schedule, TimeFormat};
use tracing_subscriber::EnvFilter;

const TOLERANCE: f64 = 6.0;

fn print(schedule: &Schedule) {
    let naps: Vec<String> = schedule
        .naps
        .iter()
        .map(|n| {
            format!(
                "{}-{}",
                n.start.display(TimeFormat::H24),
                n.end.display(TimeFormat::H24)
            )
        })
        .collect();
    println!(
        "  wake {}  naps [{}]  bed {}",
        schedule.wake.display(TimeFormat::H24),
        naps.join(", "),
        schedule.bedtime.display(TimeFormat::H24)
    );
}

/// Press at `down`, move through `path`, release.
fn gesture(
    planner: &mut Planner,
    timeline: &VerticalTimeline,
    down: Point,
    path: &[f64],
) -> Result<()> {
    let config = *planner.config();
    let mut drag = DragState::new();
    let near = planner.schedule().wake;
    let grab = grab_at(timeline, planner.schedule(), down, TOLERANCE)
        .with_context(|| format!("nothing to grab at y = {}", down.y))?;
    let target = drag.begin(grab, timeline.minute_at(down, near), planner.schedule())?;
    println!("grab {target:?}");

    for &y in path {
        let pointer = timeline.minute_at(Point::new(down.x, y), near);
        if let Some(step) = drag.update(planner.schedule_mut(), pointer, &config)? {
            println!(
                "  y {:>6.1} -> asked {} got {}{}",
                y,
                step.requested.display(TimeFormat::H24),
                step.applied.display(TimeFormat::H24),
                if step.clamped() { "  (clamped)" } else { "" }
            );
        }
    }
    drag.end();
    print(planner.schedule());
    planner
        .schedule()
        .check(&config)
        .context("drag broke the schedule")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut planner = Planner::new(6, 3, Minutes::hm(7, 30), PlannerConfig::default());
    // 06:00 to 22:00 over 960 px: one pixel per minute.
    let timeline = VerticalTimeline::new(
        Rect::new(0.0, 0.0, 120.0, 960.0),
        Minutes::hm(6, 0),
        Minutes::hm(22, 0),
    );
    println!("generated:");
    print(planner.schedule());

    // Pull the first nap's end down past the second nap.
    let end0 = timeline.y_of(planner.schedule().naps[0].end);
    gesture(&mut planner, &timeline, Point::new(60.0, end0), &[
        end0 + 20.0,
        end0 + 90.0,
        end0 + 400.0,
    ])?;

    // Carry the middle nap by its body, up into the first nap.
    let mid = planner.schedule().naps[1];
    let body = timeline.nap_rect(&mid).center();
    gesture(&mut planner, &timeline, body, &[
        body.y - 30.0,
        body.y - 300.0,
    ])?;

    // Drag the wake handle later; the whole day follows.
    let wake = timeline.y_of(planner.schedule().wake);
    gesture(&mut planner, &timeline, Point::new(60.0, wake), &[wake + 45.0])?;

    let assessment = planner.assess();
    println!("advisories: {:?}", assessment.flags);
    Ok(())
}
