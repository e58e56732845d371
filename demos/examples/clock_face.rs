// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging bedtime around a clock dial, across midnight.
//!
//! The dial only knows angles; the minute under the pointer is unwrapped against the
//! handle's current value, so the drag keeps counting past 24:00 instead of jumping back
//! to the morning.
//!
//! Run:
//! - `cargo run -p napline_demos --example clock_face`
//! - `cargo run -p napline_demos --example clock_face -- --half-day`

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::Point;
use napline_adjust::{ClockFace, DialSpan, DragState, Grab, Surface, grab_at};
use napline_schedule::{Minutes, PlannerConfig, TimeFormat, generate};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clock_face", about = "Drag bedtime around a dial", long_about = None)]
struct Cli {
    /// Use a 12-hour dial instead of a 24-hour one
    #[arg(long)]
    half_day: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let span = if cli.half_day {
        DialSpan::HalfDay
    } else {
        DialSpan::Day
    };
    let dial = ClockFace::new(Point::new(200.0, 200.0), 150.0, 24.0, span);
    // A nap-free day ending at 21:30 leaves room to push bedtime past midnight.
    let config = PlannerConfig::default().without_ceiling();
    let mut schedule = generate(20, 0, Minutes::hm(17, 0), &config);
    schedule.bedtime = Minutes::hm(21, 30);

    let down = dial.point_of(schedule.bedtime);
    let grab = grab_at(&dial, &schedule, down, 8.0).context("bedtime handle not found")?;
    if grab != Grab::Handle(napline_schedule::Boundary::Bedtime) {
        anyhow::bail!("expected the bedtime handle, got {grab:?}");
    }
    let mut drag = DragState::new();
    drag.begin(grab, dial.minute_at(down, schedule.bedtime), &schedule)?;

    // Sweep forward in 30-minute steps, three hours in all.
    for step in 1..=6 {
        let target = schedule.bedtime + 30;
        let pt = dial.point_of(target);
        let pointer = dial.minute_at(pt, schedule.bedtime);
        if let Some(update) = drag.update(&mut schedule, pointer, &config)? {
            println!(
                "step {step}: pointer at ({:>5.1}, {:>5.1}) -> bedtime {} (minute {})",
                pt.x,
                pt.y,
                update.applied.display(TimeFormat::H24),
                update.applied.get()
            );
        }
    }
    drag.end();

    println!(
        "night sleep until the next {}: {} minutes",
        schedule.wake.display(TimeFormat::H12),
        schedule.night_sleep()
    );
    Ok(())
}
