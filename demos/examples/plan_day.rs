// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate a day plan and print it with totals and advisories.
//!
//! Settings come from an optional TOML file (see `demos/planner.toml`); command-line flags
//! override the file.
//!
//! Run:
//! - `cargo run -p napline_demos --example plan_day -- --age 7 --naps 3 --wake "6:45 am"`
//! - `cargo run -p napline_demos --example plan_day -- --config demos/planner.toml --clock h24`
//! - `RUST_LOG=napline_schedule=debug cargo run -p napline_demos --example plan_day`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use napline_schedule::time::DurationDisplay;
use napline_schedule::{Minutes, Planner, PlannerConfig, RangeStatus, TimeFormat, parse_time};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
enum Clock {
    #[default]
    H12,
    H24,
}

impl From<Clock> for TimeFormat {
    fn from(clock: Clock) -> Self {
        match clock {
            Clock::H12 => Self::H12,
            Clock::H24 => Self::H24,
        }
    }
}

/// The `[day]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Day {
    age_months: Option<u8>,
    naps: Option<usize>,
    wake: Option<String>,
    format: Option<Clock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    day: Day,
    planner: PlannerConfig,
}

#[derive(Parser, Debug)]
#[command(name = "plan_day", about = "Print a generated nap schedule", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Age in months
    #[arg(long)]
    age: Option<u8>,

    /// Number of naps (0 to 5)
    #[arg(long)]
    naps: Option<usize>,

    /// Morning wake time, e.g. `7:30`, `7:30am` or `19:05`
    #[arg(long)]
    wake: Option<String>,

    /// Clock style for printed times
    #[arg(long, value_enum)]
    clock: Option<Clock>,

    /// Ignore the bedtime ceiling
    #[arg(long)]
    no_ceiling: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load(path: &Path) -> Result<FileConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn label(status: RangeStatus) -> &'static str {
    match status {
        RangeStatus::Below => "  (short for age)",
        RangeStatus::Within => "",
        RangeStatus::Above => "  (long for age)",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let file = match &cli.config {
        Some(path) => load(path)?,
        None => FileConfig::default(),
    };

    let mut config = file.planner;
    if cli.no_ceiling {
        config = config.without_ceiling();
    }
    config.validate().context("invalid planner settings")?;

    let age = cli.age.or(file.day.age_months).unwrap_or(6);
    let naps = cli.naps.or(file.day.naps).unwrap_or(3);
    let wake_text = cli
        .wake
        .or(file.day.wake)
        .unwrap_or_else(|| String::from("7:00"));
    let wake = parse_time(&wake_text).with_context(|| format!("wake time {wake_text:?}"))?;
    let format = TimeFormat::from(cli.clock.or(file.day.format).unwrap_or_default());

    tracing::info!(age, naps, wake = %wake.display(format), "planning day");
    let planner = Planner::new(age, naps, wake, config);
    let schedule = planner.schedule();
    let assessment = planner.assess();

    let at = |m: Minutes| format!("{:>8}", m.display(format).to_string());

    println!("{}  wake", at(schedule.wake));
    let awake = schedule.awake_windows();
    for (i, nap) in schedule.naps.iter().enumerate() {
        println!(
            "{}  awake {}{}",
            " ".repeat(8),
            DurationDisplay(awake[i]),
            label(assessment.awake[i])
        );
        println!(
            "{}  nap {} until {} ({}){}",
            at(nap.start),
            i + 1,
            nap.end.display(format),
            DurationDisplay(nap.duration()),
            label(assessment.naps[i])
        );
    }
    if let Some(last) = awake.last() {
        println!(
            "{}  awake {}{}",
            " ".repeat(8),
            DurationDisplay(*last),
            assessment.awake.last().map_or("", |s| label(*s))
        );
    }
    println!("{}  bedtime", at(schedule.bedtime));
    println!();
    println!("day sleep    {}", DurationDisplay(schedule.total_day_sleep()));
    println!("night sleep  {}", DurationDisplay(schedule.night_sleep()));
    println!("total sleep  {}", DurationDisplay(schedule.total_sleep()));
    println!("total awake  {}", DurationDisplay(schedule.total_awake()));

    if planner.bedtime_capped() {
        println!("\nbedtime was pulled in to the configured ceiling");
    }
    if !assessment.is_clear() {
        let names: Vec<&str> = assessment.flags.iter_names().map(|(n, _)| n).collect();
        println!("\nadvisories: {}", names.join(", "));
    }
    Ok(())
}
