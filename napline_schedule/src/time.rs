// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minute offsets, display formatting, and time-of-day parsing.
//!
//! ## Overview
//!
//! All schedule arithmetic happens on [`Minutes`], a signed offset from midnight of the
//! wake day. Values are not wrapped during arithmetic: a schedule that runs past midnight
//! carries offsets of 1440 and above. Wrapping into `0..1440` only happens for display,
//! through [`Minutes::wrapped`] and the [`TimeDisplay`] formatter.
//!
//! ## Parsing
//!
//! [`parse_time`] accepts 24-hour (`"07:30"`, `"7:30"`) and 12-hour (`"7:30 AM"`, `"7:30pm"`)
//! inputs. Any value produced by [`TimeDisplay`] parses back to the same wrapped minute.
//!
//! ```
//! use napline_schedule::time::{Minutes, TimeFormat, parse_time};
//!
//! let m = Minutes::hm(19, 45);
//! let shown = m.display(TimeFormat::H12).to_string();
//! assert_eq!(shown, "7:45 PM");
//! assert_eq!(parse_time(&shown), Ok(m));
//! ```

use alloc::string::String;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Default pointer snapping grid, in minutes.
pub const SNAP_STEP: i32 = 5;

/// An offset in minutes from midnight of the wake day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Minutes(pub i32);

impl Minutes {
    /// Midnight at the start of the wake day.
    pub const MIDNIGHT: Self = Self(0);

    /// Build an offset from an hour and minute of the wake day.
    pub const fn hm(hour: i32, minute: i32) -> Self {
        Self(hour * 60 + minute)
    }

    /// The raw minute count.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Normalize into `0..MINUTES_PER_DAY` for display.
    pub const fn wrapped(self) -> Self {
        Self(self.0.rem_euclid(MINUTES_PER_DAY))
    }

    /// Signed distance from `self` to `later`.
    pub const fn until(self, later: Self) -> i32 {
        later.0 - self.0
    }

    /// Round to the nearest multiple of `step`; ties round toward later times.
    ///
    /// A non-positive `step` leaves the value unchanged.
    pub const fn snap(self, step: i32) -> Self {
        if step <= 0 {
            return self;
        }
        let rem = self.0.rem_euclid(step);
        let base = self.0 - rem;
        if rem * 2 >= step {
            Self(base + step)
        } else {
            Self(base)
        }
    }

    /// Bound `self` to `[lo, hi]` without panicking when the bounds cross.
    ///
    /// When `lo > hi` the lower bound wins.
    pub fn bounded(self, lo: Self, hi: Self) -> Self {
        self.min(hi).max(lo)
    }

    /// Formatter for this time of day.
    pub const fn display(self, format: TimeFormat) -> TimeDisplay {
        TimeDisplay {
            minutes: self,
            format,
        }
    }
}

impl Add<i32> for Minutes {
    type Output = Self;

    fn add(self, rhs: i32) -> Self {
        Self(self.0 + rhs)
    }
}

impl AddAssign<i32> for Minutes {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl Sub<i32> for Minutes {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self {
        Self(self.0 - rhs)
    }
}

impl SubAssign<i32> for Minutes {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

impl Sub for Minutes {
    type Output = i32;

    fn sub(self, rhs: Self) -> i32 {
        self.0 - rhs.0
    }
}

impl From<i32> for Minutes {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Clock style used for display strings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `7:30 AM`.
    #[default]
    H12,
    /// `07:30`.
    H24,
}

/// [`fmt::Display`] adapter returned by [`Minutes::display`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeDisplay {
    minutes: Minutes,
    format: TimeFormat,
}

impl fmt::Display for TimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.minutes.wrapped().get();
        let (hour, minute) = (m / 60, m % 60);
        match self.format {
            TimeFormat::H24 => write!(f, "{hour:02}:{minute:02}"),
            TimeFormat::H12 => {
                let suffix = if hour < 12 { "AM" } else { "PM" };
                let hour12 = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                write!(f, "{hour12}:{minute:02} {suffix}")
            }
        }
    }
}

/// Format a time of day as `HH:MM`.
pub fn format_24h(m: Minutes) -> String {
    alloc::format!("{}", m.display(TimeFormat::H24))
}

/// Format a time of day as `h:MM AM|PM`.
pub fn format_12h(m: Minutes) -> String {
    alloc::format!("{}", m.display(TimeFormat::H12))
}

/// [`fmt::Display`] adapter for a span of minutes: `45m`, `2h`, `1h 15m`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DurationDisplay(pub i32);

impl fmt::Display for DurationDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let total = self.0.unsigned_abs();
        let (hours, minutes) = (total / 60, total % 60);
        match (hours, minutes) {
            (0, m) => write!(f, "{m}m"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h {m}m"),
        }
    }
}

/// Human-readable duration string.
pub fn format_duration(minutes: i32) -> String {
    alloc::format!("{}", DurationDisplay(minutes))
}

/// Error returned by [`parse_time`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseTimeError {
    /// The input was empty or only whitespace.
    #[error("empty time string")]
    Empty,
    /// The input is not shaped like `H:MM` with an optional `AM`/`PM` suffix.
    #[error("expected a time like 07:30 or 7:30 PM")]
    Malformed,
    /// Hour outside `0..=23` (24-hour) or `1..=12` (12-hour).
    #[error("hour {0} is out of range")]
    HourOutOfRange(u32),
    /// Minute outside `0..=59`.
    #[error("minute {0} is out of range")]
    MinuteOutOfRange(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

fn split_meridiem(s: &str) -> (&str, Option<Meridiem>) {
    let Some(split) = s.len().checked_sub(2) else {
        return (s, None);
    };
    match (s.get(..split), s.get(split..)) {
        (Some(body), Some(tail)) if tail.eq_ignore_ascii_case("am") => {
            (body.trim_end(), Some(Meridiem::Am))
        }
        (Some(body), Some(tail)) if tail.eq_ignore_ascii_case("pm") => {
            (body.trim_end(), Some(Meridiem::Pm))
        }
        _ => (s, None),
    }
}

fn parse_digits(s: &str, max_len: usize) -> Result<i32, ParseTimeError> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseTimeError::Malformed);
    }
    s.parse().map_err(|_| ParseTimeError::Malformed)
}

/// Parse a time of day into a wrapped [`Minutes`] value.
pub fn parse_time(input: &str) -> Result<Minutes, ParseTimeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseTimeError::Empty);
    }
    let (body, meridiem) = split_meridiem(s);
    let (hour, minute) = body.split_once(':').ok_or(ParseTimeError::Malformed)?;
    let hour = parse_digits(hour, 2)?;
    if minute.len() != 2 {
        return Err(ParseTimeError::Malformed);
    }
    let minute = parse_digits(minute, 2)?;
    if minute > 59 {
        return Err(ParseTimeError::MinuteOutOfRange(minute.unsigned_abs()));
    }
    let hour = match meridiem {
        None if hour <= 23 => hour,
        None => return Err(ParseTimeError::HourOutOfRange(hour.unsigned_abs())),
        Some(_) if hour == 0 || hour > 12 => {
            return Err(ParseTimeError::HourOutOfRange(hour.unsigned_abs()));
        }
        Some(Meridiem::Am) => hour % 12,
        Some(Meridiem::Pm) => hour % 12 + 12,
    };
    Ok(Minutes::hm(hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(Minutes(452).snap(5), Minutes(450));
        assert_eq!(Minutes(453).snap(5), Minutes(455));
        assert_eq!(Minutes(7).snap(5), Minutes(5));
        assert_eq!(Minutes(-3).snap(5), Minutes(-5));
        assert_eq!(Minutes(-2).snap(5), Minutes(0));
        // Ties go later.
        assert_eq!(Minutes(10).snap(4), Minutes(12));
        assert_eq!(Minutes(11).snap(0), Minutes(11));
    }

    #[test]
    fn wrapped_normalizes_into_day() {
        assert_eq!(Minutes(1500).wrapped(), Minutes(60));
        assert_eq!(Minutes(-30).wrapped(), Minutes(1410));
        assert_eq!(Minutes(1439).wrapped(), Minutes(1439));
    }

    #[test]
    fn bounded_prefers_lower_bound_when_crossed() {
        assert_eq!(Minutes(50).bounded(Minutes(10), Minutes(40)), Minutes(40));
        assert_eq!(Minutes(5).bounded(Minutes(10), Minutes(40)), Minutes(10));
        assert_eq!(Minutes(5).bounded(Minutes(40), Minutes(10)), Minutes(40));
    }

    #[test]
    fn formats_both_clocks() {
        assert_eq!(format_24h(Minutes(450)), "07:30");
        assert_eq!(format_12h(Minutes(450)), "7:30 AM");
        assert_eq!(format_12h(Minutes(0)), "12:00 AM");
        assert_eq!(format_12h(Minutes(720)), "12:00 PM");
        assert_eq!(format_12h(Minutes(1230)), "8:30 PM");
        // Past midnight wraps for display.
        assert_eq!(format_24h(Minutes(1450)), "00:10");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(75), "1h 15m");
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(-90), "-1h 30m");
    }

    #[test]
    fn parses_accepted_shapes() {
        assert_eq!(parse_time("07:30"), Ok(Minutes(450)));
        assert_eq!(parse_time(" 7:30 "), Ok(Minutes(450)));
        assert_eq!(parse_time("7:30 pm"), Ok(Minutes(1170)));
        assert_eq!(parse_time("7:30PM"), Ok(Minutes(1170)));
        assert_eq!(parse_time("12:05 AM"), Ok(Minutes(5)));
        assert_eq!(parse_time("12:05 PM"), Ok(Minutes(725)));
        assert_eq!(parse_time("23:59"), Ok(Minutes(1439)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_time(""), Err(ParseTimeError::Empty));
        assert_eq!(parse_time("730"), Err(ParseTimeError::Malformed));
        assert_eq!(parse_time("7:3"), Err(ParseTimeError::Malformed));
        assert_eq!(parse_time("+7:30"), Err(ParseTimeError::Malformed));
        assert_eq!(parse_time("24:00"), Err(ParseTimeError::HourOutOfRange(24)));
        assert_eq!(parse_time("13:00 PM"), Err(ParseTimeError::HourOutOfRange(13)));
        assert_eq!(parse_time("0:15 am"), Err(ParseTimeError::HourOutOfRange(0)));
        assert_eq!(parse_time("7:60"), Err(ParseTimeError::MinuteOutOfRange(60)));
    }
}
