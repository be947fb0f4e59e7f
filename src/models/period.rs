//! Class period model and parser.
//!
//! A period is a half-open time interval `[start, end)` in minutes since
//! midnight, displayed as a 12-hour clock range such as
//! `"7:00 AM - 8:30 AM"`. Parsing accepts case-insensitive meridiems;
//! rendering always produces the fixed-case canonical form, so
//! parse → render → parse is stable.
//!
//! No timezone or midnight wraparound is modeled: both endpoints fall on
//! the same calendar day and `end > start`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A class period: half-open interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// End (minutes since midnight, exclusive). Always greater than start.
    pub end_min: u16,
}

/// Error for a period string that does not match `"H:MM AM - H:MM PM"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed period {text:?}: {reason}")]
pub struct MalformedPeriod {
    /// The offending input text.
    pub text: String,
    /// What failed to parse.
    pub reason: &'static str,
}

impl MalformedPeriod {
    fn new(text: &str, reason: &'static str) -> Self {
        Self {
            text: text.to_string(),
            reason,
        }
    }
}

impl Period {
    /// Creates a period from raw minute offsets.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Creates a period from a start time and a fixed duration.
    pub fn starting_at(start_min: u16, duration_min: u16) -> Self {
        Self {
            start_min,
            end_min: start_min + duration_min,
        }
    }

    /// Duration of this period in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min - self.start_min
    }

    /// Whether two periods overlap (half-open test).
    ///
    /// Back-to-back periods (`self.end_min == other.start_min`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }

    /// Whether `other` starts exactly where this period ends.
    #[inline]
    pub fn abuts(&self, other: &Self) -> bool {
        self.end_min == other.start_min
    }

    /// Extends this period to cover a contiguous successor.
    pub fn joined_with(&self, other: &Self) -> Self {
        Self {
            start_min: self.start_min,
            end_min: other.end_min,
        }
    }
}

/// Parses one `"H:MM AM"` token into minutes since midnight.
///
/// Standard 12-hour rule: `12 AM → 0`, `12 PM → 720`, otherwise
/// `h*60 + m` plus `720` when PM.
fn parse_clock(token: &str, full: &str) -> Result<u16, MalformedPeriod> {
    let mut parts = token.split_whitespace();
    let time = parts
        .next()
        .ok_or_else(|| MalformedPeriod::new(full, "empty time token"))?;
    let meridiem = parts
        .next()
        .ok_or_else(|| MalformedPeriod::new(full, "missing AM/PM marker"))?;
    if parts.next().is_some() {
        return Err(MalformedPeriod::new(full, "trailing text after AM/PM"));
    }

    let (h, m) = time
        .split_once(':')
        .ok_or_else(|| MalformedPeriod::new(full, "time must be H:MM"))?;
    let hour: u16 = h
        .parse()
        .map_err(|_| MalformedPeriod::new(full, "hour is not a number"))?;
    let minute: u16 = m
        .parse()
        .map_err(|_| MalformedPeriod::new(full, "minute is not a number"))?;
    if !(1..=12).contains(&hour) {
        return Err(MalformedPeriod::new(full, "hour out of 1-12"));
    }
    if minute >= 60 {
        return Err(MalformedPeriod::new(full, "minute out of 0-59"));
    }

    let pm = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => false,
        "PM" => true,
        _ => return Err(MalformedPeriod::new(full, "marker is not AM or PM")),
    };

    let base = if hour == 12 { 0 } else { hour * 60 };
    Ok(base + minute + if pm { 12 * 60 } else { 0 })
}

impl FromStr for Period {
    type Err = MalformedPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lhs, rhs) = s
            .split_once(" - ")
            .ok_or_else(|| MalformedPeriod::new(s, "expected two times separated by \" - \""))?;
        if rhs.contains(" - ") {
            return Err(MalformedPeriod::new(s, "more than two time tokens"));
        }
        let start_min = parse_clock(lhs.trim(), s)?;
        let end_min = parse_clock(rhs.trim(), s)?;
        if end_min <= start_min {
            return Err(MalformedPeriod::new(s, "end is not after start"));
        }
        Ok(Self { start_min, end_min })
    }
}

/// Renders one minute offset as `H:MM AM`/`H:MM PM`.
fn fmt_clock(total_min: u16, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let hour = total_min / 60;
    let minute = total_min % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour_12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    write!(f, "{hour_12}:{minute:02} {suffix}")
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_clock(self.start_min, f)?;
        write!(f, " - ")?;
        fmt_clock(self.end_min, f)
    }
}
