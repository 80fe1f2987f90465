//! Clock-time parsing and arithmetic.
//!
//! Request and corridor times are wall-clock times of day on a single
//! rolling day: no dates, no timezones. Additions wrap past midnight, and a
//! span whose end precedes its start is read as crossing into the next day.

use chrono::{Duration, NaiveTime, Timelike};
use thiserror::Error;

/// A time or duration field that matches neither accepted pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("'{0}' is not a clock time (expected HH:MM or HH.MM)")]
    ClockTime(String),
    #[error("'{0}' is not a duration (expected HH.MM followed by a unit label)")]
    Duration(String),
}

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse "HH:MM" or "HH.MM" into a time of day.
///
/// The dotted form is built from total minutes and folds values past 24:00
/// back onto the clock, so "24.30" reads as 00:30.
pub fn parse_clock_time(text: &str) -> Result<NaiveTime, FormatError> {
    let trimmed = text.trim();
    if let Ok(time) = NaiveTime::parse_from_str(trimmed, "%H:%M") {
        return Ok(time);
    }

    let (hours, minutes) = trimmed
        .split_once('.')
        .ok_or_else(|| FormatError::ClockTime(text.to_string()))?;
    let hours: u32 = hours
        .parse()
        .map_err(|_| FormatError::ClockTime(text.to_string()))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| FormatError::ClockTime(text.to_string()))?;

    Ok(time_from_minutes(
        u64::from(hours) * 60 + u64::from(minutes),
    ))
}

/// Parse "HH.MM <unit>" (e.g. "02.30 hrs") into an elapsed duration.
///
/// Everything after the first space is a unit label and is ignored.
pub fn parse_duration(text: &str) -> Result<Duration, FormatError> {
    let value = text.trim().split(' ').next().unwrap_or("");
    let (hours, minutes) = value
        .split_once('.')
        .ok_or_else(|| FormatError::Duration(text.to_string()))?;
    let hours: u32 = hours
        .parse()
        .map_err(|_| FormatError::Duration(text.to_string()))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| FormatError::Duration(text.to_string()))?;

    Ok(Duration::minutes(
        i64::from(hours) * 60 + i64::from(minutes),
    ))
}

/// Wall-clock addition. Crossing 24:00 wraps onto the next day's clock; the
/// day overflow is discarded.
pub fn add_duration(time: NaiveTime, duration: Duration) -> NaiveTime {
    let (wrapped, _days) = time.overflowing_add_signed(duration);
    wrapped
}

/// An end numerically before its start means the span runs into the next day.
pub fn crosses_midnight(start: NaiveTime, end: NaiveTime) -> bool {
    end < start
}

/// Elapsed time from `start` to `end`, reading `end` as next-day when it
/// precedes `start`. Never negative.
pub fn span_duration(start: NaiveTime, end: NaiveTime) -> Duration {
    let start_minutes = time_to_minutes(start);
    let mut end_minutes = time_to_minutes(end);
    if crosses_midnight(start, end) {
        end_minutes += MINUTES_PER_DAY;
    }
    Duration::minutes(i64::from(end_minutes - start_minutes))
}

/// Zero-padded 24-hour "HH:MM", the single rendering for emitted times.
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn time_from_minutes(total: u64) -> NaiveTime {
    let folded = (total % u64::from(MINUTES_PER_DAY)) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(folded * 60, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(23, 59, 59).expect("valid time"))
}

fn time_to_minutes(t: NaiveTime) -> u32 {
    t.num_seconds_from_midnight() / 60
}

// ===========================================================================
// Tests
// ===========================================================================
