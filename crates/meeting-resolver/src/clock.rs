//! Conversion between minute-of-day offsets and `HH:MM` clock strings.
//!
//! `chrono::NaiveTime` has no representation for the exclusive end of the day,
//! so `24:00` is handled here as minute 1440.

use chrono::{NaiveTime, Timelike};

use crate::error::{ResolverError, Result};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse an `HH:MM` string into minutes since midnight.
///
/// `24:00` is accepted and yields 1440, the exclusive end of the day.
///
/// # Errors
/// Returns `ResolverError::InvalidTime` if the string is not a valid 24-hour clock time.
pub fn parse_time_of_day(s: &str) -> Result<i64> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|e| ResolverError::InvalidTime(format!("'{}': {}", s, e)))?;
    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Format minutes since midnight as `HH:MM`.
///
/// Minute 1440 formats as `24:00`. Values outside the day are rendered with the
/// same `HH:MM` shape without wrapping, so a bad range stays visible in output.
pub fn format_time_of_day(minutes: i64) -> String {
    if minutes == MINUTES_PER_DAY {
        return "24:00".to_string();
    }
    let in_day = Some(minutes)
        .filter(|m| (0..MINUTES_PER_DAY).contains(m))
        .and_then(|m| u32::try_from(m * 60).ok())
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0));
    match in_day {
        Some(time) => time.format("%H:%M").to_string(),
        None => {
            let sign = if minutes < 0 { "-" } else { "" };
            let abs = minutes.unsigned_abs();
            format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
        }
    }
}
