//! Half-open spans of minutes within a single day.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::format_time_of_day;
use crate::error::{ResolverError, Result};

/// First minute of the day.
pub const START_OF_DAY: i64 = 0;

/// Last minute of the day, inclusive.
pub const END_OF_DAY: i64 = 24 * 60 - 1;

/// The whole day, `[00:00, 24:00)`.
pub const WHOLE_DAY: TimeRange = TimeRange::from_start_end(START_OF_DAY, END_OF_DAY, true);

/// A half-open range `[start, start + duration)` measured in minutes since midnight.
///
/// The derived ordering compares `start` first and `duration` second, which is
/// the same as ordering by start and then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub duration: i64,
}

impl TimeRange {
    pub const fn from_start_duration(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    /// Build a range from its two endpoints. When `inclusive` is set the range
    /// also covers the minute at `end`.
    pub const fn from_start_end(start: i64, end: i64, inclusive: bool) -> Self {
        let end = if inclusive { end + 1 } else { end };
        Self {
            start,
            duration: end - start,
        }
    }

    pub const fn end(&self) -> i64 {
        self.start + self.duration
    }

    pub const fn is_empty(&self) -> bool {
        self.duration == 0
    }

    /// Two ranges overlap when they share at least one minute.
    ///
    /// Adjacent ranges (one ends exactly where the other starts) do not overlap,
    /// and an empty range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.max(other.start) < self.end().min(other.end())
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains_point(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end()
    }

    /// Whether `other` lies entirely within this range. An empty `other` is
    /// contained when its start point is.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if other.is_empty() {
            return self.contains_point(other.start);
        }
        self.start <= other.start && other.end() <= self.end()
    }

    /// Split into `[start, at)` and `[at, end)`.
    ///
    /// Returns `None` unless `at` lies strictly inside the range, so neither half
    /// is ever empty.
    pub fn split(&self, at: i64) -> Option<(TimeRange, TimeRange)> {
        if self.start < at && at < self.end() {
            Some((
                TimeRange::from_start_end(self.start, at, false),
                TimeRange::from_start_end(at, self.end(), false),
            ))
        } else {
            None
        }
    }

    /// Reject ranges that cannot describe a span of the day.
    ///
    /// # Errors
    /// Returns `ResolverError::InvalidArgument` when the start or the duration is
    /// negative, or when the end does not fit in an `i64`.
    pub fn validate(&self) -> Result<()> {
        if self.start < START_OF_DAY {
            return Err(ResolverError::InvalidArgument(format!(
                "range starting at {} starts before the start of the day",
                format_time_of_day(self.start)
            )));
        }
        if self.duration < 0 {
            return Err(ResolverError::InvalidArgument(format!(
                "range starting at {} has negative duration {}",
                format_time_of_day(self.start),
                self.duration
            )));
        }
        if self.start.checked_add(self.duration).is_none() {
            return Err(ResolverError::InvalidArgument(format!(
                "range starting at minute {} with duration {} ends past the representable range",
                self.start, self.duration
            )));
        }
        Ok(())
    }

    /// Comparator ordering ranges by ascending start.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Comparator ordering ranges by ascending end.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end().cmp(&b.end())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            format_time_of_day(self.start),
            format_time_of_day(self.end())
        )
    }
}
