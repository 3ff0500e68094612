//! Free slots that satisfy a fixed set of attendees.

use crate::event::Event;
use crate::partition::repartition;
use crate::time_range::TimeRange;

/// Fold every event into `partition` and keep the free ranges that can hold a
/// meeting of `duration` minutes.
///
/// `events` should already be restricted to the events that matter for the
/// attendees in question. Their order does not affect the result. Returned
/// ranges are sorted by start.
pub fn mandatory_slots<'a, I>(
    events: I,
    duration: i64,
    partition: &[TimeRange],
) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    let free = events
        .into_iter()
        .fold(partition.to_vec(), |free, event| repartition(&free, event.when));
    filter_by_duration(free, duration)
}

/// Keep only the ranges at least `duration` minutes long.
pub fn filter_by_duration(ranges: Vec<TimeRange>, duration: i64) -> Vec<TimeRange> {
    ranges
        .into_iter()
        .filter(|range| range.duration >= duration)
        .collect()
}
