//! Subtract busy intervals from an ordered partition of free time.
//!
//! A partition is a sorted, pairwise-disjoint list of non-empty free ranges.
//! Removing a busy range only touches the contiguous run of free ranges it
//! overlaps, and only the two ends of that run can leave fragments behind.

use crate::time_range::TimeRange;

/// Remove every minute of `busy` from `partition`.
///
/// `partition` must be sorted by start and pairwise disjoint; the result keeps
/// both properties and never contains an empty range. If `busy` overlaps no
/// free range the partition is returned unchanged.
pub fn repartition(partition: &[TimeRange], busy: TimeRange) -> Vec<TimeRange> {
    let Some(first) = partition.iter().position(|r| r.overlaps(&busy)) else {
        return partition.to_vec();
    };
    // Overlapping ranges are contiguous, so the run ends just before the first
    // range past `first` that no longer overlaps.
    let last = partition[first..]
        .iter()
        .position(|r| !r.overlaps(&busy))
        .map_or(partition.len() - 1, |offset| first + offset - 1);

    let mut result = Vec::with_capacity(partition.len() + 1);
    result.extend_from_slice(&partition[..first]);
    result.extend(splice(partition[first], partition[last], busy).into_iter().flatten());
    result.extend_from_slice(&partition[last + 1..]);
    result
}

/// Resolve the overlap between `busy` and the run `first..=last`, returning the
/// fragment surviving before `busy` and the fragment surviving after it.
fn splice(first: TimeRange, last: TimeRange, busy: TimeRange) -> [Option<TimeRange>; 2] {
    let covers_start = busy.start <= first.start;
    let covers_end = busy.end() >= last.end();

    match (covers_start, covers_end) {
        (true, true) => [None, None],
        (true, false) => [None, tail(last, busy.end())],
        (false, true) => [head(first, busy.start), None],
        (false, false) => [head(first, busy.start), tail(last, busy.end())],
    }
}

fn head(range: TimeRange, at: i64) -> Option<TimeRange> {
    range.split(at).map(|(before, _)| before)
}

fn tail(range: TimeRange, at: i64) -> Option<TimeRange> {
    range.split(at).map(|(_, after)| after)
}
