//! Maximize how many optional attendees can share a slot.
//!
//! Given the free ranges that already satisfy every mandatory attendee, this
//! module searches subsets of optional attendees for the largest group that
//! still leaves at least one range long enough for the meeting, and reports the
//! ranges available to every group of that size.
//!
//! The search is a depth-first walk over include/exclude decisions, one
//! attendee at a time, driven by an explicit stack. Each branch carries the
//! free ranges left by the attendees it has included. Adding an attendee whose
//! events leave no usable range ends that branch, and a branch that could not
//! reach the best group size found so far even by including everyone left is
//! dropped. Including is tried first, so when every attendee fits together the
//! answer is found on the first path and every other branch is cut. Worst-case
//! cost is still exponential in the number of surviving optional attendees.

use std::collections::BTreeMap;

use crate::event::Event;
use crate::mandatory::{filter_by_duration, mandatory_slots};
use crate::time_range::TimeRange;

/// Per-attendee events, keyed by attendee name.
///
/// Iteration order of the map fixes the order attendees are considered in.
pub type Schedules<'a> = BTreeMap<String, Vec<&'a Event>>;

/// Outcome of the optional-attendee search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fit {
    /// Ranges available to some largest group of optional attendees, sorted by start.
    pub slots: Vec<TimeRange>,
    /// Size of the largest group. Zero when nobody could be accommodated.
    pub attendees_accommodated: usize,
    /// Attendees with no usable range even on their own, in name order.
    pub pruned: Vec<String>,
}

/// A partial decision: attendees before `next` have been included or skipped,
/// `size` of them included, leaving `free`.
struct Branch {
    next: usize,
    size: usize,
    free: Vec<TimeRange>,
}

/// Slots that accommodate the most optional attendees.
///
/// See [`best_fit_report`] for the full result.
pub fn best_fit(
    duration: i64,
    partition: &[TimeRange],
    schedules: &Schedules<'_>,
) -> Vec<TimeRange> {
    best_fit_report(duration, partition, schedules).slots
}

/// Search for the largest group of optional attendees who can all meet in one
/// of the ranges of `partition`.
///
/// Attendees who cannot fit any range on their own are pruned first. If no
/// attendee survives, `partition` filtered by `duration` is returned with an
/// `attendees_accommodated` of zero. Otherwise the slots are the union of the
/// free ranges of every maximum-size group.
pub fn best_fit_report(duration: i64, partition: &[TimeRange], schedules: &Schedules<'_>) -> Fit {
    let mut pruned = Vec::new();
    let mut candidates: Vec<&[&Event]> = Vec::new();

    for (name, events) in schedules {
        if mandatory_slots(events.iter().copied(), duration, partition).is_empty() {
            tracing::debug!(attendee = %name, "optional attendee has no usable slot, pruning");
            pruned.push(name.clone());
            continue;
        }
        candidates.push(events.as_slice());
    }

    if candidates.is_empty() {
        return Fit {
            slots: filter_by_duration(partition.to_vec(), duration),
            attendees_accommodated: 0,
            pruned,
        };
    }

    let mut best = 0;
    let mut tied: Vec<TimeRange> = Vec::new();
    let mut explored = 0usize;
    let mut stack = vec![Branch {
        next: 0,
        size: 0,
        free: filter_by_duration(partition.to_vec(), duration),
    }];

    while let Some(branch) = stack.pop() {
        explored += 1;
        if branch.size + (candidates.len() - branch.next) < best {
            continue;
        }
        if branch.next == candidates.len() {
            if branch.size > best {
                tracing::trace!(size = branch.size, "larger optional attendee group found");
                best = branch.size;
                tied.clear();
            }
            tied.extend(branch.free);
            continue;
        }

        let with_next =
            mandatory_slots(candidates[branch.next].iter().copied(), duration, &branch.free);
        stack.push(Branch {
            next: branch.next + 1,
            size: branch.size,
            free: branch.free,
        });
        if !with_next.is_empty() {
            stack.push(Branch {
                next: branch.next + 1,
                size: branch.size + 1,
                free: with_next,
            });
        }
    }

    tracing::debug!(
        accommodated = best,
        explored,
        pruned = pruned.len(),
        "optional attendee search finished"
    );

    Fit {
        slots: union_by_start(tied),
        attendees_accommodated: best,
        pruned,
    }
}

/// Sort ranges by start. Distinct maximum-size groups never leave two ranges
/// with the same start, since both groups would then fit together.
fn union_by_start(ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    let mut by_start: BTreeMap<i64, TimeRange> = BTreeMap::new();
    for range in ranges {
        let kept = by_start.entry(range.start).or_insert(range);
        debug_assert_eq!(*kept, range, "tied groups left ranges with the same start");
    }
    by_start.into_values().collect()
}
