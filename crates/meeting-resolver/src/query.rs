//! Resolve a meeting request against a day of existing events.

use serde::{Deserialize, Serialize};

use crate::error::{ResolverError, Result};
use crate::event::{Event, MeetingRequest};
use crate::mandatory::mandatory_slots;
use crate::optional::{best_fit_report, Schedules};
use crate::time_range::{TimeRange, WHOLE_DAY};

/// Slots for a meeting, along with how the optional attendees fared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Candidate slots sorted by start. Each is at least as long as the request.
    pub slots: Vec<TimeRange>,
    /// How many optional attendees can join in the returned slots.
    pub optional_attendees_accommodated: usize,
    /// Optional attendees that have no usable slot at all, in name order.
    pub pruned_optional_attendees: Vec<String>,
}

/// Find every slot where the meeting in `request` could take place.
///
/// Mandatory attendees are hard constraints. Among the slots that satisfy
/// them, those accommodating the largest number of optional attendees are
/// returned; if no optional attendee fits, the mandatory-only slots are
/// returned instead. A request with no mandatory attendees is decided purely by
/// its optional attendees.
///
/// # Errors
/// Returns `ResolverError::InvalidArgument` if the request duration is negative
/// or any event has a negative start or duration. Nothing is computed in that case.
pub fn query(events: &[Event], request: &MeetingRequest) -> Result<Vec<TimeRange>> {
    query_report(events, request).map(|resolution| resolution.slots)
}

/// Check a request and its events before any slot is computed.
///
/// # Errors
/// Returns `ResolverError::InvalidArgument` for a negative request duration or
/// for the first event whose range is invalid, naming that event.
pub fn validate_inputs(events: &[Event], request: &MeetingRequest) -> Result<()> {
    request.validate()?;
    for event in events {
        event.when.validate().map_err(|err| match err {
            ResolverError::InvalidArgument(msg) => {
                ResolverError::InvalidArgument(format!("event '{}': {}", event.title, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}

/// Same as [`query`], but also reports the optional-attendee outcome.
pub fn query_report(events: &[Event], request: &MeetingRequest) -> Result<Resolution> {
    validate_inputs(events, request)?;

    if request.duration >= WHOLE_DAY.duration {
        return Ok(Resolution::default());
    }
    let duration = request.duration;

    tracing::debug!(
        events = events.len(),
        mandatory = request.attendees.len(),
        optional = request.optional_attendees.len(),
        duration,
        "resolving meeting slots"
    );

    let mandatory_events = events
        .iter()
        .filter(|event| event.involves_any(&request.attendees));
    let mandatory = mandatory_slots(mandatory_events, duration, &[WHOLE_DAY]);

    if request.optional_attendees.is_empty() {
        return Ok(Resolution {
            slots: mandatory,
            ..Resolution::default()
        });
    }

    let schedules = optional_schedules(events, request);
    let fit = best_fit_report(duration, &mandatory, &schedules);

    if !request.attendees.is_empty() && fit.slots.is_empty() {
        return Ok(Resolution {
            slots: mandatory,
            optional_attendees_accommodated: 0,
            pruned_optional_attendees: fit.pruned,
        });
    }

    Ok(Resolution {
        slots: fit.slots,
        optional_attendees_accommodated: fit.attendees_accommodated,
        pruned_optional_attendees: fit.pruned,
    })
}

/// Group events by the optional attendees they involve. Every optional
/// attendee gets an entry, even with no events.
fn optional_schedules<'a>(events: &'a [Event], request: &MeetingRequest) -> Schedules<'a> {
    let mut schedules: Schedules<'a> = request
        .optional_attendees
        .iter()
        .map(|name| (name.clone(), Vec::new()))
        .collect();
    for event in events {
        for name in &event.attendees {
            if let Some(schedule) = schedules.get_mut(name) {
                schedule.push(event);
            }
        }
    }
    schedules
}
