//! JSON schedule documents shared by the command-line and WASM front ends.
//!
//! Input shape:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "start": "09:00", "end": "09:30", "attendees": ["Alice"]}
//!   ],
//!   "request": {"duration": 30, "attendees": ["Alice"], "optional_attendees": ["Bob"]}
//! }
//! ```
//!
//! Event times are either `HH:MM` strings (`24:00` marks the end of the day) or
//! integer minutes since midnight. Output slots carry `HH:MM` strings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::clock::{format_time_of_day, parse_time_of_day};
use crate::error::{ResolverError, Result};
use crate::event::{Event, MeetingRequest};
use crate::query::Resolution;
use crate::time_range::TimeRange;

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeOfDay {
    Minutes(i64),
    Clock(String),
}

impl TimeOfDay {
    fn minutes(&self) -> Result<i64> {
        match self {
            TimeOfDay::Minutes(m) => Ok(*m),
            TimeOfDay::Clock(s) => parse_time_of_day(s),
        }
    }
}

#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    title: String,
    start: TimeOfDay,
    end: TimeOfDay,
    #[serde(default)]
    attendees: BTreeSet<String>,
}

#[derive(Deserialize)]
struct ScheduleInput {
    #[serde(default)]
    events: Vec<EventInput>,
    request: MeetingRequest,
}

/// A parsed day of events plus the meeting to place in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDocument {
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl ScheduleDocument {
    /// # Errors
    /// Returns `ResolverError::Document` for malformed JSON and
    /// `ResolverError::InvalidTime` for an unparseable clock time. An event whose
    /// length does not fit in an `i64` is `ResolverError::InvalidArgument`; other
    /// range checks are left to [`crate::validate_inputs`].
    pub fn from_json(json: &str) -> Result<Self> {
        let input: ScheduleInput = serde_json::from_str(json)?;
        let events = input
            .events
            .into_iter()
            .map(|e| {
                let start = e.start.minutes()?;
                let end = e.end.minutes()?;
                let duration = end.checked_sub(start).ok_or_else(|| {
                    ResolverError::InvalidArgument(format!(
                        "event '{}' spans minutes {} to {}, which is out of range",
                        e.title, start, end
                    ))
                })?;
                Ok(Event {
                    title: e.title,
                    when: TimeRange::from_start_duration(start, duration),
                    attendees: e.attendees,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            events,
            request: input.request,
        })
    }
}

/// A slot as written to output documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotOutput {
    pub start: String,
    pub end: String,
    pub duration: i64,
}

impl From<&TimeRange> for SlotOutput {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_time_of_day(range.start),
            end: format_time_of_day(range.end()),
            duration: range.duration,
        }
    }
}

#[derive(Serialize)]
struct ResolutionOutput<'a> {
    slots: Vec<SlotOutput>,
    optional_attendees_accommodated: usize,
    pruned_optional_attendees: &'a [String],
}

/// Serialize slots as a JSON array of `{start, end, duration}` objects.
pub fn slots_to_json(slots: &[TimeRange]) -> Result<String> {
    let out: Vec<SlotOutput> = slots.iter().map(SlotOutput::from).collect();
    Ok(serde_json::to_string(&out)?)
}

/// Serialize a full resolution, including the optional-attendee outcome.
pub fn resolution_to_json(resolution: &Resolution) -> Result<String> {
    let out = ResolutionOutput {
        slots: resolution.slots.iter().map(SlotOutput::from).collect(),
        optional_attendees_accommodated: resolution.optional_attendees_accommodated,
        pruned_optional_attendees: &resolution.pruned_optional_attendees,
    };
    Ok(serde_json::to_string(&out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clock_and_minute_times() {
        let doc = ScheduleDocument::from_json(
            r#"{
                "events": [
                    {"title": "A", "start": "09:00", "end": "10:00", "attendees": ["x"]},
                    {"start": 720, "end": "24:00", "attendees": ["y"]}
                ],
                "request": {"duration": 30, "attendees": ["x"]}
            }"#,
        )
        .unwrap();

        assert_eq!(doc.events.len(), 2);
        assert_eq!(doc.events[0].when, TimeRange::from_start_duration(540, 60));
        assert_eq!(doc.events[1].when, TimeRange::from_start_duration(720, 720));
        assert!(doc.events[1].title.is_empty());
        assert_eq!(doc.request.duration, 30);
        assert!(doc.request.optional_attendees.is_empty());
    }

    #[test]
    fn bad_clock_time_is_reported() {
        let err = ScheduleDocument::from_json(
            r#"{"events": [{"start": "9am", "end": "10:00"}], "request": {"duration": 30}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ResolverError::InvalidTime(_)));
    }

    #[test]
    fn event_length_overflow_is_invalid_argument() {
        let err = ScheduleDocument::from_json(
            r#"{
                "events": [{"title": "Far", "start": -9223372036854775808, "end": 10}],
                "request": {"duration": 30}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ResolverError::InvalidArgument(_)));
    }

    #[test]
    fn missing_request_is_a_document_error() {
        let err = ScheduleDocument::from_json(r#"{"events": []}"#).unwrap_err();
        assert!(matches!(err, ResolverError::Document(_)));
    }

    #[test]
    fn slots_serialize_with_clock_times() {
        let json = slots_to_json(&[TimeRange::from_start_duration(600, 840)]).unwrap();
        assert_eq!(json, r#"[{"start":"10:00","end":"24:00","duration":840}]"#);
    }
}
