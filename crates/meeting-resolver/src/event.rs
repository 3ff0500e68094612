//! Calendar events and meeting requests consumed by the resolver.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ResolverError, Result};
use crate::time_range::TimeRange;

/// An existing commitment that blocks its attendees for `when`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub when: TimeRange,
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        self.attendees.iter().any(|a| people.contains(a))
    }
}

/// A meeting to place: how long it runs and who must or may attend.
///
/// `attendees` are mandatory. `optional_attendees` are accommodated as far as
/// possible. The two sets are expected to be disjoint but this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub duration: i64,
    #[serde(default)]
    pub attendees: BTreeSet<String>,
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        }
    }

    pub fn add_optional_attendee(&mut self, name: impl Into<String>) {
        self.optional_attendees.insert(name.into());
    }

    pub fn with_optional_attendees<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// # Errors
    /// Returns `ResolverError::InvalidArgument` for a negative duration.
    pub fn validate(&self) -> Result<()> {
        if self.duration < 0 {
            return Err(ResolverError::InvalidArgument(format!(
                "requested duration must be non-negative, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}
