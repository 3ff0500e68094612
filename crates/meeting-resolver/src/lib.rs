//! # meeting-resolver
//!
//! Find the times within a single day when a meeting can be held.
//!
//! Given the day's existing events and a [`MeetingRequest`] (a duration, a set of
//! mandatory attendees and a set of optional attendees), the resolver returns
//! every free range that fits the meeting around the mandatory attendees'
//! schedules, narrowed to the ranges that also suit the largest possible number
//! of optional attendees.
//!
//! All computation is pure: inputs are borrowed, working partitions are local to
//! each call, and the same inputs always give the same slots.
//!
//! ## Modules
//!
//! - [`time_range`]: Minute-of-day ranges and the whole-day constants
//! - [`event`]: Calendar events and meeting requests
//! - [`partition`]: Subtract a busy range from an ordered partition of free time
//! - [`mandatory`]: Free slots for a fixed set of attendees
//! - [`optional`]: Search for the largest group of optional attendees sharing a slot
//! - [`query`]: Top-level resolution combining the above
//! - [`clock`]: `HH:MM` parsing and formatting
//! - [`document`]: JSON schedule documents for the front ends
//! - [`error`]: Error types

pub mod clock;
pub mod document;
pub mod error;
pub mod event;
pub mod mandatory;
pub mod optional;
pub mod partition;
pub mod query;
pub mod time_range;

pub use document::ScheduleDocument;
pub use error::ResolverError;
pub use event::{Event, MeetingRequest};
pub use mandatory::mandatory_slots;
pub use optional::{best_fit, best_fit_report, Fit};
pub use partition::repartition;
pub use query::{query, query_report, validate_inputs, Resolution};
pub use time_range::{TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
