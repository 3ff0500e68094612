//! WASM bindings for meeting-resolver.
//!
//! Exposes slot resolution and free-time partitioning to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings, using the
//! schedule document format from `meeting_resolver::document`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-resolver-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-resolver-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_resolver_wasm.wasm
//! ```

use meeting_resolver::clock::parse_time_of_day;
use meeting_resolver::document::{resolution_to_json, slots_to_json};
use meeting_resolver::mandatory::filter_by_duration;
use meeting_resolver::{query_report, repartition, ScheduleDocument, TimeRange, WHOLE_DAY};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Input format for busy ranges passed from JavaScript.
#[derive(Deserialize)]
struct RangeInput {
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Plain-Rust implementations, kept free of `JsValue` so they run natively
// ---------------------------------------------------------------------------

fn resolve(document_json: &str, explain: bool) -> Result<String, String> {
    let doc = ScheduleDocument::from_json(document_json).map_err(|e| e.to_string())?;
    let resolution = query_report(&doc.events, &doc.request).map_err(|e| e.to_string())?;
    let json = if explain {
        resolution_to_json(&resolution)
    } else {
        slots_to_json(&resolution.slots)
    };
    json.map_err(|e| format!("Serialization error: {}", e))
}

fn free_ranges_json(busy_json: &str, min_duration: i64) -> Result<String, String> {
    let inputs: Vec<RangeInput> =
        serde_json::from_str(busy_json).map_err(|e| format!("Invalid ranges JSON: {}", e))?;

    let mut free = vec![WHOLE_DAY];
    for input in inputs {
        let start = parse_time_of_day(&input.start).map_err(|e| e.to_string())?;
        let end = parse_time_of_day(&input.end).map_err(|e| e.to_string())?;
        let busy = TimeRange::from_start_end(start, end, false);
        busy.validate().map_err(|e| e.to_string())?;
        free = repartition(&free, busy);
    }

    slots_to_json(&filter_by_duration(free, min_duration))
        .map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve the slots for the meeting described by a schedule document.
///
/// Returns a JSON string containing an array of `{start, end, duration}`
/// objects with `HH:MM` times.
#[wasm_bindgen(js_name = "resolveMeeting")]
pub fn resolve_meeting(document_json: &str) -> Result<String, JsValue> {
    resolve(document_json, false).map_err(|e| JsValue::from_str(&e))
}

/// Like `resolveMeeting`, but returns `{slots, optional_attendees_accommodated,
/// pruned_optional_attendees}`.
#[wasm_bindgen(js_name = "resolveMeetingReport")]
pub fn resolve_meeting_report(document_json: &str) -> Result<String, JsValue> {
    resolve(document_json, true).map_err(|e| JsValue::from_str(&e))
}

/// Free ranges of the day left after removing a list of busy ranges.
///
/// `busy_json` must be a JSON array of `{start, end}` objects with `HH:MM`
/// strings. Only free ranges of at least `min_duration` minutes are returned.
#[wasm_bindgen(js_name = "freeRanges")]
pub fn free_ranges(busy_json: &str, min_duration: i32) -> Result<String, JsValue> {
    free_ranges_json(busy_json, i64::from(min_duration)).map_err(|e| JsValue::from_str(&e))
}
