//! Tests for the optional-attendee search.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use meeting_resolver::optional::Schedules;
use meeting_resolver::{best_fit, best_fit_report, Event, TimeRange, WHOLE_DAY};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn range(start: i64, end: i64) -> TimeRange {
    TimeRange::from_start_end(start, end, false)
}

fn busy(who: &str, start: i64, end: i64) -> Event {
    Event::new(format!("{who} busy"), range(start, end), [who])
}

/// Build schedules keyed by each event's single attendee.
fn schedules<'a>(names: &[&str], events: &'a [Event]) -> Schedules<'a> {
    let mut map: Schedules<'a> = names.iter().map(|n| (n.to_string(), Vec::new())).collect();
    for event in events {
        for name in &event.attendees {
            if let Some(list) = map.get_mut(name) {
                list.push(event);
            }
        }
    }
    map
}

// ── Pruning ─────────────────────────────────────────────────────────────────

#[test]
fn no_schedules_returns_partition() {
    let fit = best_fit_report(30, &[WHOLE_DAY], &BTreeMap::new());
    assert_eq!(fit.slots, vec![WHOLE_DAY]);
    assert_eq!(fit.attendees_accommodated, 0);
    assert!(fit.pruned.is_empty());
}

#[test]
fn all_pruned_returns_duration_filtered_partition() {
    let events = vec![busy("A", 0, 1440), busy("B", 0, 1440)];
    let partition = vec![range(0, 20), range(100, 200)];
    let fit = best_fit_report(30, &partition, &schedules(&["A", "B"], &events));
    assert_eq!(fit.slots, vec![range(100, 200)]);
    assert_eq!(fit.pruned, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn pruned_attendee_does_not_change_result() {
    let events = vec![
        busy("A", 600, 660),
        busy("B", 660, 720),
        busy("C", 0, 1440),
    ];
    let with_c = best_fit_report(60, &[WHOLE_DAY], &schedules(&["A", "B", "C"], &events));
    let without_c = best_fit_report(60, &[WHOLE_DAY], &schedules(&["A", "B"], &events));
    assert_eq!(with_c.slots, without_c.slots);
    assert_eq!(with_c.attendees_accommodated, without_c.attendees_accommodated);
    assert_eq!(with_c.pruned, vec!["C".to_string()]);
}

// ── Search ──────────────────────────────────────────────────────────────────

#[test]
fn everyone_fits_together() {
    let events = vec![busy("A", 600, 660), busy("B", 660, 720)];
    let slots = best_fit(60, &[WHOLE_DAY], &schedules(&["A", "B"], &events));
    assert_eq!(slots, vec![range(0, 600), range(720, 1440)]);
}

#[test]
fn tied_groups_are_all_reported() {
    // A is free only in the morning, B only in the evening, C all day.
    // {A, C} and {B, C} both reach two attendees; {A, B} is impossible.
    let events = vec![busy("A", 480, 1440), busy("B", 0, 960)];
    let fit = best_fit_report(60, &[WHOLE_DAY], &schedules(&["A", "B", "C"], &events));
    assert_eq!(fit.attendees_accommodated, 2);
    assert_eq!(fit.slots, vec![range(0, 480), range(960, 1440)]);
}

#[test]
fn larger_group_beats_smaller_group() {
    // A and B share 09:00-10:00; C can only make the afternoon, alone.
    let events = vec![
        busy("A", 0, 540),
        busy("A", 600, 1440),
        busy("B", 0, 480),
        busy("B", 660, 1440),
        busy("C", 0, 780),
    ];
    let fit = best_fit_report(30, &[WHOLE_DAY], &schedules(&["A", "B", "C"], &events));
    assert_eq!(fit.attendees_accommodated, 2);
    assert_eq!(fit.slots, vec![range(540, 600)]);
}

#[test]
fn result_does_not_depend_on_attendee_names() {
    let events = vec![busy("A", 480, 1440), busy("B", 0, 960)];
    let forward = best_fit(60, &[WHOLE_DAY], &schedules(&["A", "B", "C"], &events));

    let renamed = vec![busy("Z", 480, 1440), busy("Y", 0, 960)];
    let backward = best_fit(60, &[WHOLE_DAY], &schedules(&["Z", "Y", "X"], &renamed));
    assert_eq!(forward, backward);
}

#[test]
fn tied_groups_may_share_less_than_the_duration() {
    // A's and B's free ranges overlap by 100 minutes, too little for a
    // 200-minute meeting, so each is reported on its own.
    let events = vec![busy("A", 600, 1440), busy("B", 0, 500)];
    let fit = best_fit_report(200, &[WHOLE_DAY], &schedules(&["A", "B"], &events));
    assert_eq!(fit.attendees_accommodated, 1);
    assert_eq!(fit.slots, vec![range(0, 600), range(500, 1440)]);
}

#[test]
fn search_is_limited_to_the_given_partition() {
    let events = vec![busy("A", 0, 300)];
    let partition = vec![range(200, 400), range(800, 900)];
    let slots = best_fit(60, &partition, &schedules(&["A"], &events));
    assert_eq!(slots, vec![range(300, 400), range(800, 900)]);
}

#[test]
fn many_attendees_with_one_shared_hour() {
    // Twelve attendees, each blocked for one morning hour and from a staggered
    // evening start. All of them share 00:00-05:00 and 11:00-13:00.
    let names: Vec<String> = (0..12).map(|i| format!("P{i:02}")).collect();
    let events: Vec<Event> = names
        .iter()
        .enumerate()
        .flat_map(|(i, name)| {
            let morning = 60 * (i as i64 % 6) + 300;
            vec![
                Event::new("morning", range(morning, morning + 60), [name.as_str()]),
                Event::new("evening", range(780 + 30 * i as i64, 1440), [name.as_str()]),
            ]
        })
        .collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let fit = best_fit_report(60, &[WHOLE_DAY], &schedules(&name_refs, &events));
    assert_eq!(fit.attendees_accommodated, 12);
    assert_eq!(fit.slots, vec![range(0, 300), range(660, 780)]);
}

#[test]
fn many_compatible_attendees_resolve_quickly() {
    let names: Vec<String> = (0..24).map(|i| format!("P{i:02}")).collect();
    let events: Vec<Event> = names.iter().map(|name| busy(name, 600, 660)).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let started = Instant::now();
    let fit = best_fit_report(30, &[WHOLE_DAY], &schedules(&name_refs, &events));
    assert!(started.elapsed() < Duration::from_secs(2), "{:?}", started.elapsed());

    assert_eq!(fit.attendees_accommodated, 24);
    assert_eq!(fit.slots, vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn one_incompatible_attendee_ranked_first_does_not_slow_the_search() {
    // "A" is free only while everyone else is busy.
    let mut names: Vec<String> = (0..20).map(|i| format!("P{i:02}")).collect();
    let mut events: Vec<Event> = names.iter().map(|name| busy(name, 600, 660)).collect();
    events.push(busy("A", 0, 600));
    events.push(busy("A", 660, 1440));
    names.push("A".to_string());
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let started = Instant::now();
    let fit = best_fit_report(30, &[WHOLE_DAY], &schedules(&name_refs, &events));
    assert!(started.elapsed() < Duration::from_secs(2), "{:?}", started.elapsed());

    assert_eq!(fit.attendees_accommodated, 20);
    assert_eq!(fit.slots, vec![range(0, 600), range(660, 1440)]);
}
