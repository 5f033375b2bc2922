//! Integration tests for date display and the manual clock.

use std::time::Duration;

use eventdesk::util::time::{format_event_date, parse_event_date, Clock, ManualClock};

#[test]
fn parse_event_date_accepts_iso_dates() {
    let date = parse_event_date("2025-01-28").expect("should parse");
    assert_eq!(date.to_string(), "2025-01-28");
}

#[test]
fn parse_event_date_trims_whitespace() {
    assert!(parse_event_date("  2025-01-28  ").is_some());
}

#[test]
fn parse_event_date_rejects_invalid() {
    assert!(parse_event_date("").is_none());
    assert!(parse_event_date("2025-13-40").is_none());
    assert!(parse_event_date("28/01/2025").is_none());
}

#[test]
fn format_event_date_long_form() {
    assert_eq!(format_event_date("2025-01-28"), "Tuesday, January 28, 2025");
}

#[test]
fn format_event_date_keeps_free_text() {
    assert_eq!(format_event_date("TBD"), "TBD");
}

#[test]
fn manual_clock_only_moves_when_advanced() {
    let clock = ManualClock::new();
    let t0 = clock.now();
    assert_eq!(clock.now(), t0);
    clock.advance(Duration::from_millis(1500));
    assert_eq!(clock.now() - t0, Duration::from_millis(1500));
}
