//! Date/time helpers for EventDesk.
//!
//! Provides consistent date display across the UI and the [`Clock`]
//! abstraction used for notification expiry.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::NaiveDate;

/// Source of the current instant.
///
/// Production code uses [`SystemClock`]; tests inject a [`ManualClock`] and
/// advance it explicitly instead of sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Create a manual clock frozen at the current real instant.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Instant::now()),
        })
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Parse an event date in the `YYYY-MM-DD` form produced by date pickers.
pub fn parse_event_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Format an event date for the event table, e.g. `Saturday, February 15, 2025`.
///
/// Dates are free-form text, so anything that does not parse is shown as
/// entered.
pub fn format_event_date(input: &str) -> String {
    match parse_event_date(input) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => input.to_owned(),
    }
}

/// Format a `Duration` as whole seconds remaining, rounded up (`"3s"`).
pub fn format_remaining(d: Duration) -> String {
    let secs = d.as_secs() + u64::from(d.subsec_nanos() > 0);
    format!("{secs}s")
}
