//! In-memory view filtering for EventDesk.
//!
//! The [`FilterState`] struct holds the search box text and the status
//! drop-down. Filtering is recomputed from the store on every frame; it keeps
//! no results of its own and never reorders.

use crate::core::event_record::{Event, EventStatus};

/// Status drop-down value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl StatusFilter {
    /// Every choice in drop-down order.
    pub const CHOICES: [StatusFilter; 4] = [
        Self::All,
        Self::Only(EventStatus::Upcoming),
        Self::Only(EventStatus::Ongoing),
        Self::Only(EventStatus::Completed),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Events",
            Self::Only(status) => status.label(),
        }
    }

    pub fn accepts(self, status: EventStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Holds the active search/filter criteria.
///
/// The default state passes every event.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Free-form search, matched against name and location.
    pub search_term: String,

    /// Pre-computed lowercase version of `search_term`. Updated by
    /// [`update_search_cache`](Self::update_search_cache).
    pub search_lower: String,

    pub status: StatusFilter,
}

impl FilterState {
    pub fn new(search_term: &str, status: StatusFilter) -> Self {
        let mut state = Self {
            search_term: search_term.to_owned(),
            search_lower: String::new(),
            status,
        };
        state.update_search_cache();
        state
    }

    /// Refresh the cached lowercase search term. Call after editing
    /// `search_term` directly.
    pub fn update_search_cache(&mut self) {
        self.search_lower = self.search_term.to_lowercase();
    }

    /// Test whether `event` passes both the status and the search criteria.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.status.accepts(event.status) {
            return false;
        }

        if self.search_lower.is_empty() {
            return true;
        }
        let q = self.search_lower.as_str();
        event.name.to_lowercase().contains(q) || event.location.to_lowercase().contains(q)
    }

    /// The events that pass, in their original order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }

    /// `true` if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.status == StatusFilter::All
    }

    /// Reset to the pass-all state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Owned-result form of [`FilterState::apply`].
pub fn apply(events: &[Event], search_term: &str, status: StatusFilter) -> Vec<Event> {
    let state = FilterState::new(search_term, status);
    events.iter().filter(|e| state.matches(e)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_store::EventStore;

    #[test]
    fn test_default_matches_all_in_order() {
        let store = EventStore::with_sample_events();
        let out = apply(store.list(), "", StatusFilter::All);
        assert_eq!(out, store.list());
    }

    #[test]
    fn test_search_matches_name_or_location_case_insensitively() {
        let store = EventStore::with_sample_events();
        let by_name = apply(store.list(), "SUMMIT", StatusFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Tech Innovation Summit");

        let by_location = apply(store.list(), "room 201", StatusFilter::All);
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].name, "Career Mentorship Workshop");
    }

    #[test]
    fn test_description_is_not_searched() {
        let store = EventStore::with_sample_events();
        assert!(apply(store.list(), "entrepreneurs", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_and_search_are_anded() {
        let store = EventStore::with_sample_events();
        let upcoming = StatusFilter::Only(EventStatus::Upcoming);
        assert_eq!(apply(store.list(), "", upcoming).len(), 2);
        assert!(apply(store.list(), "workshop", upcoming).is_empty());
        assert!(apply(store.list(), "", StatusFilter::Only(EventStatus::Ongoing)).is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let store = EventStore::with_sample_events();
        let f = StatusFilter::Only(EventStatus::Upcoming);
        let once = apply(store.list(), "a", f);
        let twice = apply(&once, "a", f);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_cache_must_be_refreshed() {
        let store = EventStore::with_sample_events();
        let mut state = FilterState::default();
        state.search_term = "gala".into();
        state.update_search_cache();
        let hits = state.apply(store.list());
        assert_eq!(hits.len(), 1);
        assert!(!state.is_empty());
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.apply(store.list()).len(), 3);
    }
}
