//! In-memory event collection and its CRUD operations.
//!
//! The store is pure data: it validates drafts and mutates its list, but
//! never talks to the notification queue. That wiring lives in
//! [`crate::core::event_manager::EventManager`].

use crate::core::event_record::{Draft, Event, EventId, EventStatus};
use crate::util::error::{EventDeskError, Result};

/// Ordered collection of events, kept in insertion order.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the three events the app ships with.
    pub fn with_sample_events() -> Self {
        let mut store = Self::new();
        for (draft, attendees) in sample_events() {
            // Sample drafts are complete, so this never falls through.
            if let Ok(event) = store.create(&draft) {
                store.set_attendees(event.id, attendees);
            }
        }
        store
    }

    /// Validate `draft` and append it as a new event.
    ///
    /// # Errors
    /// [`EventDeskError::Validation`] if any required field is empty. The
    /// store is not modified in that case.
    pub fn create(&mut self, draft: &Draft) -> Result<Event> {
        validate(draft)?;

        self.next_id += 1;
        let event = Event {
            id: EventId(self.next_id),
            name: draft.name.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            location: draft.location.clone(),
            description: draft.description.clone(),
            status: draft.status,
            attendees: 0,
        };
        self.events.push(event.clone());
        tracing::info!("Created event {} ({:?})", event.id, event.name);
        Ok(event)
    }

    /// Replace the editable fields of the event `id` in place.
    ///
    /// Position, `id` and `attendees` are preserved.
    ///
    /// # Errors
    /// [`EventDeskError::NotFound`] if `id` is not in the store, otherwise
    /// [`EventDeskError::Validation`] for an incomplete draft.
    pub fn update(&mut self, id: EventId, draft: &Draft) -> Result<Event> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventDeskError::NotFound { id })?;
        validate(draft)?;

        event.apply_draft(draft);
        tracing::info!("Updated event {} ({:?})", event.id, event.name);
        Ok(event.clone())
    }

    /// Remove the event `id`, returning it.
    ///
    /// # Errors
    /// [`EventDeskError::NotFound`] if `id` is not in the store.
    pub fn delete(&mut self, id: EventId) -> Result<Event> {
        let idx = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(EventDeskError::NotFound { id })?;
        let removed = self.events.remove(idx);
        tracing::info!("Deleted event {} ({:?})", removed.id, removed.name);
        Ok(removed)
    }

    /// All events in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events per status, in [`EventStatus::ALL`] order.
    pub fn status_counts(&self) -> [(EventStatus, usize); 3] {
        EventStatus::ALL.map(|status| {
            let n = self.events.iter().filter(|e| e.status == status).count();
            (status, n)
        })
    }

    fn set_attendees(&mut self, id: EventId, attendees: u32) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            event.attendees = attendees;
        }
    }
}

fn validate(draft: &Draft) -> Result<()> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        tracing::warn!("Rejected draft, missing fields: {:?}", missing);
        Err(EventDeskError::Validation { missing })
    }
}

fn sample_events() -> Vec<(Draft, u32)> {
    vec![
        (
            Draft {
                name: "Alumni Networking Gala 2025".into(),
                date: "2025-02-15".into(),
                time: "18:00".into(),
                location: "Grand Ballroom, Campus Center".into(),
                description: "Annual networking event connecting alumni across different industries and graduation years.".into(),
                status: EventStatus::Upcoming,
            },
            245,
        ),
        (
            Draft {
                name: "Tech Innovation Summit".into(),
                date: "2025-01-28".into(),
                time: "09:00".into(),
                location: "Auditorium A, Engineering Building".into(),
                description: "Showcasing latest technology trends and innovations by our alumni entrepreneurs.".into(),
                status: EventStatus::Upcoming,
            },
            180,
        ),
        (
            Draft {
                name: "Career Mentorship Workshop".into(),
                date: "2025-01-10".into(),
                time: "14:00".into(),
                location: "Conference Room 201".into(),
                description: "Interactive workshop connecting students with alumni mentors for career guidance.".into(),
                status: EventStatus::Completed,
            },
            95,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_record::RequiredField;

    fn draft(name: &str, location: &str) -> Draft {
        Draft {
            name: name.into(),
            date: "2025-03-01".into(),
            time: "10:00".into(),
            location: location.into(),
            description: "desc".into(),
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn test_create_assigns_unique_ids_and_zero_attendees() {
        let mut store = EventStore::new();
        let a = store.create(&draft("A", "Hall")).unwrap();
        let b = store.create(&draft("A", "Hall")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.attendees, 0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id, a.id);
        assert_eq!(store.list()[1].id, b.id);
    }

    #[test]
    fn test_create_rejects_missing_fields_without_mutation() {
        let mut store = EventStore::new();
        let mut d = draft("A", "");
        d.time.clear();
        match store.create(&d) {
            Err(EventDeskError::Validation { missing }) => {
                assert_eq!(missing, vec![RequiredField::Time, RequiredField::Location]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_position_id_and_attendees() {
        let mut store = EventStore::with_sample_events();
        let before = store.list().to_vec();
        let target = before[1].clone();
        let mut d = Draft::from_event(&target);
        d.status = EventStatus::Ongoing;
        d.name = "Renamed".into();

        let updated = store.update(target.id, &d).unwrap();
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.attendees, 180);
        assert_eq!(store.list()[1], updated);
        assert_eq!(store.len(), 3);
        // Neighbours are untouched.
        assert_eq!(store.list()[0], before[0]);
        assert_eq!(store.list()[2], before[2]);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = EventStore::new();
        let err = store.update(EventId(42), &draft("A", "B")).unwrap_err();
        assert!(matches!(err, EventDeskError::NotFound { id: EventId(42) }));
    }

    #[test]
    fn test_update_with_incomplete_draft_leaves_event_untouched() {
        let mut store = EventStore::new();
        let ev = store.create(&draft("A", "B")).unwrap();
        let err = store.update(ev.id, &Draft::default()).unwrap_err();
        assert!(matches!(err, EventDeskError::Validation { .. }));
        assert_eq!(store.get(ev.id), Some(&ev));
    }

    #[test]
    fn test_delete_twice() {
        let mut store = EventStore::new();
        let a = store.create(&draft("A", "B")).unwrap();
        let b = store.create(&draft("C", "D")).unwrap();
        assert_eq!(store.delete(a.id).unwrap().id, a.id);
        assert_eq!(store.len(), 1);
        assert!(matches!(
            store.delete(a.id),
            Err(EventDeskError::NotFound { .. })
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, b.id);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = EventStore::new();
        let a = store.create(&draft("A", "B")).unwrap();
        store.delete(a.id).unwrap();
        let b = store.create(&draft("A", "B")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sample_events_and_status_counts() {
        let store = EventStore::with_sample_events();
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0].attendees, 245);
        assert_eq!(
            store.status_counts(),
            [
                (EventStatus::Upcoming, 2),
                (EventStatus::Ongoing, 0),
                (EventStatus::Completed, 1),
            ]
        );
    }
}
