//! Action handlers tying the store, form, filter and notifications together.
//!
//! The UI calls into [`EventManager`] for every user action; the manager
//! performs the data operation and queues the matching toast. None of the
//! components it owns know about each other.

use std::sync::Arc;

use crate::core::event_record::{DraftField, Event, EventId};
use crate::core::event_store::EventStore;
use crate::core::filter::FilterState;
use crate::core::form_session::{FormSession, SubmitOutcome};
use crate::core::notification::{NotificationKind, NotificationQueue};
use crate::util::error::{EventDeskError, Result};
use crate::util::time::Clock;

/// Owned application state for one window.
#[derive(Debug, Default)]
pub struct EventManager {
    pub store: EventStore,
    pub form: FormSession,
    pub filter: FilterState,
    /// Only expiry removes entries; the UI gets a read-only view.
    notifications: NotificationQueue,
    /// Event awaiting delete confirmation.
    pending_delete: Option<EventId>,
}

impl EventManager {
    pub fn new(store: EventStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Like [`new`](Self::new) but with notification time read from `clock`.
    pub fn with_clock(store: EventStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            notifications: NotificationQueue::with_clock(clock),
            ..Self::default()
        }
    }

    // ── Form actions ────────────────────────────────────────────────

    // The form and the delete confirmation are never open together.

    pub fn open_create(&mut self) {
        self.pending_delete = None;
        self.form.open_create();
    }

    /// Open the edit form for `id`.
    ///
    /// # Errors
    /// `NotFound` if the event vanished; an error toast is queued too.
    pub fn open_edit(&mut self, id: EventId) -> Result<()> {
        let result = match self.store.get(id) {
            Some(event) => {
                self.pending_delete = None;
                self.form.open_edit(event);
                Ok(())
            }
            None => Err(EventDeskError::NotFound { id }),
        };
        self.report(result)
    }

    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.form.update_field(field, value)
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Submit the open form and queue the outcome toast.
    pub fn submit_form(&mut self) -> Result<SubmitOutcome> {
        let result = self.form.submit(&mut self.store);
        match &result {
            Ok(SubmitOutcome::Created(_)) => {
                self.notify("Event created successfully!", NotificationKind::Success);
            }
            Ok(SubmitOutcome::Updated(_)) => {
                self.notify("Event updated successfully!", NotificationKind::Success);
            }
            Err(e) => {
                tracing::warn!("Submit failed: {}", e);
                self.notify(e.user_message(), NotificationKind::Error);
            }
        }
        result
    }

    // ── Delete flow ─────────────────────────────────────────────────

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: EventId) -> Result<()> {
        let result = if self.store.get(id).is_some() {
            self.form.cancel();
            self.pending_delete = Some(id);
            Ok(())
        } else {
            Err(EventDeskError::NotFound { id })
        };
        self.report(result)
    }

    /// The event awaiting confirmation, if it still exists.
    pub fn pending_delete_event(&self) -> Option<&Event> {
        self.pending_delete.and_then(|id| self.store.get(id))
    }

    pub fn pending_delete(&self) -> Option<EventId> {
        self.pending_delete
    }

    /// Delete the event awaiting confirmation.
    ///
    /// # Errors
    /// `NoPendingDelete` if nothing is pending, `NotFound` if the event has
    /// since been removed.
    pub fn confirm_delete(&mut self) -> Result<Event> {
        let Some(id) = self.pending_delete.take() else {
            return Err(EventDeskError::NoPendingDelete);
        };
        let result = self.store.delete(id);
        match &result {
            Ok(_) => self.notify("Event deleted successfully!", NotificationKind::Success),
            Err(e) => self.notify(e.user_message(), NotificationKind::Error),
        }
        result
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Whether a modal dialog (form or delete confirmation) is showing.
    pub fn has_open_dialog(&self) -> bool {
        self.form.is_open() || self.pending_delete.is_some()
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Events passing the current filter, in store order.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.filter.apply(self.store.list())
    }

    // ── Notifications ───────────────────────────────────────────────

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.push(message, kind);
    }

    /// Expire old toasts. Call once per frame.
    pub fn prune_notifications(&mut self) -> usize {
        self.notifications.prune_expired()
    }

    fn report(&mut self, result: Result<()>) -> Result<()> {
        if let Err(e) = &result {
            tracing::warn!("{}", e);
            self.notify(e.user_message(), NotificationKind::Error);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_record::EventStatus;
    use crate::core::form_session::FormMode;
    use crate::util::time::ManualClock;
    use std::time::Duration;

    fn manager() -> (EventManager, Arc<ManualClock>) {
        let clock = ManualClock::new();
        (
            EventManager::with_clock(EventStore::with_sample_events(), clock.clone()),
            clock,
        )
    }

    #[test]
    fn test_request_then_confirm_delete() {
        let (mut m, _) = manager();
        let id = m.store.list()[0].id;
        m.request_delete(id).unwrap();
        assert_eq!(m.pending_delete_event().map(|e| e.id), Some(id));

        let removed = m.confirm_delete().unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(m.store.len(), 2);
        assert_eq!(m.pending_delete(), None);
        let last = m.notifications().iter().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.message, "Event deleted successfully!");
    }

    #[test]
    fn test_cancel_delete_keeps_event() {
        let (mut m, _) = manager();
        let id = m.store.list()[1].id;
        m.request_delete(id).unwrap();
        m.cancel_delete();
        assert!(m.pending_delete_event().is_none());
        assert_eq!(m.store.len(), 3);
        assert!(m.notifications().is_empty());
    }

    #[test]
    fn test_open_edit_unknown_id_queues_error() {
        let (mut m, _) = manager();
        let err = m.open_edit(EventId(999)).unwrap_err();
        assert!(matches!(err, EventDeskError::NotFound { .. }));
        assert_eq!(m.form.mode(), FormMode::Closed);
        assert_eq!(
            m.notifications().iter().next().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }

    #[test]
    fn test_confirm_delete_of_vanished_event() {
        let (mut m, _) = manager();
        let id = m.store.list()[0].id;
        m.request_delete(id).unwrap();
        m.store.delete(id).unwrap();
        assert!(m.confirm_delete().is_err());
        assert_eq!(m.store.len(), 2);
        assert_eq!(
            m.notifications().iter().last().map(|n| n.message.as_str()),
            Some("Event no longer exists")
        );
    }

    #[test]
    fn test_form_and_delete_dialog_are_exclusive() {
        let (mut m, _) = manager();
        let first = m.store.list()[0].id;
        let second = m.store.list()[1].id;
        assert!(!m.has_open_dialog());

        m.open_edit(first).unwrap();
        m.request_delete(second).unwrap();
        assert_eq!(m.form.mode(), FormMode::Closed);
        assert_eq!(m.pending_delete(), Some(second));

        m.open_create();
        assert_eq!(m.pending_delete(), None);
        assert_eq!(m.form.mode(), FormMode::Creating);
        assert!(m.has_open_dialog());

        // A failed request leaves the open form alone.
        assert!(m.request_delete(EventId(999)).is_err());
        assert_eq!(m.form.mode(), FormMode::Creating);

        m.cancel_form();
        assert!(!m.has_open_dialog());
        assert_eq!(m.store.len(), 3);
    }

    #[test]
    fn test_toast_survives_later_actions_until_ttl() {
        let (mut m, clock) = manager();
        m.open_create();
        let _ = m.submit_form();
        let first = m.notifications().iter().next().unwrap().id;

        clock.advance(Duration::from_secs(2));
        m.cancel_form();
        let id = m.store.list()[0].id;
        m.open_edit(id).unwrap();
        m.cancel_form();
        let _ = m.open_edit(EventId(999));
        assert_eq!(m.prune_notifications(), 0);
        assert!(m.notifications().contains(first));

        clock.advance(Duration::from_secs(2));
        assert_eq!(m.prune_notifications(), 1);
        assert!(!m.notifications().contains(first));
        assert_eq!(m.notifications().len(), 1);
    }

    #[test]
    fn test_visible_events_follow_filter() {
        let (mut m, _) = manager();
        m.filter.status = crate::core::filter::StatusFilter::Only(EventStatus::Completed);
        let visible = m.visible_events();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Career Mentorship Workshop");
    }
}
