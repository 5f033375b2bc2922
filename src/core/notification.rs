//! Transient toast notifications with automatic expiry.
//!
//! Each notification carries its own deadline, fixed at push time. The UI
//! calls [`NotificationQueue::prune_expired`] once per frame, which is the
//! only place entries expire. Removing an entry early (or twice) is harmless.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::util::constants::NOTIFICATION_TTL;
use crate::util::time::{Clock, SystemClock};

/// Queue-assigned notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub expires_at: Instant,
}

/// Arrival-ordered list of live notifications.
pub struct NotificationQueue {
    entries: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("entries", &self.entries)
            .field("next_id", &self.next_id)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            ttl: NOTIFICATION_TTL,
            clock,
        }
    }

    /// Append a notification that expires [`NOTIFICATION_TTL`] from now.
    ///
    /// Ids come from a counter, so two pushes in the same instant still get
    /// distinct ids.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> Notification {
        self.next_id += 1;
        let now = self.clock.now();
        let notification = Notification {
            id: NotificationId(self.next_id),
            message: message.into(),
            kind,
            created_at: now,
            expires_at: now + self.ttl,
        };
        tracing::debug!(
            "Notification {} ({:?}): {}",
            notification.id,
            kind,
            notification.message
        );
        self.entries.push(notification.clone());
        notification
    }

    /// Remove the entry `id`. Returns whether anything was removed; an
    /// absent id is not an error.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        before != self.entries.len()
    }

    /// Drop every entry whose display time has elapsed. Returns how many
    /// were removed.
    pub fn prune_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now);
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!("Expired {} notification(s)", removed);
        }
        removed
    }

    /// Time until the earliest live entry expires, for repaint scheduling.
    pub fn time_until_next_expiry(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.entries
            .iter()
            .map(|n| n.expires_at.saturating_duration_since(now))
            .min()
    }

    /// Time left before `notification` disappears.
    pub fn remaining(&self, notification: &Notification) -> Duration {
        notification
            .expires_at
            .saturating_duration_since(self.clock.now())
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|n| n.id == id)
    }

    /// Live entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
