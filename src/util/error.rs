//! Unified error types for EventDesk.
//!
//! All fallible operations throughout the codebase return `Result<T, EventDeskError>`.
//! This ensures consistent error reporting and clean propagation via the `?` operator.

use crate::core::event_record::{EventId, RequiredField};

/// Unified error type used throughout EventDesk.
///
/// No variant is fatal: after any of these the store and form remain usable
/// and the user simply retries with a new action.
#[derive(Debug, thiserror::Error)]
pub enum EventDeskError {
    /// One or more required draft fields were empty at submission time.
    #[error("Please fill in all required fields: {}", join_fields(.missing))]
    Validation {
        /// The required fields that were empty, in form order.
        missing: Vec<RequiredField>,
    },

    /// The referenced event is no longer in the store (stale edit/delete target).
    #[error("Event {id} no longer exists")]
    NotFound {
        /// The id that could not be resolved.
        id: EventId,
    },

    /// A status string did not name a known event status.
    #[error("Unknown event status: {0:?}")]
    UnknownStatus(String),

    /// A draft field key did not name a known field.
    #[error("Unknown event field: {0:?}")]
    UnknownField(String),

    /// `submit` was called while no create/edit form was open.
    #[error("No event form is open")]
    FormClosed,

    /// A delete was confirmed without one being requested first.
    #[error("No event is awaiting deletion")]
    NoPendingDelete,

    /// Export (CSV or JSON) failed, typically an I/O error.
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for I/O errors (file writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EventDeskError>;

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl EventDeskError {
    /// Short message suitable for a toast.
    ///
    /// Validation failures use the fixed wording shown by the form rather
    /// than the field list, which the form already highlights.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { .. } => "Please fill in all required fields".to_owned(),
            Self::NotFound { .. } => "Event no longer exists".to_owned(),
            other => other.to_string(),
        }
    }
}
