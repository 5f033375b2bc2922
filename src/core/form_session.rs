//! Create/edit form state machine.
//!
//! ```text
//! Closed --open_create--> Creating --submit ok / cancel--> Closed
//! Closed --open_edit----> Editing  --submit ok / cancel--> Closed
//! ```
//!
//! Opening one form while the other is open simply replaces it.

use crate::core::event_record::{Draft, DraftField, Event, EventId};
use crate::core::event_store::EventStore;
use crate::util::error::{EventDeskError, Result};

/// Which form (if any) is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    /// Editing the event with this id.
    Editing(EventId),
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Event),
    Updated(Event),
}

impl SubmitOutcome {
    pub fn event(&self) -> &Event {
        match self {
            Self::Created(e) | Self::Updated(e) => e,
        }
    }
}

/// Draft plus the mode it is being edited in.
#[derive(Debug, Default)]
pub struct FormSession {
    mode: FormMode,
    draft: Draft,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Id of the event being edited, if in editing mode.
    pub fn target_id(&self) -> Option<EventId> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable draft for direct binding to form widgets.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = Draft::default();
    }

    /// Start editing a copy of `event`. The stored event is untouched until submit.
    pub fn open_edit(&mut self, event: &Event) {
        self.mode = FormMode::Editing(event.id);
        self.draft = Draft::from_event(event);
    }

    /// Set one draft field. No required-field validation happens here.
    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.draft.set_field(field, value)
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// Hand the draft to `store` according to the current mode.
    ///
    /// On success the form closes. A validation failure keeps the form open
    /// with the draft intact. A missing edit target closes the form, since
    /// there is nothing left to edit.
    pub fn submit(&mut self, store: &mut EventStore) -> Result<SubmitOutcome> {
        let result = match self.mode {
            FormMode::Closed => return Err(EventDeskError::FormClosed),
            FormMode::Creating => store.create(&self.draft).map(SubmitOutcome::Created),
            FormMode::Editing(id) => store.update(id, &self.draft).map(SubmitOutcome::Updated),
        };

        match &result {
            Ok(_) | Err(EventDeskError::NotFound { .. }) => self.close(),
            Err(_) => {}
        }
        result
    }

    fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = Draft::default();
    }
}
