//! Canonical data structures for a single managed event and its form draft.
//!
//! An [`Event`] only exists once a [`Draft`] has passed the required-field
//! check in [`crate::core::event_store::EventStore`]. Drafts are the loose,
//! partially-filled working copies bound to the create/edit form.

use std::fmt;
use std::str::FromStr;

use crate::util::error::EventDeskError;

/// Opaque, store-assigned event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status of an event. Set by the user, never derived from the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    /// All statuses in display order.
    pub const ALL: [EventStatus; 3] = [Self::Upcoming, Self::Ongoing, Self::Completed];

    /// Lower-case key, as used in filters and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    /// Capitalised label for badges and drop-downs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = EventDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            _ => Err(EventDeskError::UnknownStatus(s.to_owned())),
        }
    }
}

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    /// Assigned by the store at creation; never changes.
    pub id: EventId,
    pub name: String,
    /// Calendar date as entered, normally `YYYY-MM-DD`.
    pub date: String,
    /// Time of day as entered, normally `HH:MM`.
    pub time: String,
    pub location: String,
    pub description: String,
    pub status: EventStatus,
    /// Attendee counter. Starts at 0 and is not editable through the form.
    pub attendees: u32,
}

impl Event {
    /// Overwrite every form-editable field from `draft`.
    ///
    /// `id` and `attendees` are left untouched.
    pub(crate) fn apply_draft(&mut self, draft: &Draft) {
        self.name.clone_from(&draft.name);
        self.date.clone_from(&draft.date);
        self.time.clone_from(&draft.time);
        self.location.clone_from(&draft.location);
        self.description.clone_from(&draft.description);
        self.status = draft.status;
    }

    /// Description, or a placeholder when none was entered.
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            "(no description)"
        } else {
            &self.description
        }
    }
}

/// Fields that must be non-empty before a draft can become an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Date,
    Time,
    Location,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Time => "time",
            Self::Location => "location",
        }
    }
}

/// Working copy of the create/edit form. Unvalidated until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub status: EventStatus,
}

impl Draft {
    /// Copy the editable fields of an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
            status: event.status,
        }
    }

    /// Required fields that are currently empty, in form order.
    ///
    /// Only emptiness is checked: whitespace, odd date formats and duplicate
    /// names are all accepted.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Date, &self.date),
            (RequiredField::Time, &self.time),
            (RequiredField::Location, &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// `true` when every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Set a single field from its text value.
    ///
    /// Text fields accept anything. `Status` must parse; on failure the
    /// draft is left unchanged.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), EventDeskError> {
        match field {
            DraftField::Name => self.name = value.to_owned(),
            DraftField::Date => self.date = value.to_owned(),
            DraftField::Time => self.time = value.to_owned(),
            DraftField::Location => self.location = value.to_owned(),
            DraftField::Description => self.description = value.to_owned(),
            DraftField::Status => self.status = value.parse()?,
        }
        Ok(())
    }
}

/// Addressable draft fields, keyed by their lower-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Date,
    Time,
    Location,
    Description,
    Status,
}

impl FromStr for DraftField {
    type Err = EventDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "location" => Ok(Self::Location),
            "description" => Ok(Self::Description),
            "status" => Ok(Self::Status),
            _ => Err(EventDeskError::UnknownField(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_misses_all_required_fields() {
        let draft = Draft::default();
        assert_eq!(
            draft.missing_fields(),
            vec![
                RequiredField::Name,
                RequiredField::Date,
                RequiredField::Time,
                RequiredField::Location,
            ]
        );
        assert_eq!(draft.status, EventStatus::Upcoming);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let draft = Draft {
            name: " ".into(),
            date: "2025-01-28".into(),
            time: "09:00".into(),
            location: "Hall A".into(),
            ..Draft::default()
        };
        assert!(draft.is_complete());
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("Completed".parse::<EventStatus>().unwrap(), EventStatus::Completed);
        assert_eq!(" ongoing ".parse::<EventStatus>().unwrap(), EventStatus::Ongoing);
        assert!("cancelled".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_set_status_field_rejects_unknown_value() {
        let mut draft = Draft::default();
        assert!(draft.set_field(DraftField::Status, "paused").is_err());
        assert_eq!(draft.status, EventStatus::Upcoming);
        draft.set_field(DraftField::Status, "completed").unwrap();
        assert_eq!(draft.status, EventStatus::Completed);
    }

    #[test]
    fn test_field_keys_parse() {
        assert_eq!("location".parse::<DraftField>().unwrap(), DraftField::Location);
        assert!("attendees".parse::<DraftField>().is_err());
    }

    #[test]
    fn test_status_serialises_lowercase() {
        let json = serde_json::to_string(&EventStatus::Ongoing).unwrap();
        assert_eq!(json, "\"ongoing\"");
    }
}
