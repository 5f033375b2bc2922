//! CSV export for the visible event list.
//!
//! Writes the rows currently shown in the table to a CSV file.

use crate::core::event_record::Event;
use crate::util::error::EventDeskError;
use std::path::Path;

/// Check that `path` can be written before opening it.
///
/// Catches a missing target directory up front so the user gets a clear
/// message instead of a raw I/O error.
///
/// # Errors
/// Returns [`EventDeskError::Export`] if the parent directory does not exist.
pub fn validate_export_path(path: &Path) -> Result<(), EventDeskError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(EventDeskError::Export(
            format!("Target directory does not exist: {}", dir.display()),
        )),
        _ => Ok(()),
    }
}

/// Export the given events to a CSV file at `path`.
///
/// Columns: Name, Date, Time, Location, Status, Attendees, Description.
///
/// # Errors
/// Returns [`EventDeskError::Export`] if the file cannot be created or written.
pub fn export_csv(events: &[Event], path: &Path) -> Result<(), EventDeskError> {
    validate_export_path(path)?;

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| EventDeskError::Export(format!("Failed to create CSV file: {e}")))?;

    writer
        .write_record([
            "Name",
            "Date",
            "Time",
            "Location",
            "Status",
            "Attendees",
            "Description",
        ])
        .map_err(|e| EventDeskError::Export(format!("Failed to write CSV header: {e}")))?;

    for event in events {
        writer
            .write_record([
                event.name.as_str(),
                event.date.as_str(),
                event.time.as_str(),
                event.location.as_str(),
                event.status.as_str(),
                event.attendees.to_string().as_str(),
                event.description.as_str(),
            ])
            .map_err(|e| EventDeskError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| EventDeskError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!(
        "Exported {} events to CSV: {}",
        events.len(),
        path.display()
    );
    Ok(())
}
