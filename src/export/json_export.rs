//! JSON export for the visible event list.
//!
//! Serialises the events as a pretty-printed JSON array using Serde.

use crate::core::event_record::Event;
use crate::export::csv_export::validate_export_path;
use crate::util::error::EventDeskError;
use std::io::Write;
use std::path::Path;

/// Export the given events to a JSON file at `path`.
///
/// # Errors
/// Returns [`EventDeskError::Export`] if the file cannot be created or written.
pub fn export_json(events: &[Event], path: &Path) -> Result<(), EventDeskError> {
    validate_export_path(path)?;

    let file = std::fs::File::create(path)
        .map_err(|e| EventDeskError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, events)
        .map_err(|e| EventDeskError::Export(format!("Failed to write JSON: {e}")))?;

    // BufWriter::drop swallows I/O errors.
    writer
        .flush()
        .map_err(|e| EventDeskError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!(
        "Exported {} events to JSON: {}",
        events.len(),
        path.display()
    );
    Ok(())
}
