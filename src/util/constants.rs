//! Application-wide constants for EventDesk.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// How long a notification stays visible before it is removed automatically
/// (seconds). Not extendable, not snoozable.
pub const NOTIFICATION_TTL_SECS: u64 = 4;

/// Notification lifetime as a `Duration`.
pub const NOTIFICATION_TTL: std::time::Duration =
    std::time::Duration::from_secs(NOTIFICATION_TTL_SECS);

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "EventDesk";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short tagline shown in the header and About dialog.
pub const APP_TAGLINE: &str = "Create, update, and manage alumni & student events with ease.";

/// Application data subdirectory name for logs.
pub const APP_DATA_DIR: &str = "EventDesk";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent error/debug logging.
pub const LOG_FILE_NAME: &str = "eventdesk.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Row height in the event table (in logical pixels).
pub const TABLE_ROW_HEIGHT: f32 = 28.0;

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [1180.0, 760.0];

/// Smallest window size the layout still works at.
pub const WINDOW_MIN_SIZE: [f32; 2] = [760.0, 480.0];

/// Default file names offered by the export save dialogs.
pub const EXPORT_CSV_FILE_NAME: &str = "EventDesk_events.csv";
pub const EXPORT_JSON_FILE_NAME: &str = "EventDesk_events.json";

