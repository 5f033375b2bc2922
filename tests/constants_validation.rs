//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use eventdesk::util::constants::*;

#[test]
fn notification_ttl_is_four_seconds() {
    assert_eq!(NOTIFICATION_TTL_SECS, 4);
    assert_eq!(NOTIFICATION_TTL, std::time::Duration::from_secs(4));
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
    assert!(!APP_TAGLINE.is_empty(), "APP_TAGLINE must not be empty");
}

#[test]
fn log_rotation_limit_is_reasonable() {
    assert!(MAX_LOG_FILE_SIZE >= 1024 * 1024, "Log limit too small");
    assert!(MAX_LOG_FILE_SIZE <= 100 * 1024 * 1024, "Log limit too large");
}

#[test]
fn window_min_size_fits_in_default_size() {
    assert!(WINDOW_MIN_SIZE[0] <= WINDOW_SIZE[0]);
    assert!(WINDOW_MIN_SIZE[1] <= WINDOW_SIZE[1]);
    assert!(TABLE_ROW_HEIGHT > 0.0);
}

#[test]
fn export_file_names_have_matching_extensions() {
    assert!(EXPORT_CSV_FILE_NAME.ends_with(".csv"));
    assert!(EXPORT_JSON_FILE_NAME.ends_with(".json"));
}
