//! Integration tests for CSV/JSON export of visible events.

use eventdesk::core::event_store::EventStore;
use eventdesk::export::csv_export::{export_csv, validate_export_path};
use eventdesk::export::json_export::export_json;
use std::path::PathBuf;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("eventdesk_test_{}_{name}", std::process::id()))
}

#[test]
fn validate_export_path_valid_directory() {
    let path = temp_file("export.csv");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be accepted: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let path = std::env::temp_dir()
        .join("eventdesk_missing_dir_12345")
        .join("output.csv");
    let result = validate_export_path(&path);
    assert!(result.is_err(), "Non-existent dir should fail");
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains("does not exist"),
        "Should indicate dir missing: {msg}"
    );
}

#[test]
fn validate_export_path_bare_file_name() {
    assert!(validate_export_path(&PathBuf::from("just_a_filename.csv")).is_ok());
}

#[test]
fn csv_export_writes_header_and_rows() {
    let store = EventStore::with_sample_events();
    let path = temp_file("events.csv");
    export_csv(store.list(), &path).expect("export");

    let mut reader = csv::Reader::from_path(&path).expect("open");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(&headers[0], "Name");
    assert_eq!(&headers[4], "Status");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "Alumni Networking Gala 2025");
    // The location contains a comma and must survive quoting.
    assert_eq!(&rows[0][3], "Grand Ballroom, Campus Center");
    assert_eq!(&rows[2][4], "completed");
    assert_eq!(&rows[2][5], "95");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_export_is_an_array_of_events() {
    let store = EventStore::with_sample_events();
    let path = temp_file("events.json");
    export_json(&store.list()[1..], &path).expect("export");

    let text = std::fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse");
    let array = value.as_array().expect("array");
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["name"], "Tech Innovation Summit");
    assert_eq!(array[0]["status"], "upcoming");
    assert_eq!(array[0]["attendees"], 180);
    assert_eq!(array[0]["id"], 2);

    let _ = std::fs::remove_file(&path);
}
