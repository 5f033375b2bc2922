//! Integration tests for EventDesk.
//!
//! These exercise the library crate the same way the GUI does: through the
//! store, form session, filter and notification queue, and the action
//! layer that ties them together.

mod constants_validation;
mod export_validation;
mod time_utils;
