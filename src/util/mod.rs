//! Shared helpers: constants, the error type and date/time utilities.

pub mod constants;
pub mod error;
pub mod time;
