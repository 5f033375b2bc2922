//! Export of the currently visible events.

pub mod csv_export;
pub mod json_export;
