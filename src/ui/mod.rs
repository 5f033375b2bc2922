//! UI sub-modules for EventDesk.
//!
//! Each sub-module adds rendering methods to [`crate::app::EventDeskApp`]
//! via `impl` blocks, keeping UI code cleanly separated from state management.

pub mod event_form;
pub mod event_table;
pub mod filter_panel;
pub mod status_bar;
pub mod theme;
pub mod toasts;
pub mod toolbar;
