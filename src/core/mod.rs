//! Core domain modules for EventDesk.
//!
//! Contains the event data model, the in-memory store, the create/edit form
//! state machine, view filtering, toast notifications and the action layer
//! that coordinates them. Nothing here depends on the GUI.

pub mod event_manager;
pub mod event_record;
pub mod event_store;
pub mod filter;
pub mod form_session;
pub mod notification;
