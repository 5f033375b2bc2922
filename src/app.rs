//! Top-level application state.
//!
//! `EventDeskApp` owns the [`EventManager`] (all event, form, filter and
//! toast state) plus the few bits of purely visual state the panels need.
//! Rendering is delegated to panel sub-modules in `ui/`; the frame loop lives
//! in `app_update.rs`.

use crossbeam_channel::Receiver;

use eventdesk::core::event_manager::EventManager;
use eventdesk::core::event_store::EventStore;

/// Result of a background export, sent back to the UI thread.
pub enum ExportMessage {
    Done(String),
    Failed(String),
}

/// Central application state for EventDesk.
///
/// All fields are accessible to the UI rendering methods (defined in
/// `ui/*.rs` via `impl EventDeskApp` blocks).
pub struct EventDeskApp {
    // ── Domain state ────────────────────────────────────────────
    /// Events, form session, filter and notifications.
    pub manager: EventManager,

    // ── View state ──────────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    /// Whether the About dialog is open.
    pub show_about: bool,
    /// Set by Ctrl+F; the search box grabs focus on the next frame.
    pub focus_search: bool,

    // ── Export feedback ─────────────────────────────────────────
    /// Receiver for export completion messages from the background thread.
    pub export_rx: Option<Receiver<ExportMessage>>,
}

impl EventDeskApp {
    /// Create the app, restore persisted preferences and apply the theme.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let dark_mode = cc
            .storage
            .and_then(|storage| eframe::get_value::<bool>(storage, "dark_mode"))
            .unwrap_or(true);
        crate::ui::theme::apply_theme(&cc.egui_ctx, dark_mode);

        let store = EventStore::with_sample_events();
        tracing::info!("Starting with {} sample events", store.len());

        Self {
            manager: EventManager::new(store),
            dark_mode,
            show_about: false,
            focus_search: false,
            export_rx: None,
        }
    }

    /// Flip between the dark and light themes.
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        crate::ui::theme::apply_theme(ctx, self.dark_mode);
    }
}
