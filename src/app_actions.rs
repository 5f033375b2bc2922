//! Extended actions for [`EventDeskApp`]: export, keyboard shortcuts,
//! export message processing and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs`
//! to keep file sizes manageable.

use crate::app::{EventDeskApp, ExportMessage};
use eventdesk::core::event_record::Event;
use eventdesk::core::notification::NotificationKind;
use eventdesk::util::constants;

/// Output format for [`EventDeskApp::start_export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

// ── Export actions ──────────────────────────────────────────────────────

impl EventDeskApp {
    /// Export the visible events via a native save dialog.
    ///
    /// Runs on a background thread and sends a completion message back
    /// via `export_rx`, which becomes a toast.
    pub fn start_export(&mut self, format: ExportFormat) {
        if self.export_rx.is_some() {
            self.manager
                .notify("Export already in progress", NotificationKind::Info);
            return;
        }

        let events: Vec<Event> = self
            .manager
            .visible_events()
            .into_iter()
            .cloned()
            .collect();
        if events.is_empty() {
            self.manager
                .notify("No events to export", NotificationKind::Info);
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<ExportMessage>(1);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            let (label, ext, file_name) = match format {
                ExportFormat::Csv => ("CSV", "csv", constants::EXPORT_CSV_FILE_NAME),
                ExportFormat::Json => ("JSON", "json", constants::EXPORT_JSON_FILE_NAME),
            };
            let Some(path) = rfd::FileDialog::new()
                .add_filter(label, &[ext])
                .set_file_name(file_name)
                .save_file()
            else {
                return;
            };

            let result = match format {
                ExportFormat::Csv => eventdesk::export::csv_export::export_csv(&events, &path),
                ExportFormat::Json => eventdesk::export::json_export::export_json(&events, &path),
            };
            let msg = match result {
                Ok(()) => ExportMessage::Done(format!("Exported {} events to {label}", events.len())),
                Err(e) => {
                    tracing::error!("{} export failed: {}", label, e);
                    ExportMessage::Failed(e.to_string())
                }
            };
            let _ = tx.send(msg);
        });
    }

    /// Process export completion messages from the background thread.
    ///
    /// Called once per frame.
    pub fn process_export_messages(&mut self) {
        let Some(rx) = &self.export_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(ExportMessage::Done(msg)) => {
                self.manager.notify(msg, NotificationKind::Success);
                self.export_rx = None;
            }
            Ok(ExportMessage::Failed(msg)) => {
                self.manager.notify(msg, NotificationKind::Error);
                self.export_rx = None;
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                // Sender dropped without sending (user cancelled the save dialog).
                self.export_rx = None;
            }
            Err(crossbeam_channel::TryRecvError::Empty) => {}
        }
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl EventDeskApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **Ctrl+N**: New event
    /// - **Ctrl+F**: Focus the search box
    /// - **Ctrl+Shift+X**: Clear search and status filter
    /// - **Escape**: Close the topmost dialog
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (new_event, find, clear, escape) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::N),
                i.modifiers.command && i.key_pressed(egui::Key::F),
                i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::X),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if new_event && !self.manager.has_open_dialog() {
            self.manager.open_create();
        }
        if find {
            self.focus_search = true;
        }
        if clear {
            self.manager.filter.clear();
        }
        if escape {
            if self.manager.pending_delete().is_some() {
                self.manager.cancel_delete();
            } else if self.manager.form.is_open() {
                self.manager.cancel_form();
            } else if self.show_about {
                self.show_about = false;
            }
        }
    }
}

// ── About dialog ────────────────────────────────────────────────────────

impl EventDeskApp {
    /// Render the About dialog window.
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(constants::APP_NAME)
                            .color(crate::ui::theme::ACCENT)
                            .strong()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", constants::APP_VERSION))
                            .color(crate::ui::theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(8.0);
                    ui.label(constants::APP_TAGLINE);
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Ctrl+N new event · Ctrl+F search · Esc close")
                            .color(crate::ui::theme::text_secondary(self.dark_mode))
                            .small(),
                    );
                    ui.add_space(8.0);
                });
            });

        if !open {
            self.show_about = false;
        }
    }
}
