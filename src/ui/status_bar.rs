//! Bottom status bar: visible/total counts and per-status breakdown.

use crate::app::EventDeskApp;
use crate::ui::theme;

impl EventDeskApp {
    /// Render the status bar at the bottom of the window.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        let dim = theme::text_secondary(self.dark_mode);
        ui.horizontal_centered(|ui| {
            // ── Event count ─────────────────────────────────────────
            let visible = self.manager.visible_events().len();
            let total = self.manager.store.len();
            let count_text = if visible == total {
                format!("{total} events")
            } else {
                format!("Showing {visible} of {total} events")
            };
            ui.label(egui::RichText::new(count_text).color(dim));

            ui.separator();

            // ── Per-status counts ───────────────────────────────────
            for (status, n) in self.manager.store.status_counts() {
                ui.label(
                    egui::RichText::new(format!("{}: {n}", status.label()))
                        .color(theme::status_color(status)),
                );
            }

            if self.export_rx.is_some() {
                ui.separator();
                ui.spinner();
                ui.label(egui::RichText::new("Exporting…").color(dim));
            }
        });
    }
}
