//! Frame-by-frame update loop.
//!
//! Contains the [`eframe::App`] implementation for `EventDeskApp`: toast
//! expiry, export polling, keyboard shortcuts, then the panels and any open
//! dialogs.

use crate::app::EventDeskApp;

impl eframe::App for EventDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Expire toasts whose display time is up
        self.manager.prune_notifications();

        // 2. Process export completion messages
        self.process_export_messages();

        // 3. Handle keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // ── Header ──────────────────────────────────────────────────
        egui::TopBottomPanel::top("header")
            .exact_height(64.0)
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        // ── Search / status filter bar ──────────────────────────────
        egui::TopBottomPanel::top("filter_bar")
            .exact_height(40.0)
            .show(ctx, |ui| {
                self.render_filter_bar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(28.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Central event table ─────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_event_table(ui);
        });

        // ── Floating dialogs and toasts ─────────────────────────────
        self.render_event_form(ctx);
        self.render_delete_dialog(ctx);
        self.render_about_dialog(ctx);
        self.render_toasts(ctx);

        // 4. Wake up again when the next toast is due to disappear
        if let Some(wait) = self.manager.notifications().time_until_next_expiry() {
            ctx.request_repaint_after(wait);
        }
        if self.export_rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    /// Return the clear colour used before each frame render.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        if self.dark_mode {
            crate::ui::theme::BG_DARK.to_normalized_gamma_f32()
        } else {
            crate::ui::theme::BG_LIGHT.to_normalized_gamma_f32()
        }
    }

    /// Persist user preferences to eframe storage on shutdown.
    ///
    /// Only the theme is saved; events live for the session only.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "dark_mode", &self.dark_mode);
    }
}
