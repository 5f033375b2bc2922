//! Header bar: title, create button, export menu, theme toggle and About.

use crate::app::EventDeskApp;
use crate::app_actions::ExportFormat;
use crate::ui::theme;
use eventdesk::util::constants;

impl EventDeskApp {
    /// Render the header within the given `Ui` region.
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            ui.vertical(|ui| {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("Manage Events")
                        .color(theme::ACCENT)
                        .strong()
                        .size(22.0),
                );
                ui.label(
                    egui::RichText::new(constants::APP_TAGLINE)
                        .color(theme::text_secondary(self.dark_mode)),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // ── About ───────────────────────────────────────────
                let about_btn = ui.add(
                    egui::Button::new(egui::RichText::new("ℹ").size(14.0))
                        .min_size(egui::vec2(24.0, 24.0)),
                );
                if about_btn
                    .on_hover_text(format!("About {}", constants::APP_NAME))
                    .clicked()
                {
                    self.show_about = true;
                }

                // ── Theme toggle ────────────────────────────────────
                let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                let theme_tooltip = if self.dark_mode {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                };
                let theme_btn = ui.add(
                    egui::Button::new(egui::RichText::new(theme_icon).size(14.0))
                        .min_size(egui::vec2(24.0, 24.0)),
                );
                if theme_btn.on_hover_text(theme_tooltip).clicked() {
                    self.toggle_theme(ui.ctx());
                }

                ui.separator();

                // ── Export dropdown ─────────────────────────────────
                ui.add_enabled_ui(self.export_rx.is_none(), |ui| {
                    ui.menu_button("📤 Export", |ui| {
                        if ui.button("📄 Visible events to CSV...").clicked() {
                            self.start_export(ExportFormat::Csv);
                            ui.close_menu();
                        }
                        if ui.button("📋 Visible events to JSON...").clicked() {
                            self.start_export(ExportFormat::Json);
                            ui.close_menu();
                        }
                    });
                });

                // ── Create ──────────────────────────────────────────
                let create = ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("➕ Create Event")
                                .color(egui::Color32::WHITE)
                                .strong(),
                        )
                        .fill(theme::ACCENT_DIM)
                        .min_size(egui::vec2(0.0, 30.0)),
                    )
                    .on_hover_text("Add a new event (Ctrl+N)");
                if create.clicked() {
                    self.manager.open_create();
                }
            });
        });
    }
}
