//! Search and status filter bar above the event table.

use crate::app::EventDeskApp;
use crate::ui::theme;
use eventdesk::core::filter::StatusFilter;

impl EventDeskApp {
    /// Render the search box and status drop-down.
    ///
    /// Both write straight into `self.manager.filter`; the table re-filters
    /// every frame so there is nothing to apply.
    pub fn render_filter_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.label("🔎");
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.manager.filter.search_term)
                    .hint_text("Search events by name or location...")
                    .desired_width(360.0),
            );
            if self.focus_search {
                search.request_focus();
                self.focus_search = false;
            }
            if search.changed() {
                self.manager.filter.update_search_cache();
            }
            search.on_hover_text("Case-insensitive match against event name and location (Ctrl+F)");

            ui.add_space(12.0);
            ui.label("⚙");
            let current = self.manager.filter.status;
            egui::ComboBox::from_id_salt("status_filter")
                .selected_text(current.label())
                .width(140.0)
                .show_ui(ui, |ui| {
                    for choice in StatusFilter::CHOICES {
                        ui.selectable_value(&mut self.manager.filter.status, choice, choice.label());
                    }
                });

            if !self.manager.filter.is_empty() {
                ui.add_space(8.0);
                if ui
                    .small_button("✖ Clear")
                    .on_hover_text("Clear search and status filter (Ctrl+Shift+X)")
                    .clicked()
                {
                    self.manager.filter.clear();
                }
                ui.label(
                    egui::RichText::new("🟢 Filters active")
                        .color(theme::ACCENT)
                        .small(),
                );
            }
        });
    }
}
