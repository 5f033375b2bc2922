//! Central event table.
//!
//! Uses `egui_extras::TableBuilder` for column layout. Rows appear in store
//! order; there is no sorting, the filter only ever hides rows.

use crate::app::EventDeskApp;
use crate::ui::theme;
use eventdesk::core::event_record::{Event, EventId};
use eventdesk::util::constants::TABLE_ROW_HEIGHT;
use eventdesk::util::time::format_event_date;
use egui_extras::{Column, TableBuilder};

/// A button pressed in a table row, applied after the table is drawn.
enum RowAction {
    Edit(EventId),
    Delete(EventId),
}

impl EventDeskApp {
    /// Render the event table in the central panel.
    ///
    /// Columns: Name, Date, Time, Location, Attendees, Status, Actions.
    /// The description is shown as hover text on the name.
    pub fn render_event_table(&mut self, ui: &mut egui::Ui) {
        let rows: Vec<Event> = self
            .manager
            .visible_events()
            .into_iter()
            .cloned()
            .collect();

        if rows.is_empty() {
            self.render_empty_state(ui);
            return;
        }

        let dark = self.dark_mode;
        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(200.0).clip(true)) // Name
            .column(Column::auto().at_least(190.0).clip(true)) // Date
            .column(Column::auto().at_least(55.0)) // Time
            .column(Column::auto().at_least(180.0).clip(true)) // Location
            .column(Column::auto().at_least(80.0)) // Attendees
            .column(Column::auto().at_least(95.0)) // Status
            .column(Column::remainder().at_least(90.0)) // Actions
            .header(24.0, |mut header| {
                for title in ["Name", "Date", "Time", "Location", "Attendees", "Status", ""] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(TABLE_ROW_HEIGHT, rows.len(), |mut row| {
                    let event = &rows[row.index()];

                    row.col(|ui| {
                        ui.label(egui::RichText::new(&event.name).strong())
                            .on_hover_text(event.display_description());
                    });
                    row.col(|ui| {
                        ui.label(format_event_date(&event.date));
                    });
                    row.col(|ui| {
                        ui.label(&event.time);
                    });
                    row.col(|ui| {
                        ui.label(&event.location);
                    });
                    row.col(|ui| {
                        ui.label(format!("👥 {}", event.attendees));
                    });
                    row.col(|ui| {
                        status_badge(ui, event, dark);
                    });
                    row.col(|ui| {
                        if ui.small_button("✏ Edit").clicked() {
                            action = Some(RowAction::Edit(event.id));
                        }
                        if ui
                            .small_button(egui::RichText::new("🗑 Delete").color(theme::DANGER))
                            .clicked()
                        {
                            action = Some(RowAction::Delete(event.id));
                        }
                    });
                });
            });

        // Errors are already queued as toasts by the manager.
        let _ = match action {
            Some(RowAction::Edit(id)) => self.manager.open_edit(id),
            Some(RowAction::Delete(id)) => self.manager.request_delete(id),
            None => Ok(()),
        };
    }

    fn render_empty_state(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(egui::RichText::new("No events found").size(18.0));
            ui.label(
                egui::RichText::new("Try adjusting your search or filter criteria")
                    .color(theme::text_secondary(self.dark_mode)),
            );
        });
    }
}

/// Capitalised, colour-coded status pill.
fn status_badge(ui: &mut egui::Ui, event: &Event, dark: bool) {
    let color = theme::status_color(event.status);
    egui::Frame::new()
        .fill(theme::tint(color, dark))
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .corner_radius(10.0)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(event.status.label())
                    .color(color)
                    .small()
                    .strong(),
            );
        });
}
