//! Create/edit modal and the delete confirmation dialog.
//!
//! Both are `egui::Modal`s, so the table behind them is blocked until the
//! dialog is submitted or cancelled.

use crate::app::EventDeskApp;
use crate::ui::theme;
use eventdesk::core::event_record::EventStatus;
use eventdesk::core::form_session::FormMode;

impl EventDeskApp {
    /// Render the create/edit window while a form is open.
    ///
    /// Text inputs bind directly to the draft. Nothing reaches the store
    /// until **Create Event** / **Update Event** is pressed.
    pub fn render_event_form(&mut self, ctx: &egui::Context) {
        let (title, submit_label) = match self.manager.form.mode() {
            FormMode::Closed => return,
            FormMode::Creating => ("Create New Event", "Create Event"),
            FormMode::Editing(_) => ("Edit Event", "Update Event"),
        };

        let mut submit = false;
        let mut cancel = false;
        let dim = theme::text_secondary(self.dark_mode);

        egui::Modal::new(egui::Id::new("event_form"))
            .show(ctx, |ui| {
                ui.set_width(460.0);
                ui.heading(title);
                ui.separator();
                ui.add_space(4.0);

                let draft = self.manager.form.draft_mut();

                ui.label("Event Name *");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.name)
                        .hint_text("Enter event name")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);

                ui.columns(2, |cols| {
                    cols[0].label("Date *");
                    cols[0].add(
                        egui::TextEdit::singleline(&mut draft.date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(f32::INFINITY),
                    );
                    cols[1].label("Time *");
                    cols[1].add(
                        egui::TextEdit::singleline(&mut draft.time)
                            .hint_text("HH:MM")
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.add_space(4.0);

                ui.label("Location *");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.location)
                        .hint_text("Enter event location")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);

                ui.label("Status");
                egui::ComboBox::from_id_salt("draft_status")
                    .selected_text(draft.status.label())
                    .width(160.0)
                    .show_ui(ui, |ui| {
                        for status in EventStatus::ALL {
                            ui.selectable_value(&mut draft.status, status, status.label());
                        }
                    });
                ui.add_space(4.0);

                ui.label("Description");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.description)
                        .hint_text("Enter event description")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(4.0);
                ui.label(egui::RichText::new("* required").color(dim).small());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new(submit_label).color(theme::ACCENT).strong())
                        .clicked()
                    {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            // Outcome (including validation errors) is reported as a toast.
            let _ = self.manager.submit_form();
        } else if cancel {
            self.manager.cancel_form();
        }
    }

    /// Render the delete confirmation window while a delete is pending.
    pub fn render_delete_dialog(&mut self, ctx: &egui::Context) {
        let Some(event) = self.manager.pending_delete_event() else {
            return;
        };
        let name = event.name.clone();

        let mut confirm = false;
        let mut cancel = false;

        let response = egui::Modal::new(egui::Id::new("delete_event"))
            .show(ctx, |ui| {
                ui.set_width(340.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Delete Event");
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new("⚠").color(theme::DANGER).size(24.0));
                    ui.label(format!("Are you sure you want to delete \"{name}\"?"));
                    ui.label(
                        egui::RichText::new("This action cannot be undone.")
                            .color(theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui
                            .button(egui::RichText::new("Yes, Delete").color(theme::DANGER).strong())
                            .clicked()
                        {
                            confirm = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancel = true;
                        }
                    });
                });
            });

        if confirm {
            let _ = self.manager.confirm_delete();
        } else if cancel || response.should_close() {
            self.manager.cancel_delete();
        }
    }
}
