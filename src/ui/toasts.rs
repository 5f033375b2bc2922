//! Toast stack in the top-right corner.

use crate::app::EventDeskApp;
use crate::ui::theme;
use eventdesk::util::time::format_remaining;

impl EventDeskApp {
    /// Draw every live notification, oldest on top.
    ///
    /// Toasts are display-only; the frame loop removes them once their
    /// time is up.
    pub fn render_toasts(&self, ctx: &egui::Context) {
        let queue = self.manager.notifications();
        if queue.is_empty() {
            return;
        }

        let dark = self.dark_mode;

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, [-16.0, 72.0])
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in queue.iter() {
                    let (color, icon) = theme::toast_style(toast.kind);
                    egui::Frame::new()
                        .fill(theme::tint(color, dark))
                        .stroke(egui::Stroke::new(1.0, color))
                        .inner_margin(egui::Margin::symmetric(14, 10))
                        .corner_radius(8.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(icon).color(color));
                                ui.label(egui::RichText::new(&toast.message).color(color).strong());
                                ui.label(
                                    egui::RichText::new(format_remaining(queue.remaining(toast)))
                                        .color(color)
                                        .small(),
                                );
                            });
                        });
                    ui.add_space(6.0);
                }
            });
    }
}
