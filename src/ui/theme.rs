//! Colour palette and style helpers for EventDesk's dark and light themes.
//!
//! Status badges and toasts are colour-coded; everything else follows a
//! slate/teal palette.

use egui::Color32;

use eventdesk::core::event_record::EventStatus;
use eventdesk::core::notification::NotificationKind;

// ── Background colours ──────────────────────────────────────────────────

/// Main window background (dark).
pub const BG_DARK: Color32 = Color32::from_rgb(15, 23, 42);

/// Main window background (light).
pub const BG_LIGHT: Color32 = Color32::from_rgb(241, 245, 249);

/// Panel / card background (dark).
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 41, 59);

/// Table striping (dark).
pub const BG_ROW_ALT: Color32 = Color32::from_rgb(36, 48, 68);

/// Selection background (dark).
pub const BG_SELECTED: Color32 = Color32::from_rgb(22, 78, 72);

// ── Text colours ────────────────────────────────────────────────────────

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);

// ── Accent colours ──────────────────────────────────────────────────────

/// Primary accent (green).
pub const ACCENT: Color32 = Color32::from_rgb(34, 197, 94);

/// Dimmer accent for secondary highlights.
pub const ACCENT_DIM: Color32 = Color32::from_rgb(20, 184, 166);

/// Destructive actions (delete buttons, error toasts).
pub const DANGER: Color32 = Color32::from_rgb(248, 113, 113);

// ── Status colours ──────────────────────────────────────────────────────

pub const STATUS_UPCOMING: Color32 = Color32::from_rgb(74, 222, 128);
pub const STATUS_ONGOING: Color32 = Color32::from_rgb(250, 204, 21);
pub const STATUS_COMPLETED: Color32 = Color32::from_rgb(156, 163, 175);

// ── Toast colours ───────────────────────────────────────────────────────

pub const TOAST_SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
pub const TOAST_ERROR: Color32 = DANGER;
pub const TOAST_INFO: Color32 = Color32::from_rgb(96, 165, 250);

// ── Helpers ─────────────────────────────────────────────────────────────

/// Badge colour for an event status.
pub fn status_color(status: EventStatus) -> Color32 {
    match status {
        EventStatus::Upcoming => STATUS_UPCOMING,
        EventStatus::Ongoing => STATUS_ONGOING,
        EventStatus::Completed => STATUS_COMPLETED,
    }
}

/// Foreground colour and icon for a toast.
pub fn toast_style(kind: NotificationKind) -> (Color32, &'static str) {
    match kind {
        NotificationKind::Success => (TOAST_SUCCESS, "✔"),
        NotificationKind::Error => (TOAST_ERROR, "⚠"),
        NotificationKind::Info => (TOAST_INFO, "ℹ"),
    }
}

/// Translucent fill derived from a foreground colour, for badges and toasts.
pub fn tint(color: Color32, dark: bool) -> Color32 {
    let alpha = if dark { 40 } else { 60 };
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Secondary text colour for the active theme.
pub fn text_secondary(dark: bool) -> Color32 {
    if dark {
        TEXT_SECONDARY
    } else {
        Color32::from_rgb(71, 85, 105)
    }
}

/// Apply the dark or light theme.
pub fn apply_theme(ctx: &egui::Context, dark: bool) {
    if dark {
        apply_dark_theme(ctx);
    } else {
        apply_light_theme(ctx);
    }
}

/// Apply the EventDesk dark theme.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::from_rgb(51, 65, 85);
    visuals.faint_bg_color = BG_ROW_ALT;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(51, 65, 85);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(45, 58, 78);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(71, 85, 105);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_fill = Color32::from_rgb(21, 128, 61);
    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(51, 65, 85));

    ctx.set_visuals(visuals);
}

/// Apply the EventDesk light theme.
pub fn apply_light_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = BG_LIGHT;
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(226, 232, 240);

    visuals.override_text_color = Some(Color32::from_rgb(15, 23, 42));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(226, 232, 240);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(232, 236, 242);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(203, 213, 225);
    visuals.widgets.active.bg_fill = Color32::from_rgb(134, 239, 172);

    visuals.selection.bg_fill = Color32::from_rgb(187, 247, 208);
    visuals.selection.stroke = egui::Stroke::new(1.0, Color32::from_rgb(22, 163, 74));

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(203, 213, 225));

    ctx.set_visuals(visuals);
}
