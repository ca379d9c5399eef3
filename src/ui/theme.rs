use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::{TaskStatus, WorkloadLevel};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(10, 14, 23);
pub const BG_PANEL: Color32 = Color32::from_rgb(17, 24, 39);
pub const BG_HEADER: Color32 = Color32::from_rgb(24, 32, 50);
pub const BG_CHIP: Color32 = Color32::from_rgb(31, 41, 55);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(42, 50, 66);
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(99, 102, 241);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
pub const TEXT_DIM: Color32 = Color32::from_rgb(107, 114, 128);
pub const TEXT_ON_BAR: Color32 = Color32::from_rgb(255, 255, 255);

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241); // indigo
pub const GRID_LINE: Color32 = Color32::from_rgb(36, 44, 60);
pub const GHOST_BORDER: Color32 = Color32::from_rgb(120, 128, 144);
pub const DEPENDENCY_LINE: Color32 = Color32::from_rgb(99, 102, 241);
pub const MILESTONE: Color32 = Color32::from_rgb(168, 85, 247); // purple

pub const PROGRESS_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 55);

// ── Status colors ────────────────────────────────────────────────────────────

/// Bar fill for a status. Total over the enum; adding a status forces an
/// update here.
pub fn status_fill(status: TaskStatus) -> Color32 {
    match status {
        TaskStatus::OnTrack => Color32::from_rgb(99, 102, 241),   // indigo
        TaskStatus::AtRisk => Color32::from_rgb(245, 158, 11),    // amber
        TaskStatus::Blocked => Color32::from_rgb(244, 63, 94),    // rose
        TaskStatus::Completed => Color32::from_rgb(16, 185, 129), // emerald
    }
}

/// Darker border shade paired with [`status_fill`].
pub fn status_border(status: TaskStatus) -> Color32 {
    match status {
        TaskStatus::OnTrack => Color32::from_rgb(79, 70, 229),
        TaskStatus::AtRisk => Color32::from_rgb(217, 119, 6),
        TaskStatus::Blocked => Color32::from_rgb(225, 29, 72),
        TaskStatus::Completed => Color32::from_rgb(5, 150, 105),
    }
}

// ── Workload colors ──────────────────────────────────────────────────────────

pub fn workload_color(level: WorkloadLevel) -> Color32 {
    match level {
        WorkloadLevel::Normal => Color32::from_rgb(16, 185, 129),     // emerald
        WorkloadLevel::Elevated => Color32::from_rgb(245, 158, 11),   // amber
        WorkloadLevel::Overloaded => Color32::from_rgb(244, 63, 94),  // rose
    }
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 40.0;
pub const ROW_GAP: f32 = 16.0;
pub const HEADER_HEIGHT: f32 = 32.0;
pub const GROUP_HEADER_HEIGHT: f32 = 34.0;
pub const GROUP_GAP: f32 = 24.0;
pub const BAR_ROUNDING: f32 = 6.0;
pub const BAR_INSET: f32 = 6.0; // vertical inset so bars don't touch row edges
pub const AVATAR_RADIUS: f32 = 11.0;
pub const HUD_HEIGHT: f32 = 52.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_sub() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_bar() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_group() -> FontId {
    FontId::proportional(14.0)
}

pub fn font_menu() -> FontId {
    FontId::proportional(12.5)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::from_rgb(13, 18, 30); // TextEdit bg
    visuals.faint_bg_color = BG_CHIP;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(31, 41, 55);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(42, 52, 70);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(52, 62, 82);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.widgets.open.bg_fill = Color32::from_rgb(40, 50, 68);
    visuals.widgets.open.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.open.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.open.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = Color32::from_rgba_premultiplied(99, 102, 241, 45);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);

    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_a_distinct_fill() {
        let fills = [
            status_fill(TaskStatus::OnTrack),
            status_fill(TaskStatus::AtRisk),
            status_fill(TaskStatus::Blocked),
            status_fill(TaskStatus::Completed),
        ];
        for (i, a) in fills.iter().enumerate() {
            for b in fills.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn workload_tiers_map_to_traffic_light() {
        assert_ne!(
            workload_color(WorkloadLevel::Normal),
            workload_color(WorkloadLevel::Overloaded)
        );
        assert_ne!(
            workload_color(WorkloadLevel::Elevated),
            workload_color(WorkloadLevel::Overloaded)
        );
    }
}
