//! Team capacity strip shown under the toolbar.

use crate::model::{User, WorkloadLevel};
use crate::ui::theme;
use egui::{Color32, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

const ENTRY_WIDTH: f32 = 150.0;
const LOAD_BAR_HEIGHT: f32 = 5.0;

/// Render one row of user capacity meters.
pub fn show_workload_hud(users: &[User], ui: &mut Ui) {
    egui::ScrollArea::horizontal()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("TEAM LOAD")
                        .font(theme::font_small())
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(8.0);
                for user in users {
                    draw_user_entry(user, ui);
                }
            });
        });
}

fn draw_user_entry(user: &User, ui: &mut Ui) {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(ENTRY_WIDTH, theme::HUD_HEIGHT - 12.0), egui::Sense::hover());
    let painter = ui.painter();

    let level = user.workload_level();
    let color = theme::workload_color(level);

    // Avatar
    let avatar_center = Pos2::new(rect.left() + theme::AVATAR_RADIUS + 2.0, rect.center().y);
    painter.circle_filled(avatar_center, theme::AVATAR_RADIUS + 2.0, theme::BG_CHIP);
    painter.circle_stroke(
        avatar_center,
        theme::AVATAR_RADIUS + 2.0,
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );
    painter.text(
        avatar_center,
        egui::Align2::CENTER_CENTER,
        user.initial(),
        theme::font_bar(),
        theme::TEXT_PRIMARY,
    );

    // Alert badge when above capacity
    if level == WorkloadLevel::Overloaded {
        let badge_center = avatar_center + Vec2::new(theme::AVATAR_RADIUS, -theme::AVATAR_RADIUS);
        painter.circle_filled(badge_center, 5.5, color);
        painter.text(
            badge_center,
            egui::Align2::CENTER_CENTER,
            "!",
            theme::font_small(),
            Color32::WHITE,
        );
    }

    // Name + load percentage
    let text_left = rect.left() + (theme::AVATAR_RADIUS + 2.0) * 2.0 + 8.0;
    painter.text(
        Pos2::new(text_left, rect.center().y - 8.0),
        egui::Align2::LEFT_CENTER,
        &user.name,
        theme::font_sub(),
        theme::TEXT_PRIMARY,
    );
    painter.text(
        Pos2::new(rect.right() - 4.0, rect.center().y - 8.0),
        egui::Align2::RIGHT_CENTER,
        format!("{}%", user.load),
        theme::font_small(),
        theme::TEXT_DIM,
    );

    // Load bar
    let bar_rect = Rect::from_min_size(
        Pos2::new(text_left, rect.center().y + 2.0),
        Vec2::new(rect.right() - 4.0 - text_left, LOAD_BAR_HEIGHT),
    );
    painter.rect_filled(bar_rect, Rounding::same(2.5), theme::BG_CHIP);
    let fill_width = bar_rect.width() * (user.load.min(100) as f32 / 100.0);
    painter.rect_filled(
        Rect::from_min_size(bar_rect.min, Vec2::new(fill_width, LOAD_BAR_HEIGHT)),
        Rounding::same(2.5),
        color,
    );

    if response.hovered() {
        response.on_hover_text(format!("{}: {}% capacity", user.name, user.load));
    }
}
