use crate::app::RoadmapApp;
use crate::ui::theme;
use egui::{Context, RichText, Window};

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut RoadmapApp, ctx: &Context) {
    let mut open = app.show_about;
    Window::new(RichText::new("About Roadmap View").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Roadmap View")
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                    .small()
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(
                    "A native execution-roadmap viewer: twelve-week timeline, \
                     planned-vs-actual slippage, hand-offs, and team capacity.",
                )
                .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(4.0);
        });
    app.show_about = open;
}
