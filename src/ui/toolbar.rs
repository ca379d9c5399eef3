use crate::app::{RoadmapApp, ZoomLevel};
use crate::model::layout::OverflowPolicy;
use crate::model::{Priority, TaskStatus};
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top toolbar: menu bar plus the search/filter row.
pub fn show_toolbar(app: &mut RoadmapApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  Open...", icons::FOLDER_OPEN)).clicked() {
                app.open_roadmap();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .button(format!("{}  Save          Ctrl+S", icons::FLOPPY_DISK))
                .clicked()
            {
                app.save_roadmap();
                ui.close_menu();
            }
            if ui.button(format!("{}  Save As...", icons::FLOPPY_DISK)).clicked() {
                app.save_roadmap_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Export CSV...", icons::EXPORT)).clicked() {
                app.export_csv();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            ui.label(RichText::new("Zoom").small().weak());
            if ui.radio_value(&mut app.zoom, ZoomLevel::Week, "Week").clicked() {
                ui.close_menu();
            }
            if ui.radio_value(&mut app.zoom, ZoomLevel::Month, "Month").clicked() {
                ui.close_menu();
            }
            ui.separator();
            ui.label(RichText::new("Off-grid tasks").small().weak());
            if ui
                .radio_value(&mut app.overflow_policy, OverflowPolicy::Allow, "Allow overflow")
                .clicked()
            {
                ui.close_menu();
            }
            if ui
                .radio_value(&mut app.overflow_policy, OverflowPolicy::Clip, "Clip to grid")
                .clicked()
            {
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  About", icons::INFO)).clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.separator();

        // Week/Month toggle mirrored inline, like the page header buttons
        ui.selectable_value(&mut app.zoom, ZoomLevel::Month, "Month");
        ui.selectable_value(&mut app.zoom, ZoomLevel::Week, "Week");
    });

    ui.add_space(2.0);

    // Search + filters + legend
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.filter.query)
                .hint_text("Search tasks...")
                .desired_width(180.0),
        );

        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(
                app.filter
                    .status
                    .map(TaskStatus::label)
                    .unwrap_or("Status: All"),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.filter.status, None, "All");
                for status in [
                    TaskStatus::OnTrack,
                    TaskStatus::AtRisk,
                    TaskStatus::Blocked,
                    TaskStatus::Completed,
                ] {
                    ui.selectable_value(&mut app.filter.status, Some(status), status.label());
                }
            });

        egui::ComboBox::from_id_salt("priority_filter")
            .selected_text(
                app.filter
                    .priority
                    .map(Priority::label)
                    .unwrap_or("Priority: All"),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.filter.priority, None, "All");
                for priority in [Priority::High, Priority::Medium, Priority::Low] {
                    ui.selectable_value(&mut app.filter.priority, Some(priority), priority.label());
                }
            });

        ui.separator();

        for status in [TaskStatus::OnTrack, TaskStatus::AtRisk, TaskStatus::Blocked] {
            ui.label(
                RichText::new(format!("{} {}", icons::SQUARE, status.label()))
                    .font(theme::font_sub())
                    .color(theme::status_fill(status)),
            );
        }
    });
    ui.add_space(4.0);
}
