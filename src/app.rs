use std::path::PathBuf;

use uuid::Uuid;

use crate::data::{DataSource, SampleData};
use crate::model::layout::{self, OverflowPolicy};
use crate::model::validate::{self, Severity};
use crate::model::{Priority, Roadmap, Task, TaskStatus};
use crate::ui;

/// Timeline zoom: week columns or four-week blocks in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomLevel {
    Week,
    Month,
}

/// Active search/filter state applied to the chart.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub query: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.status.is_none() && self.priority.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() && !task.title.to_lowercase().contains(&query) {
            return false;
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        true
    }
}

/// Main application state.
pub struct RoadmapApp {
    pub roadmap: Roadmap,
    pub file_path: Option<PathBuf>,
    pub selected_task: Option<Uuid>,

    pub zoom: ZoomLevel,
    pub overflow_policy: OverflowPolicy,
    pub filter: TaskFilter,

    // Dialog state
    pub show_about: bool,

    // Status bar
    pub status_message: String,
    pub issue_count: usize,
}

impl RoadmapApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let roadmap = SampleData.load_roadmap();
        let mut app = Self {
            roadmap,
            file_path: None,
            selected_task: None,
            zoom: ZoomLevel::Week,
            overflow_policy: OverflowPolicy::Allow,
            filter: TaskFilter::default(),
            show_about: false,
            status_message: "Ready".to_string(),
            issue_count: 0,
        };
        app.revalidate();
        app
    }

    /// Re-run roadmap validation, log findings, and update the counter.
    pub fn revalidate(&mut self) {
        let issues = validate::check_roadmap(&self.roadmap, layout::GRID_COLUMNS);
        for issue in &issues {
            match issue.severity() {
                Severity::Error => log::error!("{}", issue),
                Severity::Warning => log::warn!("{}", issue),
            }
        }
        self.issue_count = issues.len();
    }

    // --- File operations ---

    pub fn open_roadmap(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Roadmap", &["roadmap.json", "json"])
            .pick_file()
        {
            match crate::io::load_roadmap(&path) {
                Ok(roadmap) => {
                    self.roadmap = roadmap;
                    self.file_path = Some(path);
                    self.selected_task = None;
                    self.revalidate();
                    self.status_message = "Roadmap loaded".to_string();
                }
                Err(e) => {
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_roadmap(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.roadmap.touch();
            match crate::io::save_roadmap(&self.roadmap, &path) {
                Ok(()) => self.status_message = "Roadmap saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        } else {
            self.save_roadmap_as();
        }
    }

    pub fn save_roadmap_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Roadmap", &["roadmap.json", "json"])
            .set_file_name(format!("{}.roadmap.json", self.roadmap.name))
            .save_file()
        {
            self.file_path = Some(path.clone());
            self.roadmap.touch();
            match crate::io::save_roadmap(&self.roadmap, &path) {
                Ok(()) => self.status_message = "Roadmap saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        }
    }

    pub fn export_csv(&mut self) {
        if self.roadmap.task_count() == 0 {
            self.status_message = "Nothing to export — roadmap has no tasks".to_string();
            return;
        }

        let default_name = format!("{}.csv", self.roadmap.name);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&default_name)
            .save_file()
        {
            match crate::io::csv_export::export_csv(&self.roadmap, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} tasks to CSV", count);
                }
                Err(e) => {
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }
}

impl eframe::App for RoadmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let should_save = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S));
        if should_save {
            self.save_roadmap();
        }

        // Top panel: toolbar + filters
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Team workload HUD
        egui::TopBottomPanel::top("workload_hud")
            .exact_height(ui::theme::HUD_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(6.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui::workload_hud::show_workload_hud(&self.roadmap.users, ui);
            });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_sub())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.roadmap.task_count()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        if self.issue_count > 0 {
                            ui.label(
                                egui::RichText::new(" · ")
                                    .size(10.5)
                                    .color(ui::theme::TEXT_DIM),
                            );
                            ui.label(
                                egui::RichText::new(format!("Issues: {}", self.issue_count))
                                    .size(10.5)
                                    .color(ui::theme::status_fill(TaskStatus::AtRisk)),
                            );
                        }
                    });
                });
            });

        // Central panel: roadmap chart
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            ui::roadmap_chart::show_roadmap_chart(
                &self.roadmap,
                self.zoom,
                self.overflow_policy,
                &self.filter,
                &mut self.selected_task,
                ui,
            );
        });

        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_roadmap;

    #[test]
    fn empty_filter_matches_everything() {
        let roadmap = sample_roadmap();
        let filter = TaskFilter::default();
        assert!(filter.is_empty());
        assert!(roadmap.tasks().all(|t| filter.matches(t)));
    }

    #[test]
    fn query_filter_is_case_insensitive() {
        let roadmap = sample_roadmap();
        let filter = TaskFilter {
            query: "data VALID".to_string(),
            ..Default::default()
        };
        let matched: Vec<_> = roadmap.tasks().filter(|t| filter.matches(t)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Data Validation");
    }

    #[test]
    fn status_and_priority_filters_combine() {
        let roadmap = sample_roadmap();
        let filter = TaskFilter {
            status: Some(TaskStatus::OnTrack),
            priority: Some(Priority::High),
            ..Default::default()
        };
        let matched: Vec<_> = roadmap.tasks().filter(|t| filter.matches(t)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Data Validation");
    }
}
