use crate::app::{TaskFilter, ZoomLevel};
use crate::model::layout::{self, BarGeometry, OverflowPolicy};
use crate::model::{Roadmap, Task, TaskKind, User};
use crate::ui::theme;
use egui::{Color32, Pos2, Rect, Rounding, Sense, Shape, Stroke, Ui, Vec2};
use uuid::Uuid;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_GAP: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const GRID_MARGIN: f32 = 24.0;
const MIN_CHART_WIDTH: f32 = 900.0;

/// Render the roadmap chart: timeline header, group blocks, task bars.
pub fn show_roadmap_chart(
    roadmap: &Roadmap,
    zoom: ZoomLevel,
    policy: OverflowPolicy,
    filter: &TaskFilter,
    selected_task: &mut Option<Uuid>,
    ui: &mut Ui,
) {
    let available = ui.available_size();
    let chart_width = available.x.max(MIN_CHART_WIDTH);
    let chart_height = chart_body_height(roadmap, filter).max(available.y);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) =
                ui.allocate_painter(Vec2::new(chart_width, chart_height), Sense::click());
            let origin = response.rect.min;
            let grid_left = origin.x + GRID_MARGIN;
            let grid_width = chart_width - GRID_MARGIN * 2.0;
            let mut consumed_click = false;

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

            draw_timeline_header(&painter, origin, grid_left, grid_width, zoom);
            draw_grid_lines(&painter, origin, grid_left, grid_width, chart_height, zoom);

            let mut y = origin.y + HEADER_HEIGHT + theme::GROUP_GAP * 0.5;
            for group in &roadmap.groups {
                let visible: Vec<&Task> =
                    group.tasks.iter().filter(|t| filter.matches(t)).collect();
                if visible.is_empty() && !filter.is_empty() {
                    continue;
                }

                // Group header: name + item count chip
                painter.text(
                    Pos2::new(grid_left, y + theme::GROUP_HEADER_HEIGHT / 2.0),
                    egui::Align2::LEFT_CENTER,
                    &group.name,
                    theme::font_group(),
                    theme::TEXT_PRIMARY,
                );
                let count_text = format!("{} items", visible.len());
                let name_galley = painter.layout_no_wrap(
                    group.name.clone(),
                    theme::font_group(),
                    theme::TEXT_PRIMARY,
                );
                let chip_pos = Pos2::new(
                    grid_left + name_galley.size().x + 12.0,
                    y + theme::GROUP_HEADER_HEIGHT / 2.0,
                );
                painter.text(
                    chip_pos,
                    egui::Align2::LEFT_CENTER,
                    count_text,
                    theme::font_small(),
                    theme::TEXT_DIM,
                );
                y += theme::GROUP_HEADER_HEIGHT;

                for task in visible {
                    let row_top = y;
                    if task.is_milestone() {
                        if let Some(rect) = draw_milestone(
                            &painter, grid_left, grid_width, task, row_top,
                            *selected_task == Some(task.id),
                        ) {
                            handle_hover(
                                ui, roadmap, task, rect, selected_task, &mut consumed_click,
                            );
                        }
                    } else if let Some(rect) = draw_task_bar(
                        &painter, roadmap, grid_left, grid_width, task, row_top, policy,
                        *selected_task == Some(task.id),
                    ) {
                        handle_hover(ui, roadmap, task, rect, selected_task, &mut consumed_click);
                    }
                    y += ROW_HEIGHT + ROW_GAP;
                }

                y += theme::GROUP_GAP;
            }

            // Empty click on background clears selection
            if response.clicked() && !consumed_click {
                *selected_task = None;
            }
        });
}

fn chart_body_height(roadmap: &Roadmap, filter: &TaskFilter) -> f32 {
    let mut height = HEADER_HEIGHT + theme::GROUP_GAP * 0.5;
    for group in &roadmap.groups {
        let visible = group.tasks.iter().filter(|t| filter.matches(t)).count();
        if visible == 0 && !filter.is_empty() {
            continue;
        }
        height += theme::GROUP_HEADER_HEIGHT
            + visible as f32 * (ROW_HEIGHT + ROW_GAP)
            + theme::GROUP_GAP;
    }
    height + 40.0
}

fn column_x(grid_left: f32, grid_width: f32, percent: f32) -> f32 {
    grid_left + percent / 100.0 * grid_width
}

fn draw_timeline_header(
    painter: &egui::Painter,
    origin: Pos2,
    grid_left: f32,
    grid_width: f32,
    zoom: ZoomLevel,
) {
    painter.rect_filled(
        Rect::from_min_size(
            Pos2::new(origin.x, origin.y),
            Vec2::new(grid_width + GRID_MARGIN * 2.0, HEADER_HEIGHT),
        ),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + grid_width + GRID_MARGIN * 2.0, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let columns = layout::GRID_COLUMNS;
    match zoom {
        ZoomLevel::Week => {
            let col_width = grid_width / columns as f32;
            for week in 0..columns {
                let x = grid_left + week as f32 * col_width;
                painter.text(
                    Pos2::new(x + col_width / 2.0, origin.y + HEADER_HEIGHT / 2.0),
                    egui::Align2::CENTER_CENTER,
                    format!("WEEK {}", week + 1),
                    theme::font_sub(),
                    theme::TEXT_SECONDARY,
                );
            }
        }
        ZoomLevel::Month => {
            // Four-week blocks
            let block_width = grid_width / 3.0;
            for month in 0..3 {
                let x = grid_left + month as f32 * block_width;
                painter.text(
                    Pos2::new(x + block_width / 2.0, origin.y + HEADER_HEIGHT / 2.0),
                    egui::Align2::CENTER_CENTER,
                    format!("MONTH {}", month + 1),
                    theme::font_header(),
                    theme::TEXT_SECONDARY,
                );
            }
        }
    }
}

fn draw_grid_lines(
    painter: &egui::Painter,
    origin: Pos2,
    grid_left: f32,
    grid_width: f32,
    height: f32,
    zoom: ZoomLevel,
) {
    let columns = layout::GRID_COLUMNS;
    let col_width = grid_width / columns as f32;
    let step = match zoom {
        ZoomLevel::Week => 1,
        ZoomLevel::Month => 4,
    };
    for col in (0..=columns).step_by(step) {
        let x = grid_left + col as f32 * col_width;
        painter.line_segment(
            [
                Pos2::new(x, origin.y + HEADER_HEIGHT),
                Pos2::new(x, origin.y + height),
            ],
            Stroke::new(0.5, theme::GRID_LINE),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_task_bar(
    painter: &egui::Painter,
    roadmap: &Roadmap,
    grid_left: f32,
    grid_width: f32,
    task: &Task,
    y: f32,
    policy: OverflowPolicy,
    is_selected: bool,
) -> Option<Rect> {
    let TaskKind::Bar { duration, progress, .. } = task.kind else {
        return None;
    };
    let geo: BarGeometry =
        match layout::bar_geometry(task.start, duration, layout::GRID_COLUMNS, policy) {
            Ok(geo) => geo,
            Err(err) => {
                // Degrade visually: the row stays empty.
                log::warn!("skipping bar for '{}': {}", task.title, err);
                return None;
            }
        };

    let x_start = column_x(grid_left, grid_width, geo.left_percent);
    let bar_width = (geo.width_percent / 100.0 * grid_width).max(6.0);
    let inset = theme::BAR_INSET;
    let bar_rect = Rect::from_min_size(
        Pos2::new(x_start, y + inset),
        Vec2::new(bar_width, ROW_HEIGHT - inset * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    // Dependency connector, purely decorative, drawn behind the bar
    if task.depends_on.is_some() {
        draw_dependency_glyph(painter, bar_rect);
    }

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(1.0, 2.0)),
        rounding,
        Color32::from_black_alpha(35),
    );

    // Main bar
    let fill = theme::status_fill(task.status);
    painter.rect_filled(bar_rect, rounding, fill);
    painter.rect_stroke(bar_rect, rounding, Stroke::new(1.0, theme::status_border(task.status)));

    // Progress fill (darker overlay from the left)
    if progress > 0 {
        let progress_width = bar_width * (progress.min(100) as f32 / 100.0);
        painter.rect_filled(
            Rect::from_min_size(bar_rect.min, Vec2::new(progress_width, bar_rect.height())),
            rounding,
            theme::PROGRESS_OVERLAY,
        );
    }

    // Ghost bar: dashed outline over the planned span when slipping
    if let Some(slippage) = task.slippage() {
        let ghost_width = bar_width * slippage.ghost_width_percent / 100.0;
        let ghost_rect = Rect::from_min_size(
            bar_rect.min,
            Vec2::new(ghost_width, bar_rect.height()),
        );
        draw_dashed_rect(painter, ghost_rect, Stroke::new(1.5, theme::GHOST_BORDER));
    }

    if geo.clipped {
        // Jagged hint that the bar continues past the grid
        painter.line_segment(
            [
                Pos2::new(bar_rect.right() - 1.0, bar_rect.top() + 2.0),
                Pos2::new(bar_rect.right() - 1.0, bar_rect.bottom() - 2.0),
            ],
            Stroke::new(2.0, Color32::from_white_alpha(90)),
        );
    }

    if is_selected {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    // Title, clipped to the bar
    if bar_width > 30.0 {
        let galley =
            painter.layout_no_wrap(task.title.clone(), theme::font_bar(), theme::TEXT_ON_BAR);
        let clipped = painter.with_clip_rect(bar_rect.shrink2(Vec2::new(6.0, 0.0)));
        let text_y = bar_rect.top() + (bar_rect.height() - galley.size().y) / 2.0;
        clipped.galley(
            Pos2::new(bar_rect.left() + 8.0, text_y),
            galley,
            Color32::TRANSPARENT,
        );
    }

    // Owner avatar (and hand-off pair) pinned to the right edge
    let mut avatar_x = bar_rect.right() - theme::AVATAR_RADIUS - 4.0;
    if task.has_hand_off() {
        if let Some(next) = task.hand_off_to.and_then(|id| roadmap.find_user(id)) {
            draw_avatar(painter, Pos2::new(avatar_x, bar_rect.center().y), next);
            avatar_x -= theme::AVATAR_RADIUS * 2.0 + 2.0;
            // Connector glyph between the two owners
            painter.circle_filled(
                Pos2::new(avatar_x + theme::AVATAR_RADIUS + 1.0, bar_rect.center().y),
                5.0,
                Color32::from_rgb(17, 24, 39),
            );
            painter.text(
                Pos2::new(avatar_x + theme::AVATAR_RADIUS + 1.0, bar_rect.center().y),
                egui::Align2::CENTER_CENTER,
                "→",
                theme::font_small(),
                Color32::WHITE,
            );
        }
    }
    if let Some(owner) = roadmap.find_user(task.owner) {
        draw_avatar(painter, Pos2::new(avatar_x, bar_rect.center().y), owner);
    }

    Some(bar_rect)
}

fn draw_avatar(painter: &egui::Painter, center: Pos2, user: &User) {
    painter.circle_filled(center, theme::AVATAR_RADIUS, theme::BG_CHIP);
    painter.circle_stroke(
        center,
        theme::AVATAR_RADIUS,
        Stroke::new(1.0, Color32::from_white_alpha(50)),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        user.initial(),
        theme::font_sub(),
        theme::TEXT_PRIMARY,
    );
}

/// Fixed-shape dashed elbow ending in a dot at the bar's left edge. It
/// never inspects the dependency's own position.
fn draw_dependency_glyph(painter: &egui::Painter, bar_rect: Rect) {
    let end = Pos2::new(bar_rect.left() - 2.0, bar_rect.center().y);
    let start = Pos2::new(end.x - 22.0, end.y - 12.0);
    let mid = Pos2::new(end.x - 8.0, end.y - 12.0);
    for segment in [[start, mid], [mid, end]] {
        painter.extend(Shape::dashed_line(
            &segment,
            Stroke::new(2.0, theme::DEPENDENCY_LINE),
            4.0,
            4.0,
        ));
    }
    painter.circle_filled(end, 2.5, theme::DEPENDENCY_LINE);
}

fn draw_dashed_rect(painter: &egui::Painter, rect: Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for pair in corners.windows(2) {
        painter.extend(Shape::dashed_line(&[pair[0], pair[1]], stroke, 4.0, 3.0));
    }
}

fn draw_milestone(
    painter: &egui::Painter,
    grid_left: f32,
    grid_width: f32,
    task: &Task,
    y: f32,
    is_selected: bool,
) -> Option<Rect> {
    let left_percent = match layout::milestone_geometry(task.start, layout::GRID_COLUMNS) {
        Ok(left) => left,
        Err(err) => {
            log::warn!("skipping milestone '{}': {}", task.title, err);
            return None;
        }
    };
    let x = column_x(grid_left, grid_width, left_percent);
    let center = Pos2::new(x, y + ROW_HEIGHT / 2.0);
    let size = (ROW_HEIGHT / 2.0 - 8.0).max(6.0);

    let points = vec![
        Pos2::new(center.x, center.y - size),
        Pos2::new(center.x + size, center.y),
        Pos2::new(center.x, center.y + size),
        Pos2::new(center.x - size, center.y),
    ];
    painter.add(Shape::convex_polygon(
        points.clone(),
        theme::MILESTONE,
        Stroke::new(1.5, Color32::WHITE),
    ));

    // Stem below the diamond
    painter.line_segment(
        [
            Pos2::new(center.x, center.y + size),
            Pos2::new(center.x, center.y + size + 10.0),
        ],
        Stroke::new(1.5, theme::MILESTONE.gamma_multiply(0.5)),
    );

    if is_selected {
        painter.add(Shape::convex_polygon(
            points,
            Color32::TRANSPARENT,
            Stroke::new(2.0, theme::BORDER_ACCENT),
        ));
    }

    painter.text(
        Pos2::new(x + size + 8.0, center.y),
        egui::Align2::LEFT_CENTER,
        &task.title,
        theme::font_bar(),
        theme::MILESTONE,
    );

    Some(Rect::from_center_size(
        center,
        Vec2::splat(layout::MILESTONE_MARKER_WIDTH),
    ))
}

fn handle_hover(
    ui: &mut Ui,
    roadmap: &Roadmap,
    task: &Task,
    rect: Rect,
    selected_task: &mut Option<Uuid>,
    consumed_click: &mut bool,
) {
    let response = ui.interact(
        rect,
        ui.make_persistent_id(("roadmap-task", task.id)),
        Sense::click(),
    );
    if response.clicked() {
        *selected_task = Some(task.id);
        *consumed_click = true;
    }
    if response.hovered() {
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            ui.layer_id(),
            egui::Id::new(("task-tip", task.id)),
            |ui| {
                ui.strong(&task.title);
                ui.label(
                    egui::RichText::new(task.status.label())
                        .color(theme::status_fill(task.status))
                        .small(),
                );
                match task.kind {
                    TaskKind::Bar {
                        duration,
                        progress,
                        planned_duration,
                    } => {
                        ui.label(format!(
                            "{} Weeks (Est: {})",
                            duration,
                            planned_duration.unwrap_or(duration)
                        ));
                        ui.label(format!("Progress: {}%", progress));
                    }
                    TaskKind::Milestone => {
                        ui.label(format!("Milestone · Week {}", task.start));
                    }
                }
                if let Some(owner) = roadmap.find_user(task.owner) {
                    ui.label(format!("Owner: {}", owner.name));
                }
                if let Some(next) = task.hand_off_to.and_then(|id| roadmap.find_user(id)) {
                    ui.label(
                        egui::RichText::new(format!("Hand-off to {}", next.name))
                            .color(theme::ACCENT),
                    );
                }
            },
        );
    }
}
