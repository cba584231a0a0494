use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::cv::Project;
use crate::render::text;
use crate::theme::Theme;

/// How many project cards fit on the slide. The portfolio page shows the
/// full list; the deck keeps to a 2x2 grid.
const DECK_PROJECT_LIMIT: usize = 4;

pub fn render(
    ui: &egui::Ui,
    projects: &[Project],
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) {
    let padding = 90.0 * scale;
    let content_rect = rect.shrink(padding);
    let center_x = content_rect.center().x;

    let mut y = content_rect.top();

    let heading_opacity = opacity * text::entrance_opacity(elapsed, 0.2);
    y += text::draw_centered(
        ui,
        "Featured Projects",
        center_x,
        y,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, heading_opacity),
        content_rect.width(),
    ) + 36.0 * scale;

    let shown = &projects[..projects.len().min(DECK_PROJECT_LIMIT)];
    let cols = 2usize;
    let gap = 24.0 * scale;
    let rows = shown.len().div_ceil(cols).max(1);
    let cell_width = (content_rect.width() - gap * (cols as f32 - 1.0)) / cols as f32;
    let cell_height = ((content_rect.bottom() - y) - gap * (rows as f32 - 1.0)) / rows as f32;

    for (index, project) in shown.iter().enumerate() {
        let col = index % cols;
        let row = index / cols;
        let cell = egui::Rect::from_min_size(
            Pos2::new(
                content_rect.left() + col as f32 * (cell_width + gap),
                y + row as f32 * (cell_height + gap),
            ),
            egui::vec2(cell_width, cell_height),
        );
        let cell_opacity =
            opacity * text::entrance_opacity(elapsed, text::stagger_delay(index, 0.4, 0.15));
        draw_card(ui, project, theme, cell, cell_opacity, scale);
    }
}

fn draw_card(
    ui: &egui::Ui,
    project: &Project,
    theme: &Theme,
    cell: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    ui.painter()
        .rect_filled(cell, 10.0 * scale, Theme::with_opacity(theme.panel, opacity));

    let inner = cell.shrink(22.0 * scale);
    let mut y = inner.top();

    y += text::draw_wrapped(
        ui,
        &project.name,
        Pos2::new(inner.left(), y),
        FontId::proportional(theme.h3_size * 0.62 * scale),
        Theme::with_opacity(theme.heading_color, opacity),
        inner.width(),
    ) + 4.0 * scale;

    // Duration plus the channels that actually have a link. Placeholder
    // entries never make it into this row.
    let channels = project.links.resolved();
    let meta = if channels.is_empty() {
        project.duration.clone()
    } else {
        let labels: Vec<&str> = channels.iter().map(|(channel, _)| channel.label()).collect();
        format!("{}   \u{2022}   {}", project.duration, labels.join(" / "))
    };
    y += text::draw_wrapped(
        ui,
        &meta,
        Pos2::new(inner.left(), y),
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.accent, opacity),
        inner.width(),
    ) + 12.0 * scale;

    y += text::draw_wrapped(
        ui,
        &project.description,
        Pos2::new(inner.left(), y),
        FontId::proportional(theme.body_size * 0.75 * scale),
        Theme::with_opacity(theme.foreground, opacity),
        inner.width(),
    ) + 14.0 * scale;

    y += text::draw_chips(
        ui,
        &project.technologies,
        theme,
        Pos2::new(inner.left(), y),
        inner.width(),
        opacity,
        scale * 0.85,
        None,
    ) + 12.0 * scale;

    if let Some(highlight) = project.highlights.first() {
        if y < inner.bottom() - theme.small_size * scale {
            text::draw_bullets(
                ui,
                std::slice::from_ref(highlight),
                theme,
                Pos2::new(inner.left(), y),
                inner.width(),
                opacity * 0.85,
                scale,
                theme.small_size * scale,
            );
        }
    }

    ui.painter().rect_stroke(
        cell,
        10.0 * scale,
        egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.chip_border, opacity * 0.5)),
        StrokeKind::Inside,
    );
}
