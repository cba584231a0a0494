use eframe::egui::{self, FontId, Pos2};

use crate::cv::SkillCategory;
use crate::render::text;
use crate::theme::Theme;

/// Skill categories in a two-column grid of panels, each holding a wrapping
/// row of tag chips.
pub fn render(
    ui: &egui::Ui,
    skills: &[SkillCategory],
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
        "Technical Expertise",
        center_x,
        y,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, heading_opacity),
        content_rect.width(),
    ) + 12.0 * scale;

    y += text::draw_centered(
        ui,
        "A toolkit for building modern, scalable web and mobile applications",
        center_x,
        y,
        FontId::proportional(theme.body_size * 0.85 * scale),
        Theme::with_opacity(theme.muted, heading_opacity),
        content_rect.width() * 0.8,
    ) + 44.0 * scale;

    let cols = 2usize;
    let gap = 24.0 * scale;
    let cell_width = (content_rect.width() - gap * (cols as f32 - 1.0)) / cols as f32;
    let rows = skills.len().div_ceil(cols);
    let cell_height = ((content_rect.bottom() - y) - gap * (rows as f32 - 1.0)) / rows as f32;
    let cell_padding = 22.0 * scale;

    for (index, category) in skills.iter().enumerate() {
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
            opacity * text::entrance_opacity(elapsed, text::stagger_delay(index, 0.4, 0.2));
        ui.painter().rect_filled(
            cell,
            10.0 * scale,
            Theme::with_opacity(theme.panel, cell_opacity),
        );

        let inner = cell.shrink(cell_padding);
        let title_height = text::draw_wrapped(
            ui,
            &category.category,
            inner.left_top(),
            FontId::proportional(theme.h3_size * 0.62 * scale),
            Theme::with_opacity(theme.heading_color, cell_opacity),
            inner.width(),
        );
        text::draw_chips(
            ui,
            &category.items,
            theme,
            Pos2::new(inner.left(), inner.top() + title_height + 16.0 * scale),
            inner.width(),
            cell_opacity,
            scale,
            Some(elapsed - text::stagger_delay(index, 0.6, 0.2)),
        );
    }
}
