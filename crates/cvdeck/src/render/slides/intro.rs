use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::cv::PersonalInfo;
use crate::render::text;
use crate::theme::Theme;

/// Opening slide: name, title, summary, and a row of contact chips.
pub fn render(
    ui: &egui::Ui,
    info: &PersonalInfo,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) {
    let padding = 80.0 * scale;
    let content_rect = rect.shrink(padding);
    let center_x = content_rect.center().x;

    let mut y = content_rect.top() + content_rect.height() * 0.16;

    let name_opacity = opacity * text::entrance_opacity(elapsed, 0.2);
    y += text::draw_centered(
        ui,
        &info.name,
        center_x,
        y,
        FontId::proportional(theme.h1_size * scale),
        Theme::with_opacity(theme.heading_color, name_opacity),
        content_rect.width(),
    ) + 24.0 * scale;

    let title_opacity = opacity * text::entrance_opacity(elapsed, 0.4);
    y += text::draw_centered(
        ui,
        &info.title,
        center_x,
        y,
        FontId::proportional(theme.h3_size * 0.8 * scale),
        Theme::with_opacity(theme.accent, title_opacity),
        content_rect.width(),
    ) + 40.0 * scale;

    let summary_opacity = opacity * text::entrance_opacity(elapsed, 0.6);
    y += text::draw_centered(
        ui,
        &info.summary,
        center_x,
        y,
        FontId::proportional(theme.body_size * scale),
        Theme::with_opacity(theme.foreground, summary_opacity),
        content_rect.width() * 0.6,
    ) + 56.0 * scale;

    draw_contact_row(ui, info, theme, center_x, y, opacity, elapsed, scale);
}

/// Contact chips, centered as one row. Phone is simply left out when absent.
#[allow(clippy::too_many_arguments)]
fn draw_contact_row(
    ui: &egui::Ui,
    info: &PersonalInfo,
    theme: &Theme,
    center_x: f32,
    y: f32,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) {
    let mut entries: Vec<&str> = Vec::new();
    if let Some(phone) = info.phone.as_deref() {
        entries.push(phone);
    }
    entries.push(&info.email);
    entries.push(&info.website);
    entries.push(&info.linkedin);
    entries.push(&info.github);

    let font = FontId::proportional(theme.small_size * scale);
    let pad_x = 16.0 * scale;
    let pad_y = 10.0 * scale;
    let gap = 14.0 * scale;

    // Measure first so the whole row can be centered.
    let widths: Vec<f32> = entries
        .iter()
        .map(|text| {
            ui.painter()
                .layout_no_wrap(text.to_string(), font.clone(), theme.foreground)
                .rect
                .width()
                + pad_x * 2.0
        })
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + gap * (entries.len().saturating_sub(1)) as f32;

    let mut x = center_x - total / 2.0;
    for (index, (entry, width)) in entries.iter().zip(&widths).enumerate() {
        let chip_opacity =
            opacity * text::entrance_opacity(elapsed, text::stagger_delay(index, 0.8, 0.1));
        let text_color = Theme::with_opacity(theme.foreground, chip_opacity);
        let galley = ui
            .painter()
            .layout_no_wrap(entry.to_string(), font.clone(), text_color);
        let chip_rect = egui::Rect::from_min_size(
            Pos2::new(x, y),
            egui::vec2(*width, galley.rect.height() + pad_y * 2.0),
        );
        ui.painter().rect_filled(
            chip_rect,
            8.0 * scale,
            Theme::with_opacity(theme.panel, chip_opacity),
        );
        ui.painter().rect_stroke(
            chip_rect,
            8.0 * scale,
            egui::Stroke::new(
                1.0 * scale,
                Theme::with_opacity(theme.chip_border, chip_opacity * 0.7),
            ),
            StrokeKind::Inside,
        );
        ui.painter().galley(
            Pos2::new(chip_rect.left() + pad_x, chip_rect.top() + pad_y),
            galley,
            text_color,
        );
        x += width + gap;
    }
}
