use eframe::egui::{self, FontId, Pos2};

use crate::cv::WorkExperience;
use crate::render::text;
use crate::theme::Theme;

/// Spotlight on the most recent position: headline, meta line, description,
/// tech tags, and key achievements.
pub fn render(
    ui: &egui::Ui,
    role: &WorkExperience,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) {
    let padding = 100.0 * scale;
    let content_rect = rect.shrink(padding);
    let width = content_rect.width();
    let left = content_rect.left();

    let mut y = content_rect.top() + content_rect.height() * 0.06;

    let label_opacity = opacity * text::entrance_opacity(elapsed, 0.2);
    y += text::draw_wrapped(
        ui,
        "Current Role",
        Pos2::new(left, y),
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.accent, label_opacity),
        width,
    ) + 16.0 * scale;

    y += text::draw_wrapped(
        ui,
        &role.position,
        Pos2::new(left, y),
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, label_opacity),
        width,
    ) + 18.0 * scale;

    let meta = format!(
        "@ {}   \u{2022}   {}   \u{2022}   {}",
        role.company, role.period, role.location
    );
    let meta_opacity = opacity * text::entrance_opacity(elapsed, 0.4);
    y += text::draw_wrapped(
        ui,
        &meta,
        Pos2::new(left, y),
        FontId::proportional(theme.body_size * 0.9 * scale),
        Theme::with_opacity(theme.accent_secondary, meta_opacity),
        width,
    ) + 36.0 * scale;

    let body_opacity = opacity * text::entrance_opacity(elapsed, 0.6);
    y += text::draw_wrapped(
        ui,
        &role.description,
        Pos2::new(left, y),
        FontId::proportional(theme.body_size * scale),
        Theme::with_opacity(theme.foreground, body_opacity),
        width * 0.85,
    ) + 36.0 * scale;

    y += text::draw_chips(
        ui,
        &role.technologies,
        theme,
        Pos2::new(left, y),
        width,
        body_opacity,
        scale,
        Some(elapsed - 0.7),
    ) + 44.0 * scale;

    let achievements_opacity = opacity * text::entrance_opacity(elapsed, 0.9);
    y += text::draw_wrapped(
        ui,
        "Key Achievements",
        Pos2::new(left, y),
        FontId::proportional(theme.h3_size * 0.7 * scale),
        Theme::with_opacity(theme.heading_color, achievements_opacity),
        width,
    ) + 18.0 * scale;

    text::draw_bullets(
        ui,
        &role.achievements,
        theme,
        Pos2::new(left, y),
        width * 0.9,
        achievements_opacity,
        scale,
        theme.body_size * 0.9 * scale,
    );
}
