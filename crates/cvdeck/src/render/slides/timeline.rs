use eframe::egui::{self, FontId, Pos2};

use crate::cv::WorkExperience;
use crate::render::text;
use crate::theme::Theme;

/// Work history on a vertical timeline: accent spine on the left, one entry
/// per position. Entries slide-fade in top to bottom.
pub fn render(
    ui: &egui::Ui,
    experiences: &[WorkExperience],
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
        "Professional Journey",
        center_x,
        y,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.heading_color, heading_opacity),
        content_rect.width(),
    ) + 36.0 * scale;

    let spine_x = content_rect.left() + 14.0 * scale;
    let entries_top = y;
    let text_left = spine_x + 44.0 * scale;
    let text_width = content_rect.right() - text_left;
    let entry_gap = 26.0 * scale;

    for (index, experience) in experiences.iter().enumerate() {
        let entry_opacity =
            opacity * text::entrance_opacity(elapsed, text::stagger_delay(index, 0.4, 0.3));

        // Timeline dot
        ui.painter().circle_filled(
            Pos2::new(spine_x, y + 14.0 * scale),
            7.0 * scale,
            Theme::with_opacity(theme.accent, entry_opacity),
        );

        y += text::draw_wrapped(
            ui,
            &experience.position,
            Pos2::new(text_left, y),
            FontId::proportional(theme.h3_size * 0.62 * scale),
            Theme::with_opacity(theme.heading_color, entry_opacity),
            text_width,
        ) + 6.0 * scale;

        // A company with a published website gets an external-link marker.
        let company = match experience.company_website() {
            Some(_) => format!("@ {} \u{2197}", experience.company),
            None => format!("@ {}", experience.company),
        };
        let meta = format!(
            "{}   \u{2022}   {}   \u{2022}   {}",
            company, experience.duration, experience.location
        );
        y += text::draw_wrapped(
            ui,
            &meta,
            Pos2::new(text_left, y),
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.accent, entry_opacity),
            text_width,
        ) + 8.0 * scale;

        y += text::draw_wrapped(
            ui,
            &experience.description,
            Pos2::new(text_left, y),
            FontId::proportional(theme.body_size * 0.78 * scale),
            Theme::with_opacity(theme.foreground, entry_opacity),
            text_width * 0.95,
        ) + entry_gap;
    }

    // Spine behind the dots, drawn to the bottom of the last entry.
    let spine = egui::Rect::from_min_max(
        Pos2::new(spine_x - 1.5 * scale, entries_top + 8.0 * scale),
        Pos2::new(spine_x + 1.5 * scale, (y - entry_gap).min(content_rect.bottom())),
    );
    ui.painter().rect_filled(
        spine,
        1.5 * scale,
        Theme::with_opacity(theme.accent, opacity * 0.35),
    );
}
