use eframe::egui::{self, FontId, Pos2};

use crate::cv::PersonalInfo;
use crate::render::text;
use crate::theme::Theme;

/// Final slide: thank-you headline and the ways to get in touch.
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

    let mut y = content_rect.top() + content_rect.height() * 0.18;

    let heading_opacity = opacity * text::entrance_opacity(elapsed, 0.2);
    y += text::draw_centered(
        ui,
        "Thank You",
        center_x,
        y,
        FontId::proportional(theme.h1_size * scale),
        Theme::with_opacity(theme.heading_color, heading_opacity),
        content_rect.width(),
    ) + 20.0 * scale;

    let sub_opacity = opacity * text::entrance_opacity(elapsed, 0.4);
    y += text::draw_centered(
        ui,
        "Let's build something great together",
        center_x,
        y,
        FontId::proportional(theme.h3_size * 0.75 * scale),
        Theme::with_opacity(theme.accent, sub_opacity),
        content_rect.width(),
    ) + 64.0 * scale;

    let contacts = contact_lines(info);
    let label_font = FontId::proportional(theme.small_size * scale);
    let value_font = FontId::proportional(theme.body_size * 0.9 * scale);
    let row_gap = 22.0 * scale;

    for (index, (label, value)) in contacts.iter().enumerate() {
        let row_opacity =
            opacity * text::entrance_opacity(elapsed, text::stagger_delay(index, 0.6, 0.12));

        let label_color = Theme::with_opacity(theme.muted, row_opacity);
        let value_color = Theme::with_opacity(theme.foreground, row_opacity);

        let label_galley =
            ui.painter()
                .layout_no_wrap(label.to_string(), label_font.clone(), label_color);
        let value_galley =
            ui.painter()
                .layout_no_wrap(value.to_string(), value_font.clone(), value_color);

        let gap = 18.0 * scale;
        let total = label_galley.rect.width() + gap + value_galley.rect.width();
        let x = center_x - total / 2.0;
        let baseline_nudge = (value_galley.rect.height() - label_galley.rect.height()) / 2.0;

        ui.painter()
            .galley(Pos2::new(x, y + baseline_nudge), label_galley, label_color);
        ui.painter().galley(
            Pos2::new(x + total - value_galley.rect.width(), y),
            value_galley.clone(),
            value_color,
        );
        y += value_galley.rect.height() + row_gap;
    }

    y += 24.0 * scale;
    text::draw_centered(
        ui,
        &info.location,
        center_x,
        y,
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.muted, opacity * text::entrance_opacity(elapsed, 1.1)),
        content_rect.width(),
    );
}

fn contact_lines(info: &PersonalInfo) -> Vec<(&'static str, String)> {
    let mut lines = vec![("Email", info.email.clone())];
    if let Some(phone) = &info.phone {
        lines.push(("Phone", phone.clone()));
    }
    lines.push(("LinkedIn", info.linkedin.clone()));
    lines.push(("GitHub", info.github.clone()));
    lines.push(("Website", info.website.clone()));
    lines
}
