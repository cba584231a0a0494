pub mod slides;
pub mod text;
pub mod transition;

use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::cv::Cv;
use crate::deck::SlideKind;
use crate::theme::Theme;

/// Render a single slide of the deck.
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &egui::Ui,
    cv: &Cv,
    kind: SlideKind,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) {
    match kind {
        SlideKind::Intro => {
            slides::intro::render(ui, &cv.personal_info, theme, rect, opacity, elapsed, scale)
        }
        SlideKind::CurrentRole => {
            slides::role::render(ui, cv.current_role(), theme, rect, opacity, elapsed, scale)
        }
        SlideKind::TechExpertise => {
            slides::skills::render(ui, &cv.skills, theme, rect, opacity, elapsed, scale)
        }
        SlideKind::ExperienceTimeline => {
            slides::timeline::render(ui, &cv.work_experience, theme, rect, opacity, elapsed, scale)
        }
        SlideKind::Projects => {
            slides::projects::render(ui, &cv.projects, theme, rect, opacity, elapsed, scale)
        }
        SlideKind::Closing => {
            slides::closing::render(ui, &cv.personal_info, theme, rect, opacity, elapsed, scale)
        }
    }
}

/// What the user asked the deck to do via the on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Previous,
    Next,
    ToggleAutoPlay,
    Reset,
    GoTo(usize),
}

/// Fill fraction of the deck progress bar.
pub fn progress_fraction(current: usize, slide_count: usize) -> f32 {
    (current + 1) as f32 / slide_count as f32
}

/// Thin progress bar along the top edge, filled with an accent gradient.
pub fn draw_progress_bar(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    fraction: f32,
    scale: f32,
) {
    let height = 5.0 * scale;
    let track = egui::Rect::from_min_max(
        rect.left_top(),
        Pos2::new(rect.right(), rect.top() + height),
    );
    ui.painter()
        .rect_filled(track, 0.0, Theme::with_opacity(theme.foreground, 0.08));

    let fill = egui::Rect::from_min_max(
        track.left_top(),
        Pos2::new(
            track.left() + track.width() * fraction.clamp(0.0, 1.0),
            track.bottom(),
        ),
    );

    // Horizontal accent gradient, same mesh trick as the scroll fades.
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(fill.left_top(), theme.accent);
    mesh.colored_vertex(fill.right_top(), theme.accent_secondary);
    mesh.colored_vertex(fill.left_bottom(), theme.accent);
    mesh.colored_vertex(fill.right_bottom(), theme.accent_secondary);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));
}

/// Bottom-center control bar: one dot per slide plus previous / play-pause /
/// reset / next buttons. Hit-testing is manual; the returned action reflects
/// a click on one of the controls this frame.
#[allow(clippy::too_many_arguments)]
pub fn draw_control_bar(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
    slide_count: usize,
    current: usize,
    is_auto_playing: bool,
    hover_pos: Option<Pos2>,
    clicked: bool,
) -> Option<ControlAction> {
    let dot_radius = 7.0 * scale;
    let dot_gap = 12.0 * scale;
    let button_size = 40.0 * scale;
    let button_gap = 10.0 * scale;
    let section_gap = 26.0 * scale;
    let padding = 18.0 * scale;

    let dots_width =
        slide_count as f32 * dot_radius * 2.0 + (slide_count as f32 - 1.0) * dot_gap;
    let buttons_width = 4.0 * button_size + 3.0 * button_gap;
    let bar_width = dots_width + section_gap + buttons_width + padding * 2.0;
    let bar_height = button_size + padding * 2.0;

    let bar_rect = egui::Rect::from_center_size(
        Pos2::new(rect.center().x, rect.bottom() - 56.0 * scale),
        egui::vec2(bar_width, bar_height),
    );

    ui.painter().rect_filled(
        bar_rect,
        16.0 * scale,
        Theme::with_opacity(theme.panel, 0.92),
    );
    ui.painter().rect_stroke(
        bar_rect,
        16.0 * scale,
        egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.chip_border, 0.5)),
        StrokeKind::Inside,
    );

    let mut action = None;

    // Dot indicators
    let mut x = bar_rect.left() + padding + dot_radius;
    let cy = bar_rect.center().y;
    for index in 0..slide_count {
        let center = Pos2::new(x, cy);
        let hovered = hover_pos.is_some_and(|p| p.distance(center) <= dot_radius * 1.6);
        let color = if index == current {
            theme.accent
        } else if hovered {
            Theme::with_opacity(theme.foreground, 0.55)
        } else {
            Theme::with_opacity(theme.foreground, 0.25)
        };
        let radius = if index == current || hovered {
            dot_radius * 1.15
        } else {
            dot_radius
        };
        ui.painter().circle_filled(center, radius, color);
        if hovered && clicked {
            action = Some(ControlAction::GoTo(index));
        }
        x += dot_radius * 2.0 + dot_gap;
    }

    // Buttons: previous, play/pause, reset, next
    let play_glyph = if is_auto_playing { "\u{2016}" } else { "\u{25B6}" };
    let reset_enabled = current != 0;
    let buttons: [(&str, ControlAction, bool); 4] = [
        ("\u{2039}", ControlAction::Previous, true),
        (play_glyph, ControlAction::ToggleAutoPlay, true),
        ("\u{21BA}", ControlAction::Reset, reset_enabled),
        ("\u{203A}", ControlAction::Next, true),
    ];

    let mut bx = bar_rect.left() + padding + dots_width + section_gap;
    for (glyph, button_action, enabled) in buttons {
        let button_rect = egui::Rect::from_min_size(
            Pos2::new(bx, bar_rect.top() + padding),
            egui::vec2(button_size, button_size),
        );
        let hovered = enabled && hover_pos.is_some_and(|p| button_rect.contains(p));
        let bg_opacity = if hovered { 0.28 } else { 0.12 };
        ui.painter().rect_filled(
            button_rect,
            8.0 * scale,
            Theme::with_opacity(theme.foreground, bg_opacity),
        );
        let glyph_color = if enabled {
            Theme::with_opacity(theme.heading_color, 0.9)
        } else {
            Theme::with_opacity(theme.foreground, 0.3)
        };
        let galley = ui.painter().layout_no_wrap(
            glyph.to_string(),
            FontId::proportional(22.0 * scale),
            glyph_color,
        );
        let glyph_pos = Pos2::new(
            button_rect.center().x - galley.rect.width() / 2.0,
            button_rect.center().y - galley.rect.height() / 2.0,
        );
        ui.painter().galley(glyph_pos, galley, glyph_color);

        if hovered && clicked {
            action = Some(button_action);
        }
        bx += button_size + button_gap;
    }

    action
}

/// Small keyboard hint in the top-right corner.
pub fn draw_hint(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let hint = "\u{2190} \u{2192} or Space to navigate  \u{2022}  P auto-play  \u{2022}  H help";
    let color = Theme::with_opacity(theme.foreground, 0.45);
    let galley = ui.painter().layout_no_wrap(
        hint.to_string(),
        FontId::proportional(14.0 * scale),
        color,
    );
    let pos = Pos2::new(
        rect.right() - galley.rect.width() - 20.0 * scale,
        rect.top() + 16.0 * scale,
    );
    ui.painter().galley(pos, galley, color);
}

/// Keyboard shortcut overlay, toggled with H.
pub fn draw_hud(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let shortcuts = [
        ("Space / \u{2192}", "Next slide"),
        ("\u{2190}", "Previous slide"),
        ("Home / End", "First / last slide"),
        ("P", "Toggle auto-play"),
        ("T", "Cycle transition"),
        ("D", "Toggle theme"),
        ("F", "Toggle fullscreen"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.panel, 0.95);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 340.0 * scale;

    let hud_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));
    ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    ui.painter().galley(
        Pos2::new(hud_rect.left() + padding, hud_rect.top() + padding),
        title_galley,
        text_color,
    );

    let mut y = hud_rect.top() + padding + 40.0 * scale;
    for (key, desc) in &shortcuts {
        let key_galley = ui.painter().layout_no_wrap(
            key.to_string(),
            FontId::monospace(15.0 * scale),
            key_color,
        );
        ui.painter()
            .galley(Pos2::new(hud_rect.left() + padding, y), key_galley, key_color);

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            FontId::proportional(15.0 * scale),
            text_color,
        );
        ui.painter().galley(
            Pos2::new(hud_rect.left() + padding + 150.0 * scale, y),
            desc_galley,
            text_color,
        );
        y += line_height;
    }
}

/// Slide counter in the bottom-right corner.
pub fn draw_counter(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    current: usize,
    slide_count: usize,
    scale: f32,
) {
    let counter_text = format!("{} / {}", current + 1, slide_count);
    let color = Theme::with_opacity(theme.foreground, 0.3);
    let galley =
        ui.painter()
            .layout_no_wrap(counter_text, FontId::monospace(14.0 * scale), color);
    let pos = Pos2::new(
        rect.right() - galley.rect.width() - 16.0 * scale,
        rect.bottom() - 30.0 * scale,
    );
    ui.painter().galley(pos, galley, color);
}

/// FPS readout under the hint.
pub fn draw_fps(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, fps: f32, scale: f32) {
    let fps_text = format!("{fps:.0} fps");
    let color = Theme::with_opacity(theme.foreground, 0.3);
    let galley = ui
        .painter()
        .layout_no_wrap(fps_text, FontId::monospace(14.0 * scale), color);
    let pos = Pos2::new(
        rect.right() - galley.rect.width() - 20.0 * scale,
        rect.top() + 40.0 * scale,
    );
    ui.painter().galley(pos, galley, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_fraction_spans_the_bar() {
        assert!((progress_fraction(0, 6) - 1.0 / 6.0).abs() < 1e-6);
        assert!((progress_fraction(5, 6) - 1.0).abs() < 1e-6);
        assert!((progress_fraction(2, 6) - 0.5).abs() < 1e-6);
    }
}
