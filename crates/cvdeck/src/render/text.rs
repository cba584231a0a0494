use eframe::egui::{self, Color32, FontId, Pos2, StrokeKind};

use crate::theme::Theme;

/// How long one staggered element takes to fade in.
pub const ENTRANCE_DURATION: f32 = 0.6;

/// Entrance delay for the `index`-th element of a staggered group.
pub fn stagger_delay(index: usize, base: f32, increment: f32) -> f32 {
    base + index as f32 * increment
}

/// Opacity of an element `elapsed` seconds after its slide appeared, given
/// its entrance delay. Smoothsteps from 0 to 1 over [`ENTRANCE_DURATION`].
pub fn entrance_opacity(elapsed: f32, delay: f32) -> f32 {
    let t = ((elapsed - delay) / ENTRANCE_DURATION).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Paint wrapped text at `pos`, returning the height used.
pub fn draw_wrapped(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui.painter().layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint wrapped text horizontally centered on `center_x`. Returns the height
/// used.
pub fn draw_centered(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    y: f32,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui.painter().layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, y);
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint a wrapping row of rounded technology chips. Each chip fades in on
/// its own stagger slot when `elapsed` is provided. Returns the height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_chips(
    ui: &egui::Ui,
    items: &[String],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
    elapsed: Option<f32>,
) -> f32 {
    let font = FontId::proportional(theme.small_size * scale);
    let pad_x = 12.0 * scale;
    let pad_y = 5.0 * scale;
    let gap = 8.0 * scale;

    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height = 0.0f32;

    for (index, item) in items.iter().enumerate() {
        let chip_opacity = match elapsed {
            Some(elapsed) => {
                opacity * entrance_opacity(elapsed, stagger_delay(index, 0.0, 0.05))
            }
            None => opacity,
        };
        let text_color = Theme::with_opacity(theme.foreground, chip_opacity);
        let galley = ui
            .painter()
            .layout_no_wrap(item.clone(), font.clone(), text_color);
        let chip_width = galley.rect.width() + pad_x * 2.0;
        let chip_height = galley.rect.height() + pad_y * 2.0;

        if x > 0.0 && x + chip_width > max_width {
            x = 0.0;
            y += row_height + gap;
            row_height = 0.0;
        }

        let chip_rect = egui::Rect::from_min_size(
            Pos2::new(pos.x + x, pos.y + y),
            egui::vec2(chip_width, chip_height),
        );
        ui.painter().rect_filled(
            chip_rect,
            chip_height / 2.0,
            Theme::with_opacity(theme.chip_background, chip_opacity),
        );
        ui.painter().rect_stroke(
            chip_rect,
            chip_height / 2.0,
            egui::Stroke::new(
                1.0 * scale,
                Theme::with_opacity(theme.chip_border, chip_opacity),
            ),
            StrokeKind::Inside,
        );
        ui.painter().galley(
            Pos2::new(chip_rect.left() + pad_x, chip_rect.top() + pad_y),
            galley,
            text_color,
        );

        x += chip_width + gap;
        row_height = row_height.max(chip_height);
    }

    y + row_height
}

/// Paint a list of achievement/highlight lines, each preceded by an accent
/// chevron. Returns the height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_bullets(
    ui: &egui::Ui,
    items: &[String],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
    font_size: f32,
) -> f32 {
    let font = FontId::proportional(font_size);
    let marker_font = FontId::proportional(font_size);
    let indent = font_size * 0.9;
    let spacing = 8.0 * scale;
    let marker_color = Theme::with_opacity(theme.accent, opacity);
    let text_color = Theme::with_opacity(theme.foreground, opacity);

    let mut y = 0.0;
    for item in items {
        let marker = ui
            .painter()
            .layout_no_wrap("\u{203A}".to_string(), marker_font.clone(), marker_color);
        ui.painter()
            .galley(Pos2::new(pos.x, pos.y + y), marker, marker_color);

        let galley = ui.painter().layout(
            item.clone(),
            font.clone(),
            text_color,
            max_width - indent,
        );
        let height = galley.rect.height();
        ui.painter()
            .galley(Pos2::new(pos.x + indent, pos.y + y), galley, text_color);
        y += height + spacing;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_linear_in_index() {
        assert_eq!(stagger_delay(0, 0.4, 0.1), 0.4);
        assert_eq!(stagger_delay(3, 0.4, 0.1), 0.4 + 0.3);
        assert_eq!(stagger_delay(10, 0.0, 0.05), 0.5);
    }

    #[test]
    fn test_entrance_opacity_clamps() {
        // Invisible until its delay has passed.
        assert_eq!(entrance_opacity(0.0, 0.5), 0.0);
        assert_eq!(entrance_opacity(0.49, 0.5), 0.0);
        // Fully visible once the fade is over.
        assert_eq!(entrance_opacity(0.5 + ENTRANCE_DURATION, 0.5), 1.0);
        assert_eq!(entrance_opacity(100.0, 0.5), 1.0);
    }

    #[test]
    fn test_entrance_opacity_rises_monotonically() {
        let mut prev = 0.0;
        for i in 0..=60 {
            let elapsed = i as f32 * 0.01;
            let v = entrance_opacity(elapsed, 0.0);
            assert!((0.0..=1.0).contains(&v));
            assert!(v >= prev);
            prev = v;
        }
    }
}
