use eframe::egui;
use std::time::Instant;

use crate::cv::Cv;
use crate::deck::{Navigator, SlideKind};
use crate::render::transition::{
    ActiveTransition, TRANSITION_MIN_SCALE, TransitionDirection, TransitionKind,
};
use crate::render::{self, ControlAction};
use crate::theme::Theme;

/// Entrance staggers are finished well before this; after it the slide stops
/// requesting repaints on its own.
const ENTRANCE_SETTLE: f32 = 3.0;

/// `elapsed` value used for slides that are already fully settled (e.g. the
/// outgoing side of a transition).
const SETTLED: f32 = 100.0;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

struct DeckApp {
    cv: Cv,
    navigator: Navigator,
    theme: Theme,
    default_transition: TransitionKind,
    transition: Option<ActiveTransition>,
    slide_entered_at: Instant,
    show_hud: bool,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
    frame_count: u32,
    fps: f32,
    fps_update: Instant,
}

impl DeckApp {
    fn new(cv: Cv, theme: Theme, default_transition: TransitionKind, auto_play: bool) -> Self {
        let now = Instant::now();
        let mut navigator = Navigator::new(SlideKind::ALL.len());
        if auto_play {
            navigator.toggle_auto_play(now);
        }
        Self {
            cv,
            navigator,
            theme,
            default_transition,
            transition: None,
            slide_entered_at: now,
            show_hud: false,
            toast: None,
            last_esc: None,
            frame_count: 0,
            fps: 0.0,
            fps_update: now,
        }
    }

    /// Run a navigation operation and, if the cursor moved, start the visual
    /// transition for it. The navigator state is already final when the
    /// transition begins.
    fn navigate(&mut self, op: impl FnOnce(&mut Navigator)) {
        let from = self.navigator.current();
        op(&mut self.navigator);
        let to = self.navigator.current();
        if from != to {
            self.slide_entered_at = Instant::now();
            self.transition = Some(ActiveTransition::new(
                from,
                to,
                self.default_transition,
                TransitionDirection::from(self.navigator.direction()),
            ));
        }
    }

    fn toggle_auto_play(&mut self) {
        self.navigator.toggle_auto_play(Instant::now());
        let state = if self.navigator.is_auto_playing() {
            "on"
        } else {
            "off"
        };
        self.toast = Some(Toast::new(format!("Auto-play: {state}")));
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn cycle_transition(&mut self) {
        self.default_transition = self.default_transition.cycled();
        self.toast = Some(Toast::new(format!(
            "Transition: {}",
            self.default_transition.display_name()
        )));
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_update.elapsed().as_secs_f32();
        if elapsed >= 0.5 {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.fps_update = Instant::now();
        }
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    fn draw_slide(
        &self,
        ui: &egui::Ui,
        index: usize,
        rect: egui::Rect,
        opacity: f32,
        elapsed: f32,
        scale: f32,
    ) {
        if let Some(kind) = SlideKind::ALL.get(index) {
            render::render_slide(ui, &self.cv, *kind, &self.theme, rect, opacity, elapsed, scale);
        }
    }

    fn draw_deck(&self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let entered = self.slide_entered_at.elapsed().as_secs_f32();

        if let Some(ref t) = self.transition {
            let progress = t.progress();
            match t.kind {
                TransitionKind::Fade => {
                    self.draw_slide(ui, t.from, rect, 1.0 - progress, SETTLED, scale);
                    self.draw_slide(ui, t.to, rect, progress, entered, scale);
                }
                TransitionKind::Slide => {
                    let w = rect.width();
                    let sign = match t.direction {
                        TransitionDirection::Forward => -1.0,
                        TransitionDirection::Backward => 1.0,
                    };
                    let from_offset = sign * progress * w;
                    let to_offset = from_offset - sign * w;

                    let from_scale = 1.0 - (1.0 - TRANSITION_MIN_SCALE) * progress;
                    let to_scale = TRANSITION_MIN_SCALE + (1.0 - TRANSITION_MIN_SCALE) * progress;

                    let from_rect =
                        scaled_about_center(rect.translate(egui::vec2(from_offset, 0.0)), from_scale);
                    let to_rect =
                        scaled_about_center(rect.translate(egui::vec2(to_offset, 0.0)), to_scale);

                    self.draw_slide(ui, t.from, from_rect, 1.0 - progress, SETTLED, scale * from_scale);
                    self.draw_slide(ui, t.to, to_rect, progress, entered, scale * to_scale);
                }
                TransitionKind::None => {
                    self.draw_slide(ui, t.to, rect, 1.0, entered, scale);
                }
            }
            ctx.request_repaint();
        } else {
            self.draw_slide(ui, self.navigator.current(), rect, 1.0, entered, scale);
            if entered < ENTRANCE_SETTLE {
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_fps();

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            // Quit: Q from any state
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // Esc double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Fullscreen toggle: F
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }
            if i.key_pressed(egui::Key::T) {
                self.cycle_transition();
                return;
            }
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
                return;
            }

            // Deck navigation
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                self.navigate(Navigator::next);
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.navigate(Navigator::previous);
            }
            if i.key_pressed(egui::Key::Home) {
                self.navigate(|nav| nav.go_to(0));
            }
            if i.key_pressed(egui::Key::End) {
                self.navigate(|nav| {
                    let last = nav.slide_count() - 1;
                    nav.go_to(last);
                });
            }
            if i.key_pressed(egui::Key::P) {
                self.toggle_auto_play();
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        // Auto-play: fire a due advance, then schedule the next wake-up.
        let now = Instant::now();
        self.navigate(|nav| {
            nav.tick(now);
        });
        if let Some(wait) = self.navigator.time_until_advance(now) {
            ctx.request_repaint_after(wait);
        }

        // Clear finished transitions
        if self.transition.as_ref().is_some_and(|t| t.is_complete()) {
            self.transition = None;
        }

        // Expire toast
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = Self::compute_scale(rect);

                self.draw_deck(ui, ctx, rect, scale);

                render::draw_progress_bar(
                    ui,
                    &self.theme,
                    rect,
                    render::progress_fraction(
                        self.navigator.current(),
                        self.navigator.slide_count(),
                    ),
                    scale,
                );
                render::draw_hint(ui, &self.theme, rect, scale);
                render::draw_fps(ui, &self.theme, rect, self.fps, scale);
                render::draw_counter(
                    ui,
                    &self.theme,
                    rect,
                    self.navigator.current(),
                    self.navigator.slide_count(),
                    scale,
                );

                let (hover_pos, clicked) = ctx.input(|i| {
                    (
                        i.pointer.hover_pos(),
                        i.pointer.button_pressed(egui::PointerButton::Primary),
                    )
                });
                let action = render::draw_control_bar(
                    ui,
                    &self.theme,
                    rect,
                    scale,
                    self.navigator.slide_count(),
                    self.navigator.current(),
                    self.navigator.is_auto_playing(),
                    hover_pos,
                    clicked,
                );
                match action {
                    Some(ControlAction::Previous) => self.navigate(Navigator::previous),
                    Some(ControlAction::Next) => self.navigate(Navigator::next),
                    Some(ControlAction::Reset) => self.navigate(|nav| nav.go_to(0)),
                    Some(ControlAction::GoTo(index)) => self.navigate(|nav| nav.go_to(index)),
                    Some(ControlAction::ToggleAutoPlay) => self.toggle_auto_play(),
                    None => {}
                }

                if self.show_hud {
                    render::draw_hud(ui, &self.theme, rect, scale);
                }

                if let Some(ref toast) = self.toast {
                    let opacity = toast.opacity();
                    if opacity > 0.0 {
                        draw_toast(ui, &self.theme, rect, scale, &toast.message, opacity);
                        ctx.request_repaint();
                    }
                }
            });
    }
}

fn scaled_about_center(rect: egui::Rect, factor: f32) -> egui::Rect {
    egui::Rect::from_center_size(rect.center(), rect.size() * factor)
}

fn draw_toast(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
    message: &str,
    opacity: f32,
) {
    let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let toast_bg = Theme::with_opacity(theme.panel, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        message.to_string(),
        egui::FontId::proportional(20.0 * scale),
        toast_color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.bottom() - 150.0 * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, toast_color);
}

pub fn run(
    cv: Cv,
    theme: Theme,
    transition: TransitionKind,
    windowed: bool,
    start_slide: Option<usize>,
    auto_play: bool,
) -> anyhow::Result<()> {
    let title = format!("{} \u{2014} cvdeck", cv.personal_info.name);
    let slide_count = SlideKind::ALL.len();
    let initial_slide = start_slide
        .map(|s| s.saturating_sub(1))
        .unwrap_or(0)
        .min(slide_count - 1);

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = DeckApp::new(cv, theme, transition, auto_play);
            if initial_slide != 0 {
                app.navigator.go_to(initial_slide);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
