use eframe::egui::{self, CornerRadius, RichText, ScrollArea};
use std::time::Instant;

use crate::cv::{Cv, Project, WorkExperience};
use crate::render::text;
use crate::theme::Theme;

/// How many positions the experience section shows before "Show all".
pub const EXPERIENCE_PREVIEW: usize = 3;
/// How many projects the project section shows before "Show all".
pub const PROJECT_PREVIEW: usize = 4;

/// Reveal animations are over after this; stop requesting repaints.
const REVEAL_SETTLE: f32 = 2.0;

/// The slice of a list that is currently visible.
pub fn preview<T>(items: &[T], show_all: bool, limit: usize) -> &[T] {
    if show_all {
        items
    } else {
        &items[..items.len().min(limit)]
    }
}

/// Single-scroll rendering of the whole CV. Shares nothing with the deck at
/// runtime; both derive their view from the same `Cv`.
struct PortfolioApp {
    cv: Cv,
    theme: Theme,
    show_all_experience: bool,
    show_all_projects: bool,
    experience_toggled_at: Option<Instant>,
    projects_toggled_at: Option<Instant>,
    last_esc: Option<Instant>,
}

impl PortfolioApp {
    fn new(cv: Cv, theme: Theme) -> Self {
        Self {
            cv,
            theme,
            show_all_experience: false,
            show_all_projects: false,
            experience_toggled_at: None,
            projects_toggled_at: None,
            last_esc: None,
        }
    }

    /// Opacity for the `offset`-th item revealed past the preview threshold.
    /// Items identified by position only; the lists never reorder.
    fn reveal_opacity(toggled_at: Option<Instant>, offset: usize) -> f32 {
        match toggled_at {
            Some(at) => text::entrance_opacity(
                at.elapsed().as_secs_f32(),
                text::stagger_delay(offset, 0.0, 0.1),
            ),
            None => 1.0,
        }
    }

    fn any_reveal_running(&self) -> bool {
        let running = |at: Option<Instant>| {
            at.is_some_and(|at| at.elapsed().as_secs_f32() < REVEAL_SETTLE)
        };
        running(self.experience_toggled_at) || running(self.projects_toggled_at)
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }
            if i.key_pressed(egui::Key::D) {
                self.theme = self.theme.toggled();
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.any_reveal_running() {
            ctx.request_repaint();
        }

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    let width = ui.available_width().min(1100.0);
                    let side = (ui.available_width() - width) / 2.0;
                    ui.horizontal(|ui| {
                        ui.add_space(side.max(24.0));
                        ui.vertical(|ui| {
                            ui.set_max_width(width - 48.0);
                            ui.add_space(48.0);
                            self.section_header(ui);
                            self.section_about(ui);
                            self.section_experience(ui);
                            self.section_organizational(ui);
                            self.section_projects(ui);
                            self.section_skills(ui);
                            ui.add_space(24.0);
                            let hint = RichText::new(
                                "D toggles theme  \u{2022}  F fullscreen  \u{2022}  Q quits",
                            )
                            .size(12.0)
                            .color(Theme::with_opacity(self.theme.muted, 0.7));
                            ui.label(hint);
                            ui.add_space(48.0);
                        });
                    });
                });
            });
    }
}

impl PortfolioApp {
    fn heading(&self, ui: &mut egui::Ui, label: &str) {
        ui.add_space(36.0);
        ui.label(
            RichText::new(label)
                .size(34.0)
                .strong()
                .color(self.theme.heading_color),
        );
        ui.add_space(16.0);
    }

    fn chips(&self, ui: &mut egui::Ui, items: &[String], opacity: f32) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 6.0);
            for item in items {
                ui.label(
                    RichText::new(format!(" {item} "))
                        .size(14.0)
                        .color(Theme::with_opacity(self.theme.foreground, opacity))
                        .background_color(Theme::with_opacity(self.theme.chip_background, opacity)),
                );
            }
        });
    }

    fn bullets(&self, ui: &mut egui::Ui, items: &[String], opacity: f32) {
        for item in items {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new("\u{203A}")
                        .size(14.0)
                        .color(Theme::with_opacity(self.theme.accent, opacity)),
                );
                ui.label(
                    RichText::new(item)
                        .size(14.0)
                        .color(Theme::with_opacity(self.theme.foreground, opacity)),
                );
            });
        }
    }

    fn panel(&self, ui: &mut egui::Ui, opacity: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::new()
            .fill(Theme::with_opacity(self.theme.panel, opacity))
            .corner_radius(CornerRadius::same(10))
            .inner_margin(18.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
        ui.add_space(14.0);
    }

    fn section_header(&self, ui: &mut egui::Ui) {
        let info = &self.cv.personal_info;
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&info.name)
                    .size(56.0)
                    .strong()
                    .color(self.theme.heading_color),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(&info.title)
                    .size(22.0)
                    .color(self.theme.accent_secondary),
            );
            ui.add_space(18.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 18.0;
                ui.hyperlink_to("Email", info.email_uri());
                if let Some(tel) = info.phone_uri() {
                    ui.hyperlink_to("Phone", tel);
                }
                ui.hyperlink_to("LinkedIn", info.linkedin_url());
                ui.hyperlink_to("GitHub", info.github_url());
                ui.hyperlink_to("Website", info.website_url());
            });
        });
    }

    fn section_about(&self, ui: &mut egui::Ui) {
        self.heading(ui, "About Me");
        let info = &self.cv.personal_info;
        self.panel(ui, 1.0, |ui| {
            ui.label(
                RichText::new(&info.summary)
                    .size(16.0)
                    .color(self.theme.foreground),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(&info.location)
                    .size(14.0)
                    .color(self.theme.muted),
            );
        });

        let education = &self.cv.education;
        self.panel(ui, 1.0, |ui| {
            ui.label(
                RichText::new("Education")
                    .size(18.0)
                    .strong()
                    .color(self.theme.heading_color),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{}, {}", education.degree, education.field))
                    .size(15.0)
                    .color(self.theme.foreground),
            );
            ui.label(
                RichText::new(&education.institution)
                    .size(15.0)
                    .color(self.theme.accent_secondary),
            );
            ui.label(
                RichText::new(&education.duration)
                    .size(13.0)
                    .color(self.theme.muted),
            );
            ui.add_space(8.0);
            self.bullets(ui, &education.achievements, 1.0);
        });
    }

    fn section_experience(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, "Professional Experience");

        let visible = preview(
            &self.cv.work_experience,
            self.show_all_experience,
            EXPERIENCE_PREVIEW,
        )
        .to_vec();
        for (index, experience) in visible.iter().enumerate() {
            let opacity = if index < EXPERIENCE_PREVIEW {
                1.0
            } else {
                Self::reveal_opacity(self.experience_toggled_at, index - EXPERIENCE_PREVIEW)
            };
            self.experience_panel(ui, experience, opacity);
        }

        let total = self.cv.work_experience.len();
        if total > EXPERIENCE_PREVIEW {
            let label = if self.show_all_experience {
                format!("Show fewer positions ({EXPERIENCE_PREVIEW})")
            } else {
                format!("Show all {total} positions")
            };
            if ui.button(label).clicked() {
                self.show_all_experience = !self.show_all_experience;
                self.experience_toggled_at = Some(Instant::now());
            }
        }
    }

    fn experience_panel(&self, ui: &mut egui::Ui, experience: &WorkExperience, opacity: f32) {
        self.panel(ui, opacity, |ui| {
            ui.label(
                RichText::new(&experience.title)
                    .size(20.0)
                    .strong()
                    .color(Theme::with_opacity(self.theme.heading_color, opacity)),
            );
            ui.horizontal_wrapped(|ui| {
                match experience.company_website() {
                    Some(url) => {
                        ui.hyperlink_to(format!("@ {}", experience.company), url.to_string());
                    }
                    None => {
                        ui.label(
                            RichText::new(format!("@ {}", experience.company))
                                .size(15.0)
                                .color(Theme::with_opacity(self.theme.accent_secondary, opacity)),
                        );
                    }
                }
                ui.label(
                    RichText::new(format!(
                        "\u{2022}  {}  \u{2022}  {}",
                        experience.period, experience.location
                    ))
                    .size(13.0)
                    .color(Theme::with_opacity(self.theme.muted, opacity)),
                );
            });
            ui.add_space(8.0);
            ui.label(
                RichText::new(&experience.description)
                    .size(15.0)
                    .color(Theme::with_opacity(self.theme.foreground, opacity)),
            );
            ui.add_space(8.0);
            self.bullets(ui, &experience.achievements, opacity);
            ui.add_space(8.0);
            self.chips(ui, &experience.technologies, opacity);
        });
    }

    fn section_organizational(&self, ui: &mut egui::Ui) {
        if self.cv.organizational.is_empty() {
            return;
        }
        self.heading(ui, "Organizational Experience");
        for org in &self.cv.organizational {
            self.panel(ui, 1.0, |ui| {
                ui.label(
                    RichText::new(&org.title)
                        .size(18.0)
                        .strong()
                        .color(self.theme.heading_color),
                );
                ui.label(
                    RichText::new(&org.organization)
                        .size(15.0)
                        .color(self.theme.accent_secondary),
                );
                ui.label(
                    RichText::new(&org.period)
                        .size(13.0)
                        .color(self.theme.muted),
                );
                ui.add_space(6.0);
                self.bullets(ui, &org.achievements, 1.0);
            });
        }
    }

    fn section_projects(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, "Featured Projects");

        let visible =
            preview(&self.cv.projects, self.show_all_projects, PROJECT_PREVIEW).to_vec();
        for (index, project) in visible.iter().enumerate() {
            let opacity = if index < PROJECT_PREVIEW {
                1.0
            } else {
                Self::reveal_opacity(self.projects_toggled_at, index - PROJECT_PREVIEW)
            };
            self.project_panel(ui, project, opacity);
        }

        let total = self.cv.projects.len();
        if total > PROJECT_PREVIEW {
            let label = if self.show_all_projects {
                format!("Show fewer projects ({PROJECT_PREVIEW})")
            } else {
                format!("Show all {total} projects")
            };
            if ui.button(label).clicked() {
                self.show_all_projects = !self.show_all_projects;
                self.projects_toggled_at = Some(Instant::now());
            }
        }
    }

    fn project_panel(&self, ui: &mut egui::Ui, project: &Project, opacity: f32) {
        self.panel(ui, opacity, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(&project.name)
                        .size(20.0)
                        .strong()
                        .color(Theme::with_opacity(self.theme.heading_color, opacity)),
                );
                ui.label(
                    RichText::new(&project.duration)
                        .size(13.0)
                        .color(Theme::with_opacity(self.theme.muted, opacity)),
                );
            });
            // Only channels with a real link; placeholders never render.
            let links = project.links.resolved();
            if !links.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 14.0;
                    for (channel, url) in links {
                        ui.hyperlink_to(channel.label(), url.to_string());
                    }
                });
            }
            ui.add_space(8.0);
            ui.label(
                RichText::new(&project.description)
                    .size(15.0)
                    .color(Theme::with_opacity(self.theme.foreground, opacity)),
            );
            ui.add_space(8.0);
            self.bullets(ui, &project.highlights, opacity);
            ui.add_space(8.0);
            self.chips(ui, &project.technologies, opacity);
        });
    }

    fn section_skills(&self, ui: &mut egui::Ui) {
        self.heading(ui, "Skills");
        for category in &self.cv.skills {
            self.panel(ui, 1.0, |ui| {
                ui.label(
                    RichText::new(&category.category)
                        .size(17.0)
                        .strong()
                        .color(self.theme.heading_color),
                );
                ui.add_space(6.0);
                self.chips(ui, &category.items, 1.0);
            });
        }
    }
}

pub fn run(cv: Cv, theme: Theme, windowed: bool) -> anyhow::Result<()> {
    let title = format!("{} \u{2014} portfolio", cv.personal_info.name);

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
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
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(cv, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_shows_first_three_of_five() {
        let items = [0, 1, 2, 3, 4];
        assert_eq!(preview(&items, false, EXPERIENCE_PREVIEW), &[0, 1, 2]);
    }

    #[test]
    fn test_expand_then_collapse_restores_preview() {
        let items = [0, 1, 2, 3, 4];
        let mut show_all = false;
        show_all = !show_all;
        assert_eq!(preview(&items, show_all, EXPERIENCE_PREVIEW), &items);
        show_all = !show_all;
        assert_eq!(preview(&items, show_all, EXPERIENCE_PREVIEW), &[0, 1, 2]);
    }

    #[test]
    fn test_preview_of_short_list_is_the_whole_list() {
        let items = [0, 1];
        assert_eq!(preview(&items, false, PROJECT_PREVIEW), &items);
    }

    #[test]
    fn test_sample_exercises_both_thresholds() {
        let cv = Cv::sample();
        assert!(cv.work_experience.len() > EXPERIENCE_PREVIEW);
        assert!(cv.projects.len() > PROJECT_PREVIEW);
    }
}
