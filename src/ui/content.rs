//! Content area UI rendering
//!
//! Renders the page behind the current route: the sectioned home page or a
//! single project page. Home sections report their viewport visibility to
//! the section tracker each frame, which drives the outline highlight and
//! the status bar context.

use crate::app::AppState;
use crate::presentation::color_mapping;
use eframe::egui;
use egui::RichText;
use rfolio::site::{
    find_project, Project, Section, HOME_SECTIONS, OWNER_NAME, OWNER_TITLE, PROJECTS,
    SKILL_EXTENSIONS, WORK_HISTORY,
};
use rfolio::theme::ThemeColors;
use rfolio::with_alpha;

use crate::utils::format_rating_stars;

/// Renders the content area for the current route.
pub fn render_content(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let href = state.route.current().to_string();
    if let Some(project) = find_project(&href) {
        render_project_page(ui, state, colors, project);
    } else {
        render_home_page(ui, state, colors);
    }
}

fn render_home_page(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let scroll_target = state.route.take_scroll_target();
    let mut entered: Vec<&'static str> = Vec::new();
    let mut exited: Vec<&'static str> = Vec::new();
    let mut open_project: Option<&'static str> = None;

    egui::ScrollArea::vertical()
        .id_salt(("page", "/"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let viewport = ui.clip_rect();
            ui.add_space(12.0);

            for section in HOME_SECTIONS {
                let rendered = ui.scope(|ui| {
                    render_section_heading(ui, &section, colors);
                    match section.id {
                        "about-me" => render_about(ui, colors),
                        "work-experience" => render_work_experience(ui, colors),
                        "skills" => render_skills(ui, colors),
                        "my-work" => render_my_work(ui, colors, &mut open_project),
                        _ => render_contact(ui, colors),
                    }
                });

                if scroll_target == Some(section.id) {
                    rendered.response.scroll_to_me(Some(egui::Align::TOP));
                }

                let on_screen = viewport.intersects(rendered.response.rect);
                if on_screen != state.sections.is_visible(section.id) {
                    if on_screen {
                        entered.push(section.id);
                    } else {
                        exited.push(section.id);
                    }
                }

                ui.add_space(48.0);
            }
        });

    for id in exited {
        state.sections.set_hidden(id);
    }
    for id in entered {
        state.sections.set_visible(id);
    }
    if let Some(href) = open_project {
        state.route.request(href);
    }
}

fn render_section_heading(ui: &mut egui::Ui, section: &Section, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("#")
                .size(20.0)
                .color(color_mapping::section_accent(section.index, colors)),
        );
        ui.label(
            RichText::new(section.title)
                .size(20.0)
                .color(colors.text_strong)
                .strong(),
        );
    });
    ui.add_space(8.0);
}

fn render_about(ui: &mut egui::Ui, colors: &ThemeColors) {
    ui.label(RichText::new(OWNER_NAME).size(30.0).strong());
    ui.label(RichText::new(OWNER_TITLE).size(16.0).color(colors.text_dim));
    ui.add_space(10.0);

    ui.label(
        RichText::new(
            "I build network tooling, data services, and the interfaces that make them \
             usable. Most of my day is Rust on the backend and TypeScript where people \
             click, with a strong preference for software whose behavior can be observed \
             rather than guessed at.",
        )
        .size(14.0),
    );
    ui.add_space(6.0);
    ui.label(
        RichText::new(
            "This site is laid out like the editor I spend my time in. The explorer on \
             the left knows every page, the search box knows everything else, and the \
             panel underneath the bug icon really does talk to a server.",
        )
        .size(14.0),
    );
}

fn render_work_experience(ui: &mut egui::Ui, colors: &ThemeColors) {
    for entry in &WORK_HISTORY {
        ui.label(
            RichText::new(format!("{} · {}", entry.role, entry.company))
                .size(15.0)
                .strong(),
        );
        ui.label(RichText::new(entry.period).size(12.0).color(colors.text_dim));
        ui.add_space(4.0);
        for highlight in entry.highlights {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("▪").size(11.0).color(colors.text_dim));
                ui.label(RichText::new(*highlight).size(13.0));
            });
        }
        ui.add_space(14.0);
    }
}

fn render_skills(ui: &mut egui::Ui, colors: &ThemeColors) {
    for skill in &SKILL_EXTENSIONS {
        ui.horizontal(|ui| {
            ui.label(RichText::new(skill.name).size(13.0).strong());
            ui.label(
                RichText::new(format_rating_stars(skill.rating))
                    .size(12.0)
                    .color(colors.yellow),
            );
            ui.label(
                RichText::new(skill.publisher)
                    .size(11.0)
                    .color(colors.text_dim),
            );
        });
    }
    ui.add_space(4.0);
    ui.label(
        RichText::new("The full cards live in the extensions view on the activity bar.")
            .size(12.0)
            .italics()
            .color(colors.text_dim),
    );
}

fn render_my_work(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    open_project: &mut Option<&'static str>,
) {
    for project in &PROJECTS {
        let card = egui::Frame::default()
            .fill(with_alpha(colors.extreme_background, 160))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(color_mapping::file_kind_icon(project.kind))
                            .size(15.0)
                            .color(color_mapping::file_kind_color(project.kind, colors)),
                    );
                    let title = ui.add(
                        egui::Label::new(
                            RichText::new(project.title)
                                .size(15.0)
                                .color(color_mapping::file_kind_color(project.kind, colors))
                                .strong(),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if title.clicked() {
                        *open_project = Some(project.href);
                    }
                });
                ui.label(RichText::new(project.description).size(13.0));
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tech in project.stack {
                        ui.label(
                            RichText::new(*tech)
                                .size(11.0)
                                .color(colors.cyan)
                                .background_color(with_alpha(colors.selection, 120)),
                        );
                    }
                });
            });
        if card.response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        ui.add_space(10.0);
    }
}

fn render_contact(ui: &mut egui::Ui, colors: &ThemeColors) {
    ui.label(
        RichText::new(
            "The inbox is open for interesting systems problems, portfolio feedback, \
             or a pointer at something broken on this site.",
        )
        .size(14.0),
    );
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("✉").color(colors.cyan));
        ui.hyperlink_to("hello@adrianvega.dev", "mailto:hello@adrianvega.dev");
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new("🐙").color(colors.cyan));
        ui.hyperlink_to("github.com/adrian-vega", "https://github.com/adrian-vega");
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new("🌐").color(colors.cyan));
        ui.hyperlink_to("adrianvega.dev", "https://adrianvega.dev");
    });
    ui.add_space(120.0);
}

fn render_project_page(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    project: &Project,
) {
    // A queued section scroll only makes sense on the home page.
    state.route.take_scroll_target();
    let mut go_back = false;

    egui::ScrollArea::vertical()
        .id_salt(("page", project.href))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(color_mapping::file_kind_icon(project.kind))
                        .size(26.0)
                        .color(color_mapping::file_kind_color(project.kind, colors)),
                );
                ui.label(
                    RichText::new(project.title)
                        .size(26.0)
                        .color(colors.text_strong)
                        .strong(),
                );
            });
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for tech in project.stack {
                    ui.label(
                        RichText::new(*tech)
                            .size(12.0)
                            .color(colors.cyan)
                            .background_color(with_alpha(colors.selection, 120)),
                    );
                }
            });
            ui.separator();
            ui.add_space(6.0);
            ui.label(RichText::new(project.description).size(14.0));
            ui.add_space(16.0);
            if ui.link("← Back to My Work").clicked() {
                go_back = true;
            }
        });

    if go_back {
        state.route.request("/");
        state.route.request_section("my-work");
    }
}
