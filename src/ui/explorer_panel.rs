//! Explorer panel UI rendering
//!
//! Handles the explorer view: five collapsible sub-panels (open editors,
//! portfolio tree, outline, timeline, scripts) sharing one fixed-height
//! container. Opening or closing a sub-panel redistributes the container's
//! height; the measurements used for that split are taken from this
//! frame's layout pass.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::state::{SubMenu, SubPanelMeasurements};
use eframe::egui;
use egui::RichText;
use rfolio::site::{home_page, FileKind, PROJECTS, WORK_HISTORY};
use rfolio::theme::ThemeColors;

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 21.0;
const BODY_PADDING: f32 = 10.0;

/// Runnable project scripts shown in the scripts sub-panel, with the
/// command each one stands for.
const SCRIPTS: [(&str, &str); 4] = [
    ("serve", "cargo run --bin folio-server"),
    ("urls", "cargo run --bin folio-indexctl -- urls"),
    ("quick-update", "cargo run --bin folio-indexctl -- quick"),
    ("complete-reindex", "cargo run --bin folio-indexctl -- complete"),
];

/// Renders the explorer view and refreshes the sub-panel measurements.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `measurements` - Measurement slot shared with the navigation
///   coordinator; rewritten from this frame's layout
pub fn render_explorer_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    measurements: &mut SubPanelMeasurements,
) {
    *measurements = SubPanelMeasurements {
        container_height: ui.available_height(),
        header_height: HEADER_HEIGHT,
        content_heights: [
            rows_height(state.tabs.open_tabs().len().max(1)),
            rows_height(3 + PROJECTS.len()),
            rows_height(state.sections.catalog().len()),
            rows_height(2 * WORK_HISTORY.len()),
            rows_height(SCRIPTS.len()),
        ],
    };
    // Keep allotments in step with container resizes between toggles.
    state.explorer.reallocate(measurements);

    for menu in SubMenu::ALL {
        let open = state.explorer.is_open(menu);
        if render_sub_panel_header(ui, open, menu.title(), colors).clicked() {
            state.explorer.toggle(menu, measurements);
        }

        if state.explorer.is_open(menu) {
            let height = state.explorer.height(menu);
            egui::ScrollArea::vertical()
                .id_salt(menu.title())
                .max_height(height)
                .auto_shrink([false, false])
                .show(ui, |ui| match menu {
                    SubMenu::Editor => render_open_editors(ui, state, colors),
                    SubMenu::Portfolio => render_portfolio_tree(ui, state, colors),
                    SubMenu::Outline => render_outline(ui, state, colors),
                    SubMenu::Timeline => render_timeline(ui, colors),
                    SubMenu::Scripts => render_scripts(ui, colors),
                });
        }
    }
}

fn rows_height(rows: usize) -> f32 {
    rows as f32 * ROW_HEIGHT + BODY_PADDING
}

/// Renders one sub-panel header row: collapse arrow plus uppercase title.
fn render_sub_panel_header(
    ui: &mut egui::Ui,
    open: bool,
    title: &str,
    colors: &ThemeColors,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), HEADER_HEIGHT),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.painter().rect_filled(rect, 0.0, colors.hover);
    }
    let arrow = if open { "⏷" } else { "⏵" };
    ui.painter().text(
        egui::pos2(rect.left() + 4.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        format!("{} {}", arrow, title.to_uppercase()),
        egui::FontId::proportional(11.0),
        colors.text_strong,
    );
    response
}

fn render_open_editors(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let mut activate: Option<String> = None;
    let mut close: Option<String> = None;

    for tab in state.tabs.open_tabs() {
        ui.horizontal(|ui| {
            if file_row(ui, colors, tab.kind, &tab.title, state.route.is_current(&tab.href))
                .clicked()
            {
                activate = Some(tab.href.clone());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").on_hover_text("Close").clicked() {
                    close = Some(tab.href.clone());
                }
            });
        });
    }
    if state.tabs.is_empty() {
        ui.label(
            RichText::new("No open editors")
                .italics()
                .color(colors.text_dim),
        );
    }

    if let Some(href) = activate {
        state.route.request(href);
    }
    if let Some(href) = close {
        state.tabs.close(&href);
    }
}

fn render_portfolio_tree(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let mut navigate: Option<&'static str> = None;

    ui.label(RichText::new("⏷ ADRIAN-VEGA").size(11.0).strong());
    ui.indent("portfolio_root", |ui| {
        let home = home_page();
        if file_row(ui, colors, home.kind, home.title, state.route.is_current(home.href)).clicked()
        {
            navigate = Some(home.href);
        }

        ui.label(RichText::new("⏷ 📁 apps").color(colors.text_dim));
        ui.indent("apps_folder", |ui| {
            for project in &PROJECTS {
                if file_row(
                    ui,
                    colors,
                    project.kind,
                    project.title,
                    state.route.is_current(project.href),
                )
                .clicked()
                {
                    navigate = Some(project.href);
                }
            }
        });
    });

    if let Some(href) = navigate {
        state.route.request(href);
    }
}

fn render_outline(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let mut reveal: Option<&'static str> = None;
    let primary = state.sections.primary().map(|s| s.id);

    for section in state.sections.catalog() {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("◆")
                    .size(10.0)
                    .color(color_mapping::section_accent(section.index, colors)),
            );
            if ui
                .selectable_label(primary == Some(section.id), section.title)
                .clicked()
            {
                reveal = Some(section.id);
            }
        });
    }

    if let Some(id) = reveal {
        state.route.request("/");
        state.route.request_section(id);
    }
}

fn render_timeline(ui: &mut egui::Ui, colors: &ThemeColors) {
    for entry in &WORK_HISTORY {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🕘").size(11.0));
            ui.vertical(|ui| {
                ui.label(RichText::new(format!("{} · {}", entry.role, entry.company)).size(12.0));
                ui.label(RichText::new(entry.period).size(11.0).color(colors.text_dim));
            });
        });
        ui.add_space(2.0);
    }
}

fn render_scripts(ui: &mut egui::Ui, colors: &ThemeColors) {
    for (name, command) in SCRIPTS {
        ui.horizontal(|ui| {
            ui.label(RichText::new("▷").size(11.0).color(colors.green));
            ui.label(RichText::new(name).size(12.0)).on_hover_text(command);
        });
    }
}

/// One icon-plus-name row, selectable, used by the tree and editor lists.
fn file_row(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    kind: FileKind,
    title: &str,
    selected: bool,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(color_mapping::file_kind_icon(kind))
                .color(color_mapping::file_kind_color(kind, colors)),
        );
        ui.selectable_label(selected, title)
    })
    .inner
}
