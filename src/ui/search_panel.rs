//! Search panel UI rendering
//!
//! Handles the search view: a query box over the static site catalog with
//! grouped results. Hits either open a project page or reveal a home-page
//! section.

use crate::app::AppState;
use crate::domain::search::{search_catalog, SearchAction};
use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

/// Renders the search view
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_search_panel(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    ui.add(
        egui::TextEdit::singleline(state.layout.search_query_mut())
            .hint_text("Search")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    let query = state.layout.search_query().trim().to_string();
    if query.is_empty() {
        ui.label(
            RichText::new("Search projects, sections, experience, and skills.")
                .italics()
                .color(colors.text_dim),
        );
        return;
    }

    let hits = search_catalog(&query);
    if hits.is_empty() {
        ui.label(format!("No results found for '{}'", query));
        return;
    }
    ui.label(
        RichText::new(format!("{} results", hits.len()))
            .size(11.0)
            .color(colors.text_dim),
    );

    let mut action: Option<SearchAction> = None;
    egui::ScrollArea::vertical()
        .id_salt("search_results")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut last_group = None;
            for hit in &hits {
                if last_group != Some(hit.group) {
                    last_group = Some(hit.group);
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(hit.group.title())
                            .size(10.0)
                            .color(colors.text_dim),
                    );
                }
                let mut response = ui.selectable_label(false, hit.label);
                if !hit.detail.is_empty() {
                    response = response.on_hover_text(hit.detail);
                }
                if response.clicked() {
                    action = Some(hit.action);
                }
            }
        });

    match action {
        Some(SearchAction::OpenRoute(href)) => state.route.request(href),
        Some(SearchAction::RevealSection(id)) => {
            state.route.request("/");
            state.route.request_section(id);
        }
        None => {}
    }
}
