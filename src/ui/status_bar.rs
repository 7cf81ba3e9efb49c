//! Status bar UI rendering
//!
//! Handles the bottom status bar: branch glyph, problem counters, the
//! section or page currently in view, and editor-style position stubs.

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

/// Renders the status bar at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("🌿 main")
                .size(12.0)
                .color(colors.text_strong),
        );
        ui.label(RichText::new("✘ 0  ⚠ 0").size(12.0));

        // The section primarily in view on the home page, or the open page.
        let context = if state.route.is_current("/") {
            state.sections.primary().map(|s| s.title.to_string())
        } else {
            state.tabs.current_tab().map(|tab| tab.title.clone())
        };
        if let Some(context) = context {
            ui.label(
                RichText::new(format!("◉ {}", context))
                    .size(12.0)
                    .color(colors.text_dim),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new("🔔").size(12.0));
            ui.label(RichText::new(format_memory_mb(get_current_memory_mb())).size(12.0));
            ui.label(RichText::new("Rust").size(12.0));
            ui.label(RichText::new("UTF-8").size(12.0));
            ui.label(RichText::new("Ln 1, Col 1").size(12.0));
        });
    });
}
