//! Top bar UI rendering
//!
//! Handles the editor-style title bar: decorative menu labels, the window
//! title, and the theme selector.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

const MENU_LABELS: [&str; 8] = [
    "File", "Edit", "Selection", "View", "Go", "Run", "Terminal", "Help",
];

/// Renders the top bar with menu labels, window title, and theme selector
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_top_bar(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("⬡").size(15.0).color(colors.blue));

        for label in MENU_LABELS {
            ui.label(RichText::new(label).size(12.0).color(colors.text_dim));
        }

        // Theme selector on the right, title centered in whatever is left
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.available_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name,
                        );
                    }
                });

            // Save theme preference if it changed
            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label(RichText::new("Theme:").size(12.0).color(colors.text_dim));

            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    let title = state
                        .tabs
                        .current_tab()
                        .map(|tab| format!("{} — ADRIAN-VEGA", tab.title))
                        .unwrap_or_else(|| "ADRIAN-VEGA".to_string());
                    ui.label(RichText::new(title).size(12.0).color(colors.text_dim));
                },
            );
        });
    });
}
