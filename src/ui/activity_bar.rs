//! Activity bar UI rendering
//!
//! Handles the narrow icon strip on the far left. Each icon toggles one
//! side panel view; the active view carries an accent bar on the bar's
//! left edge.

use crate::app::AppState;
use crate::state::Menu;
use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

const MENU_ITEMS: [(Menu, &str, &str); 5] = [
    (Menu::Explorer, "📁", "Explorer (Ctrl+Shift+E)"),
    (Menu::Search, "🔍", "Search (Ctrl+Shift+F)"),
    (Menu::SourceControl, "🔀", "Source Control (Ctrl+Shift+G)"),
    (Menu::Debug, "🐛", "Run and Debug (Ctrl+Shift+D)"),
    (Menu::Extensions, "📦", "Extensions (Ctrl+Shift+X)"),
];

/// Renders the activity bar icons and handles menu toggling
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_activity_bar(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let left_edge = ui.max_rect().left();

    ui.vertical_centered(|ui| {
        ui.add_space(6.0);

        for (menu, icon, tooltip) in MENU_ITEMS {
            let active = state.panel.is_expanded() && state.panel.active_menu() == menu;
            let tint = if active {
                colors.text_strong
            } else {
                colors.text_dim
            };

            let response = ui
                .add(egui::Button::new(RichText::new(icon).size(20.0).color(tint)).frame(false))
                .on_hover_text(tooltip);

            if active {
                let accent = egui::Rect::from_min_max(
                    egui::pos2(left_edge, response.rect.top()),
                    egui::pos2(left_edge + 2.0, response.rect.bottom()),
                );
                ui.painter().rect_filled(accent, 0.0, colors.text_strong);
            }

            if response.clicked() {
                state.panel.toggle(Some(menu));
            }

            ui.add_space(8.0);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            ui.add(
                egui::Button::new(RichText::new("⚙").size(20.0).color(colors.text_dim))
                    .frame(false),
            )
            .on_hover_text("Manage");
            ui.add_space(4.0);
            ui.add(
                egui::Button::new(RichText::new("👤").size(20.0).color(colors.text_dim))
                    .frame(false),
            )
            .on_hover_text("Accounts");
        });
    });
}
