//! Side panel dispatch
//!
//! Renders the expanded side panel: a view title header, then whichever
//! view owns the panel. Only the debug view produces interactions the
//! shell has to handle.

use crate::app::AppState;
use crate::io::AdminAction;
use crate::state::{Menu, SubPanelMeasurements};
use crate::ui::{
    debug_panel, explorer_panel, extensions_panel, search_panel, source_control_panel,
};
use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

/// Renders the active side panel view
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `measurements` - Explorer measurement slot, refreshed when the
///   explorer view renders
///
/// # Returns
/// * `Option<AdminAction>` - A request from the debug view, if any
pub fn render_side_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
    measurements: &mut SubPanelMeasurements,
) -> Option<AdminAction> {
    let menu = state.panel.active_menu();

    ui.label(
        RichText::new(menu.title().to_uppercase())
            .size(11.0)
            .color(colors.text_dim),
    );
    ui.add_space(4.0);

    match menu {
        Menu::Explorer => {
            explorer_panel::render_explorer_panel(ui, state, colors, measurements);
            None
        }
        Menu::Search => {
            search_panel::render_search_panel(ui, state, colors);
            None
        }
        Menu::SourceControl => {
            source_control_panel::render_source_control_panel(ui, colors);
            None
        }
        Menu::Debug => debug_panel::render_debug_panel(ui, state, colors),
        Menu::Extensions => {
            extensions_panel::render_extensions_panel(ui, state, colors);
            None
        }
    }
}
