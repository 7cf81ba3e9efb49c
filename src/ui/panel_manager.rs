//! Panel orchestration and layout management.
//!
//! Coordinates all chrome panels (top bar, activity bar, side panel, tab
//! strip, content, status bar) and manages their layout and interaction
//! routing.

use crate::app::AppState;
use crate::io::AdminAction;
use crate::state::{LayoutState, SubPanelMeasurements};
use crate::ui::{activity_bar, content, input, side_panel, status_bar, tab_strip, top_bar};
use eframe::egui;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// The debug view asked for an indexing request
    AdminActionRequested(AdminAction),
}

/// Manages the layout and rendering of all chrome panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        measurements: &mut SubPanelMeasurements,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        input::keyboard_handler::handle_keyboard_shortcuts(ctx, state);

        // Get theme colors for rendering
        let colors = state.theme.colors().clone();

        // Title bar at the top
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::default()
                    .fill(colors.topbar_background)
                    .inner_margin(egui::Margin::symmetric(8, 5)),
            )
            .show(ctx, |ui| {
                top_bar::render_top_bar(ui, state, &colors);
            });

        // Status bar at the very bottom
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::default()
                    .fill(colors.topbar_background)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                status_bar::render_status_bar(ui, state, &colors);
            });

        // Narrow icon strip on the far left
        egui::SidePanel::left("activity_bar")
            .exact_width(48.0)
            .resizable(false)
            .frame(egui::Frame::default().fill(colors.activity_background))
            .show(ctx, |ui| {
                activity_bar::render_activity_bar(ui, state, &colors);
            });

        // Expandable side panel next to the activity bar
        if state.panel.is_expanded() {
            let panel_frame = egui::Frame::default()
                .fill(colors.activity_background)
                .inner_margin(egui::Margin::same(8));

            let response = egui::SidePanel::left("side_panel")
                .resizable(true)
                .default_width(state.layout.side_panel_width())
                .width_range(LayoutState::MIN_SIDE_PANEL_WIDTH..=LayoutState::MAX_SIDE_PANEL_WIDTH)
                .frame(panel_frame)
                .show(ctx, |ui| {
                    side_panel::render_side_panel(ui, state, &colors, measurements)
                });

            if let Some(action) = response.inner {
                interaction = Some(PanelInteraction::AdminActionRequested(action));
            }
            // Remember drag-resizes across sessions.
            state.layout.set_side_panel_width(response.response.rect.width());
        }

        // Tab strip and page content fill the rest
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(colors.background)
                    .inner_margin(egui::Margin::same(0)),
            )
            .show(ctx, |ui| {
                tab_strip::render_tab_strip(ui, state, &colors);
                ui.separator();
                egui::Frame::default()
                    .inner_margin(egui::Margin::symmetric(16, 4))
                    .show(ui, |ui| {
                        content::render_content(ui, state, &colors);
                    });
            });

        interaction
    }
}
