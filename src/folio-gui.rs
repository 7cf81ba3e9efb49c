//! Portfolio Shell GUI Application
//!
//! This module provides the desktop rendition of the portfolio: a personal
//! site dressed as a code editor, built with the egui framework. The shell
//! features:
//! - An activity bar and expandable side panel with five views
//! - An explorer with collapsible sub-panels sharing one container
//! - A tab strip with drag reordering and middle-click close

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Scroll-tracked home page sections mirrored in the outline
//! - An indexing admin view backed by a background request thread
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core business logic (height allocation, catalog search)
//! - `presentation/` - Visual styling and color mapping (separated from domain logic)
//! - `io/` - Background requests against the indexing server
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `state/` - State management for routing, tabs, sections, and panels

use eframe::egui;

mod app;
mod domain;
mod io;
mod presentation;
mod state;
mod ui;
mod utils;

use app::{
    AdminCoordinator, AppState, NavigationCoordinator, SettingsCoordinator, ThemeCoordinator,
};
use io::AdminSubmitter;
use state::SubPanelMeasurements;
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the portfolio shell GUI.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("Adrian Vega — Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "Adrian Vega Portfolio",
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
    )
}

/// The main portfolio shell application.
///
/// This struct is deliberately thin, delegating most functionality to coordinators:
/// - `NavigationCoordinator` handles route changes, tab sync, and the startup routine
/// - `AdminCoordinator` handles indexing requests and their completion
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct PortfolioApp {
    /// Centralized application state
    state: AppState,
    /// Navigation and startup coordination
    navigation: NavigationCoordinator,
    /// Background indexing request runner
    submitter: AdminSubmitter,
    /// Explorer sub-panel measurements from the last layout pass
    explorer_measurements: SubPanelMeasurements,
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            navigation: NavigationCoordinator::new(),
            submitter: AdminSubmitter::new(),
            explorer_measurements: SubPanelMeasurements::default(),
        }
    }
}

impl PortfolioApp {
    /// Creates a new shell instance with theme and layout settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let default_side_panel_width = 260.0;
        let side_panel_width =
            SettingsCoordinator::load_side_panel_width(cc.storage, default_side_panel_width);

        Self {
            state: AppState::with_theme_and_layout(current_theme_name, side_panel_width),
            navigation: NavigationCoordinator::new(),
            submitter: AdminSubmitter::new(),
            explorer_measurements: SubPanelMeasurements::default(),
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::AdminActionRequested(action) => {
                AdminCoordinator::start_request(&mut self.state, &mut self.submitter, action, ctx);
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_side_panel_width(storage, self.state.layout.side_panel_width());
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// The frame is a straight line through the coordinators:
    /// 1. Check for background request completion
    /// 2. Apply theme
    /// 3. Run navigation (startup routine, queued requests, tab sync)
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Check for background request completion
        AdminCoordinator::check_request_completion(&mut self.state, &mut self.submitter);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            storage.set_string(
                "theme_preference",
                self.state.theme.current_theme_name().to_string(),
            );
            SettingsCoordinator::save_side_panel_width(
                storage,
                self.state.layout.side_panel_width(),
            );
        }

        // Navigation runs before rendering so the chrome draws the new route
        self.navigation.begin_frame(
            &mut self.state,
            ctx.content_rect().width(),
            &self.explorer_measurements,
        );

        // Render all panels and get interaction result
        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &mut self.explorer_measurements)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
