//! Centralized application state for the portfolio shell.
//!
//! This module implements the State pattern by composing focused state components
//! that each manage a specific aspect of the application's state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{
    AdminState, ExplorerState, LayoutState, PanelExpansionState, RouteState, SectionTracker,
    TabRegistry, ThemeState,
};
use rfolio::site::HOME_SECTIONS;

/// Main application state composed of focused state components.
///
/// Each component has private fields to enforce its invariants and
/// intent-revealing public methods; the shell passes the whole struct to
/// the chrome and each widget touches only the aspect it owns.
pub struct AppState {
    // ===== Focused State Components =====
    /// Current route and pending navigation
    pub route: RouteState,

    /// Open tabs, their order, and the active tab
    pub tabs: TabRegistry,

    /// Scroll-tracked section visibility for the current page
    pub sections: SectionTracker,

    /// Activity-bar menu expansion state
    pub panel: PanelExpansionState,

    /// Explorer sub-panel open flags and height allotments
    pub explorer: ExplorerState,

    /// Indexing admin panel state
    pub admin: AdminState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        let mut sections = SectionTracker::new();
        sections.set_catalog(&HOME_SECTIONS);

        Self {
            route: RouteState::new(),
            tabs: TabRegistry::new(),
            sections,
            panel: PanelExpansionState::new(),
            explorer: ExplorerState::new(),
            admin: AdminState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
        }
    }

    /// Creates a new AppState with theme and layout settings loaded from storage.
    pub fn with_theme_and_layout(theme_name: String, side_panel_width: f32) -> Self {
        let mut state = Self::new();
        state.theme = ThemeState::with_theme(theme_name);
        state.layout = LayoutState::with_side_panel_width(side_panel_width);
        state
    }

    // ===== High-Level Coordination Methods =====

    /// Applies the chrome side effects of a route change.
    ///
    /// Section visibility always starts over on a new page; the side panel
    /// additionally collapses when the viewport is too narrow to keep it.
    pub fn reset_for_route_change(&mut self, narrow_viewport: bool) {
        if narrow_viewport {
            self.panel.close_if_open();
        }
        self.sections.reset_visible();
    }
}
