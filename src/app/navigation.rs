//! Route-change coordination.
//!
//! One place reacts to navigation: it keeps the tab strip in sync with the
//! current route, applies the chrome side effects of a page change, and
//! runs the startup routine that opens the explorer on first launch.

use crate::app::AppState;
use crate::state::{Menu, SubMenu, SubPanelMeasurements, Tab};
use rfolio::site::{find_page, home_page};

/// Below this viewport width the side panel collapses on navigation.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Startup runs across the first two frames: the explorer panel must be
/// laid out once before sub-panel measurements exist, so the portfolio
/// sub-panel opens one frame after the panel expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartupPhase {
    ExpandExplorer,
    OpenPortfolio,
    Done,
}

/// Coordinates navigation and its chrome side effects.
///
/// This struct is responsible for:
/// - Materializing a tab for every visited route (home as the fallback)
/// - Navigating to the active tab when tab state and route disagree
/// - Collapsing the side panel on narrow viewports after navigation
/// - The first-launch explorer/portfolio startup routine
pub struct NavigationCoordinator {
    startup: StartupPhase,
    first_route_applied: bool,
}

impl Default for NavigationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationCoordinator {
    pub fn new() -> Self {
        Self {
            startup: StartupPhase::ExpandExplorer,
            first_route_applied: false,
        }
    }

    /// Runs once per frame, before the chrome renders.
    ///
    /// # Arguments
    /// * `state` - The application state
    /// * `viewport_width` - Current viewport width in logical pixels
    /// * `measurements` - Explorer sub-panel measurements from the previous
    ///   frame's layout pass
    pub fn begin_frame(
        &mut self,
        state: &mut AppState,
        viewport_width: f32,
        measurements: &SubPanelMeasurements,
    ) {
        self.step_startup(state, viewport_width, measurements);

        // The very first frame materializes the tab for the initial route.
        if !self.first_route_applied {
            let initial = state.route.current().to_string();
            self.apply_route(state, &initial, viewport_width);
        }

        if let Some(href) = state.route.take_request() {
            self.apply_route(state, &href, viewport_width);
        }

        // When the active tab and the route disagree (closing the current
        // tab activates a neighbor), navigation follows the tab.
        let active = state.tabs.current_href().to_string();
        if !active.is_empty() && !state.route.is_current(&active) {
            self.apply_route(state, &active, viewport_width);
        }
    }

    fn step_startup(
        &mut self,
        state: &mut AppState,
        viewport_width: f32,
        measurements: &SubPanelMeasurements,
    ) {
        match self.startup {
            StartupPhase::ExpandExplorer => {
                if viewport_width >= MOBILE_BREAKPOINT {
                    state.panel.toggle(Some(Menu::Explorer));
                    self.startup = StartupPhase::OpenPortfolio;
                } else {
                    self.startup = StartupPhase::Done;
                }
            }
            StartupPhase::OpenPortfolio => {
                state.explorer.open(SubMenu::Portfolio, measurements);
                self.startup = StartupPhase::Done;
            }
            StartupPhase::Done => {}
        }
    }

    /// Makes `href` the current route and syncs the tab strip to it.
    fn apply_route(&mut self, state: &mut AppState, href: &str, viewport_width: f32) {
        let first = !self.first_route_applied;
        self.first_route_applied = true;

        if !first && state.route.is_current(href) {
            return;
        }

        let page = find_page(href).unwrap_or_else(home_page);
        state.route.commit(href);
        state.tabs.set_current(Tab::from(page));

        // The startup routine owns panel state on first load.
        if !first {
            state.reset_for_route_change(viewport_width < MOBILE_BREAKPOINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f32 = 1280.0;
    const NARROW: f32 = 600.0;

    fn measurements() -> SubPanelMeasurements {
        SubPanelMeasurements {
            container_height: 600.0,
            header_height: 22.0,
            content_heights: [80.0, 900.0, 110.0, 90.0, 66.0],
        }
    }

    fn run_frames(
        coordinator: &mut NavigationCoordinator,
        state: &mut AppState,
        width: f32,
        frames: usize,
    ) {
        for _ in 0..frames {
            coordinator.begin_frame(state, width, &measurements());
        }
    }

    #[test]
    fn test_startup_opens_explorer_then_portfolio_on_wide_viewports() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();

        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert!(state.panel.is_expanded());
        assert_eq!(state.panel.active_menu(), Menu::Explorer);
        assert!(!state.explorer.is_open(SubMenu::Portfolio));

        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert!(state.explorer.is_open(SubMenu::Portfolio));
        assert!(state.explorer.height(SubMenu::Portfolio) > 0.0);
    }

    #[test]
    fn test_startup_is_skipped_on_narrow_viewports() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();

        run_frames(&mut coordinator, &mut state, NARROW, 3);
        assert!(!state.panel.is_expanded());
        assert!(!state.explorer.is_open(SubMenu::Portfolio));
    }

    #[test]
    fn test_first_frame_materializes_the_home_tab() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();

        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert_eq!(state.tabs.current_href(), "/");
        assert_eq!(state.tabs.open_tabs().len(), 1);
        assert_eq!(state.tabs.open_tabs()[0].title, "About Me");
    }

    #[test]
    fn test_first_load_does_not_reset_chrome() {
        let mut state = AppState::new();
        state.sections.set_visible("about-me");
        let mut coordinator = NavigationCoordinator::new();

        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert!(state.sections.is_visible("about-me"));
    }

    #[test]
    fn test_navigation_request_opens_a_tab_and_resets_sections() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();
        run_frames(&mut coordinator, &mut state, WIDE, 2);

        state.sections.set_visible("about-me");
        state.route.request("/apps/packet-lens");
        coordinator.begin_frame(&mut state, WIDE, &measurements());

        assert_eq!(state.route.current(), "/apps/packet-lens");
        assert_eq!(state.tabs.current_href(), "/apps/packet-lens");
        assert_eq!(state.tabs.open_tabs().len(), 2);
        assert!(!state.sections.is_visible("about-me"));
        // Wide viewports keep the panel open across navigation.
        assert!(state.panel.is_expanded());
    }

    #[test]
    fn test_narrow_viewports_collapse_the_panel_on_navigation() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();
        run_frames(&mut coordinator, &mut state, WIDE, 2);
        assert!(state.panel.is_expanded());

        state.route.request("/apps/flightdeck");
        coordinator.begin_frame(&mut state, NARROW, &measurements());
        assert!(!state.panel.is_expanded());
    }

    #[test]
    fn test_unknown_routes_bounce_back_to_the_home_tab() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();
        run_frames(&mut coordinator, &mut state, WIDE, 2);

        state.route.request("/no/such/page");
        coordinator.begin_frame(&mut state, WIDE, &measurements());
        // The fallback tab is the home tab, and navigation follows it.
        assert_eq!(state.tabs.current_href(), "/");
        assert_eq!(state.route.current(), "/");
        assert_eq!(state.tabs.open_tabs().len(), 1);
    }

    #[test]
    fn test_closing_the_active_tab_navigates_to_its_neighbor() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();
        run_frames(&mut coordinator, &mut state, WIDE, 2);

        state.route.request("/apps/packet-lens");
        coordinator.begin_frame(&mut state, WIDE, &measurements());
        state.route.request("/apps/flightdeck");
        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert_eq!(state.tabs.open_tabs().len(), 3);

        state.tabs.close("/apps/flightdeck");
        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert_eq!(state.route.current(), "/apps/packet-lens");
        assert_eq!(state.tabs.current_href(), "/apps/packet-lens");
    }

    #[test]
    fn test_closing_every_tab_leaves_the_route_alone() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();
        run_frames(&mut coordinator, &mut state, WIDE, 2);

        state.tabs.close("/");
        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert!(state.tabs.is_empty());
        assert_eq!(state.route.current(), "/");
    }

    #[test]
    fn test_renavigating_to_the_current_route_is_a_no_op() {
        let mut state = AppState::new();
        let mut coordinator = NavigationCoordinator::new();
        run_frames(&mut coordinator, &mut state, WIDE, 2);

        state.sections.set_visible("skills");
        state.route.request("/");
        coordinator.begin_frame(&mut state, WIDE, &measurements());
        assert!(state.sections.is_visible("skills"));
        assert_eq!(state.tabs.open_tabs().len(), 1);
    }
}
