//! Explorer sub-panel state.
//!
//! The explorer view stacks five collapsible sub-panels in one container.
//! Their open flags live here; their heights are recomputed from live
//! measurements on every toggle so the layout reflects whatever content
//! the rendering pass produced.

use crate::domain::allocation::{compute_allocation, SUB_PANEL_SLOTS};

/// The five sub-panels of the explorer view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubMenu {
    Editor,
    Portfolio,
    Outline,
    Timeline,
    Scripts,
}

impl SubMenu {
    pub const ALL: [SubMenu; SUB_PANEL_SLOTS] = [
        SubMenu::Editor,
        SubMenu::Portfolio,
        SubMenu::Outline,
        SubMenu::Timeline,
        SubMenu::Scripts,
    ];

    /// Index into the allocation slot order.
    pub fn slot(self) -> usize {
        match self {
            SubMenu::Editor => 0,
            SubMenu::Portfolio => 1,
            SubMenu::Outline => 2,
            SubMenu::Timeline => 3,
            SubMenu::Scripts => 4,
        }
    }

    /// Header label shown on the sub-panel's title row.
    pub fn title(self) -> &'static str {
        match self {
            SubMenu::Editor => "Open Editors",
            SubMenu::Portfolio => "Portfolio",
            SubMenu::Outline => "Outline",
            SubMenu::Timeline => "Timeline",
            SubMenu::Scripts => "Scripts",
        }
    }
}

/// Open flag and current height allotment for one sub-panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubPanelState {
    pub open: bool,
    pub height: f32,
}

/// Measurements the rendering layer reads immediately before a toggle.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubPanelMeasurements {
    /// Height of the shared sub-panel container.
    pub container_height: f32,
    /// Height of one sub-panel header row.
    pub header_height: f32,
    /// Natural content height per sub-panel, in slot order.
    pub content_heights: [f32; SUB_PANEL_SLOTS],
}

/// State of the explorer view's collapsible sub-panels.
///
/// Responsibilities:
/// - Track which sub-panels are open
/// - Recompute height allotments from measurements on every toggle
/// - Expose per-panel state for the rendering layer
#[derive(Debug, Clone)]
pub struct ExplorerState {
    panels: [SubPanelState; SUB_PANEL_SLOTS],
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerState {
    /// Creates explorer state with every sub-panel collapsed.
    pub fn new() -> Self {
        Self {
            panels: [SubPanelState::default(); SUB_PANEL_SLOTS],
        }
    }

    // ===== Queries =====

    pub fn panel(&self, menu: SubMenu) -> SubPanelState {
        self.panels[menu.slot()]
    }

    pub fn is_open(&self, menu: SubMenu) -> bool {
        self.panels[menu.slot()].open
    }

    pub fn height(&self, menu: SubMenu) -> f32 {
        self.panels[menu.slot()].height
    }

    // ===== Mutations =====

    /// Flips one sub-panel and redistributes the container's height.
    ///
    /// # Arguments
    /// * `menu` - The sub-panel whose header was clicked
    /// * `measurements` - Container and content measurements taken at call
    ///   time
    pub fn toggle(&mut self, menu: SubMenu, measurements: &SubPanelMeasurements) {
        let slot = menu.slot();
        self.panels[slot].open = !self.panels[slot].open;
        self.reallocate(measurements);
    }

    /// Opens a sub-panel if it is currently closed.
    pub fn open(&mut self, menu: SubMenu, measurements: &SubPanelMeasurements) {
        if !self.is_open(menu) {
            self.toggle(menu, measurements);
        }
    }

    /// Recomputes every height allotment from fresh measurements. Called on
    /// toggles and whenever the container is resized.
    pub fn reallocate(&mut self, measurements: &SubPanelMeasurements) {
        let mut open = [false; SUB_PANEL_SLOTS];
        for (slot, panel) in self.panels.iter().enumerate() {
            open[slot] = panel.open;
        }
        let heights = compute_allocation(
            measurements.container_height,
            measurements.header_height,
            measurements.content_heights,
            open,
        );
        for (slot, height) in heights.into_iter().enumerate() {
            self.panels[slot].height = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocation::EDITOR_MAX_HEIGHT;

    fn measurements() -> SubPanelMeasurements {
        SubPanelMeasurements {
            container_height: 600.0,
            header_height: 22.0,
            content_heights: [180.0, 900.0, 120.0, 60.0, 200.0],
        }
    }

    #[test]
    fn test_new_state_is_fully_collapsed() {
        let state = ExplorerState::new();
        for menu in SubMenu::ALL {
            assert!(!state.is_open(menu));
            assert_eq!(state.height(menu), 0.0);
        }
    }

    #[test]
    fn test_toggle_flips_the_open_flag() {
        let mut state = ExplorerState::new();
        let m = measurements();

        state.toggle(SubMenu::Outline, &m);
        assert!(state.is_open(SubMenu::Outline));

        state.toggle(SubMenu::Outline, &m);
        assert!(!state.is_open(SubMenu::Outline));
        assert_eq!(state.height(SubMenu::Outline), 0.0);
    }

    #[test]
    fn test_opening_the_editor_takes_space_from_the_portfolio() {
        let mut state = ExplorerState::new();
        let m = measurements();

        state.toggle(SubMenu::Portfolio, &m);
        let portfolio_alone = state.height(SubMenu::Portfolio);

        state.toggle(SubMenu::Editor, &m);
        assert_eq!(state.height(SubMenu::Editor), EDITOR_MAX_HEIGHT);
        assert_eq!(
            state.height(SubMenu::Portfolio),
            portfolio_alone - EDITOR_MAX_HEIGHT
        );
    }

    #[test]
    fn test_closing_the_editor_returns_its_space() {
        let mut state = ExplorerState::new();
        let m = measurements();

        state.toggle(SubMenu::Portfolio, &m);
        let portfolio_alone = state.height(SubMenu::Portfolio);

        state.toggle(SubMenu::Editor, &m);
        state.toggle(SubMenu::Editor, &m);
        assert_eq!(state.height(SubMenu::Portfolio), portfolio_alone);
        assert_eq!(state.height(SubMenu::Editor), 0.0);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut state = ExplorerState::new();
        let m = measurements();

        state.open(SubMenu::Portfolio, &m);
        let height = state.height(SubMenu::Portfolio);
        state.open(SubMenu::Portfolio, &m);
        assert!(state.is_open(SubMenu::Portfolio));
        assert_eq!(state.height(SubMenu::Portfolio), height);
    }

    #[test]
    fn test_reallocate_tracks_new_measurements() {
        let mut state = ExplorerState::new();
        let mut m = measurements();

        state.toggle(SubMenu::Portfolio, &m);
        let before = state.height(SubMenu::Portfolio);

        m.container_height = 800.0;
        state.reallocate(&m);
        assert_eq!(state.height(SubMenu::Portfolio), before + 200.0);
    }

    #[test]
    fn test_open_heights_stay_within_the_container() {
        let mut state = ExplorerState::new();
        let m = SubPanelMeasurements {
            container_height: 240.0,
            header_height: 22.0,
            content_heights: [500.0; 5],
        };

        for menu in SubMenu::ALL {
            state.toggle(menu, &m);
        }
        let total: f32 = SubMenu::ALL.iter().map(|m| state.height(*m)).sum();
        assert!(total <= m.container_height);
    }
}
