//! Side-panel expansion state.
//!
//! One panel area, five menus, at most one active at a time. Toggling the
//! active menu collapses the panel; toggling another menu switches it while
//! staying expanded.

/// The activity-bar menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    Explorer,
    Search,
    SourceControl,
    Debug,
    Extensions,
}

impl Menu {
    pub const ALL: [Menu; 5] = [
        Menu::Explorer,
        Menu::Search,
        Menu::SourceControl,
        Menu::Debug,
        Menu::Extensions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Menu::Explorer => "Explorer",
            Menu::Search => "Search",
            Menu::SourceControl => "Source Control",
            Menu::Debug => "Run and Debug",
            Menu::Extensions => "Extensions",
        }
    }
}

/// State related to the expandable side panel.
///
/// Responsibilities:
/// - Tracking whether the panel is expanded
/// - Tracking which menu owns the panel
#[derive(Debug, Clone)]
pub struct PanelExpansionState {
    expanded: bool,
    active: Menu,
}

impl Default for PanelExpansionState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelExpansionState {
    /// Creates the initial state: collapsed, Explorer active.
    pub fn new() -> Self {
        Self {
            expanded: false,
            active: Menu::Explorer,
        }
    }

    // ===== Queries =====

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The menu owning the panel. Meaningful even while collapsed: it is
    /// the menu that would show on a plain expand.
    pub fn active_menu(&self) -> Menu {
        self.active
    }

    // ===== Mutations =====

    /// Toggles the panel.
    ///
    /// Without a menu, flips expansion and leaves the active menu alone.
    /// With a menu: expands onto it when collapsed, collapses when it is
    /// already the active menu, otherwise switches to it while staying
    /// expanded.
    pub fn toggle(&mut self, menu: Option<Menu>) {
        match menu {
            None => self.expanded = !self.expanded,
            Some(menu) => {
                if !self.expanded {
                    self.expanded = true;
                    self.active = menu;
                } else if self.active == menu {
                    self.expanded = false;
                } else {
                    self.active = menu;
                }
            }
        }
    }

    /// Collapses the panel if it is expanded; no-op otherwise.
    pub fn close_if_open(&mut self) {
        if self.expanded {
            self.expanded = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_collapsed_explorer() {
        let state = PanelExpansionState::new();
        assert!(!state.is_expanded());
        assert_eq!(state.active_menu(), Menu::Explorer);
    }

    #[test]
    fn test_plain_toggle_round_trips_expansion() {
        let mut state = PanelExpansionState::new();
        state.toggle(None);
        assert!(state.is_expanded());
        assert_eq!(state.active_menu(), Menu::Explorer);

        state.toggle(None);
        assert!(!state.is_expanded());
    }

    #[test]
    fn test_toggle_from_collapsed_lands_on_requested_menu() {
        for prior in Menu::ALL {
            let mut state = PanelExpansionState::new();
            state.toggle(Some(prior));
            state.toggle(Some(prior)); // collapse again, `prior` stays active

            state.toggle(Some(Menu::Debug));
            assert!(state.is_expanded());
            assert_eq!(state.active_menu(), Menu::Debug);
        }
    }

    #[test]
    fn test_toggle_active_menu_collapses() {
        let mut state = PanelExpansionState::new();
        state.toggle(Some(Menu::Search));
        state.toggle(Some(Menu::Search));

        assert!(!state.is_expanded());
        assert_eq!(state.active_menu(), Menu::Search);
    }

    #[test]
    fn test_toggle_other_menu_switches_while_expanded() {
        let mut state = PanelExpansionState::new();
        state.toggle(Some(Menu::Explorer));
        state.toggle(Some(Menu::Extensions));

        assert!(state.is_expanded());
        assert_eq!(state.active_menu(), Menu::Extensions);
    }

    #[test]
    fn test_close_if_open() {
        let mut state = PanelExpansionState::new();
        state.close_if_open();
        assert!(!state.is_expanded());

        state.toggle(Some(Menu::Search));
        state.close_if_open();
        assert!(!state.is_expanded());
        assert_eq!(state.active_menu(), Menu::Search);
    }
}
