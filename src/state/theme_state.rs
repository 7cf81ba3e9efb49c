//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming. The chrome
//! (top bar, activity bar, panels, status bar) paints itself from the colors
//! of the currently selected theme every frame.

use rfolio::theme::{Theme, ThemeColors};
use rfolio::ThemeManager;

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Managing theme instances
/// - Tracking current theme selection
/// - Exposing the active palette to the chrome widgets
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: "Midnight".to_string(),
        }
    }

    /// Creates a new theme state with a specific theme.
    ///
    /// # Arguments
    /// * `theme_name` - The name of the theme to use
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: theme_name,
        }
    }

    // ===== Theme Queries =====

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the current theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Returns the active theme, falling back to the default when the
    /// persisted name no longer exists.
    pub fn active_theme(&self) -> &Theme {
        self.theme_manager
            .get_theme(&self.current_theme_name)
            .unwrap_or_else(|| self.theme_manager.current_theme())
    }

    /// Palette of the active theme. The chrome widgets read this each frame.
    pub fn colors(&self) -> &ThemeColors {
        &self.active_theme().colors
    }

    /// Names of every built-in theme, sorted, for the top-bar selector.
    pub fn available_themes(&self) -> Vec<&str> {
        self.theme_manager.list_themes()
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name.
    ///
    /// # Arguments
    /// * `theme_name` - The name of the theme to activate
    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_persisted_name_falls_back_to_the_default_palette() {
        let state = ThemeState::with_theme("No Such Theme".to_string());
        assert_eq!(state.active_theme().name, "Midnight");
    }

    #[test]
    fn test_set_theme_switches_the_active_palette() {
        let mut state = ThemeState::new();
        state.set_theme("Dracula".to_string());
        assert_eq!(state.active_theme().name, "Dracula");
    }
}
