//! UI layout state management.
//!
//! This module encapsulates chrome geometry and the text buffers behind
//! the chrome's filter boxes.

/// State related to UI layout and sizing.
///
/// Responsibilities:
/// - Tracking the resizable side panel width
/// - Holding the search and extensions filter text buffers
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Width of the side panel area (persisted across sessions)
    side_panel_width: f32,
    /// Text buffer for the search panel's query box
    search_query: String,
    /// Text buffer for the extensions panel's filter box
    extensions_query: String,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Narrowest usable side panel.
    pub const MIN_SIDE_PANEL_WIDTH: f32 = 180.0;
    /// Widest the side panel may be dragged.
    pub const MAX_SIDE_PANEL_WIDTH: f32 = 480.0;

    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            side_panel_width: 260.0,
            search_query: String::new(),
            extensions_query: String::new(),
        }
    }

    /// Creates a new layout state with a persisted side panel width.
    pub fn with_side_panel_width(width: f32) -> Self {
        let mut layout = Self::new();
        layout.set_side_panel_width(width);
        layout
    }

    // ===== Layout Queries =====

    pub fn side_panel_width(&self) -> f32 {
        self.side_panel_width
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn extensions_query(&self) -> &str {
        &self.extensions_query
    }

    // ===== Layout Mutations =====

    /// Sets the side panel width, clamped to the usable range.
    pub fn set_side_panel_width(&mut self, width: f32) {
        self.side_panel_width =
            width.clamp(Self::MIN_SIDE_PANEL_WIDTH, Self::MAX_SIDE_PANEL_WIDTH);
    }

    /// Returns a mutable reference to the search text buffer (for UI handlers).
    pub fn search_query_mut(&mut self) -> &mut String {
        &mut self.search_query
    }

    /// Returns a mutable reference to the extensions filter buffer (for UI handlers).
    pub fn extensions_query_mut(&mut self) -> &mut String {
        &mut self.extensions_query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_panel_width_is_clamped() {
        let mut layout = LayoutState::new();
        layout.set_side_panel_width(20.0);
        assert_eq!(layout.side_panel_width(), LayoutState::MIN_SIDE_PANEL_WIDTH);
        layout.set_side_panel_width(2000.0);
        assert_eq!(layout.side_panel_width(), LayoutState::MAX_SIDE_PANEL_WIDTH);
    }

    #[test]
    fn test_persisted_width_goes_through_the_clamp() {
        let layout = LayoutState::with_side_panel_width(0.0);
        assert_eq!(layout.side_panel_width(), LayoutState::MIN_SIDE_PANEL_WIDTH);
    }
}
