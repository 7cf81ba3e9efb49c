//! UI panel rendering subsystem
//!
//! This module contains all chrome rendering logic for the portfolio shell:
//! - Top bar (menu labels, window title, theme selector)
//! - Activity bar (view icons and toggling)
//! - Side panel views (explorer, search, source control, debug, extensions)
//! - Tab strip (activation, closing, drag reordering)
//! - Content area (home page sections, project pages)
//! - Status bar (branch, context, memory)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (keyboard shortcuts)

pub mod activity_bar;
pub mod content;
pub mod debug_panel;
pub mod explorer_panel;
pub mod extensions_panel;
pub mod input;
pub mod panel_manager;
pub mod search_panel;
pub mod side_panel;
pub mod source_control_panel;
pub mod status_bar;
pub mod tab_strip;
pub mod top_bar;
