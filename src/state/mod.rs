//! State management modules for the portfolio shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - Tab state (open tabs, active tab, ordering)
//! - Section state (per-page catalog, scroll visibility)
//! - Panel state (activity-bar menu expansion)
//! - Explorer state (collapsible sub-panels, height allotments)
//! - Route state (current route, pending navigation)
//! - Admin state (indexing panel inputs and result log)
//! - Theme state (theme manager, current theme)
//! - Layout state (side panel width, filter text buffers)

mod admin;
mod explorer;
mod layout_state;
mod panel;
mod router;
mod sections;
mod tabs;
mod theme_state;

pub use admin::{AdminLogEntry, AdminState, DEFAULT_SERVER_URL};
pub use explorer::{ExplorerState, SubMenu, SubPanelMeasurements, SubPanelState};
pub use layout_state::LayoutState;
pub use panel::{Menu, PanelExpansionState};
pub use router::RouteState;
pub use sections::SectionTracker;
pub use tabs::{Tab, TabRegistry};
pub use theme_state::ThemeState;
