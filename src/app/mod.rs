//! Application-level modules for the portfolio shell.
//!
//! This module contains the navigation and request coordinators plus the
//! centralized application state.

mod admin_coordinator;
mod app_state;
mod navigation;
mod settings_coordinator;
mod theme_coordinator;

pub use admin_coordinator::AdminCoordinator;
pub use app_state::AppState;
pub use navigation::{NavigationCoordinator, MOBILE_BREAKPOINT};
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
