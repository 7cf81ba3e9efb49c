//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Keyboard shortcuts for panel toggling

pub mod keyboard_handler;
