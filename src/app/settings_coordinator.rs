//! Settings persistence coordination.
//!
//! Persists layout preferences to eframe storage as JSON strings, with
//! typed load helpers that fall back to defaults when a stored value is
//! missing or no longer parses.

use serde::{Deserialize, Serialize};

const SIDE_PANEL_WIDTH_KEY: &str = "side_panel_width";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the persisted side panel width, or the given default.
    pub fn load_side_panel_width(storage: Option<&dyn eframe::Storage>, default: f32) -> f32 {
        Self::load_setting_or(storage, SIDE_PANEL_WIDTH_KEY, default)
    }

    /// Saves the side panel width.
    pub fn save_side_panel_width(storage: &mut dyn eframe::Storage, width: f32) {
        Self::save_setting(storage, SIDE_PANEL_WIDTH_KEY, &width);
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}
