//! Keyboard shortcut handling.
//!
//! The editor-style chords: Ctrl+B toggles the side panel, and the
//! Ctrl+Shift chords jump straight to a view, collapsing it when it is
//! already active.

use crate::app::AppState;
use crate::state::Menu;
use eframe::egui;

const VIEW_CHORDS: [(egui::Key, Menu); 5] = [
    (egui::Key::E, Menu::Explorer),
    (egui::Key::F, Menu::Search),
    (egui::Key::G, Menu::SourceControl),
    (egui::Key::D, Menu::Debug),
    (egui::Key::X, Menu::Extensions),
];

/// Handles global keyboard shortcuts. Consumed keys never reach widgets.
pub fn handle_keyboard_shortcuts(ctx: &egui::Context, state: &mut AppState) {
    let view_chord = egui::Modifiers::COMMAND | egui::Modifiers::SHIFT;
    for (key, menu) in VIEW_CHORDS {
        if ctx.input_mut(|i| i.consume_key(view_chord, key)) {
            state.panel.toggle(Some(menu));
        }
    }

    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::B)) {
        state.panel.toggle(None);
    }
}
