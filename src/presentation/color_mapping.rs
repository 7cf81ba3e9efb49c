//! Color and glyph mapping for file kinds and sections.
//!
//! This module provides functions for:
//! - Assigning icons and colors to tabs and tree rows based on file kind
//! - Assigning accent colors to home page sections
//!
//! Assignment is deterministic so the same file always paints the same way.

use egui::Color32;
use rfolio::site::FileKind;
use rfolio::theme::ThemeColors;

/// Returns the glyph shown next to a file name in tabs and tree rows.
pub fn file_kind_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::About => "👤",
        FileKind::Rust => "🦀",
        FileKind::React => "⚛",
        FileKind::Python => "🐍",
        FileKind::Markdown => "📄",
        FileKind::Config => "⚙",
    }
}

/// Returns the accent color for a file kind.
///
/// # Arguments
/// * `kind` - The file kind of the tab or tree row
/// * `colors` - The current theme's color palette
pub fn file_kind_color(kind: FileKind, colors: &ThemeColors) -> Color32 {
    match kind {
        FileKind::About => colors.purple,
        FileKind::Rust => colors.orange,
        FileKind::React => colors.cyan,
        FileKind::Python => colors.yellow,
        FileKind::Markdown => colors.blue,
        FileKind::Config => colors.gray,
    }
}

/// Returns the accent color for a home page section header.
///
/// Sections cycle through the palette in document order.
pub fn section_accent(section_index: usize, colors: &ThemeColors) -> Color32 {
    const CYCLE: usize = 5;
    match section_index % CYCLE {
        0 => colors.green,
        1 => colors.orange,
        2 => colors.cyan,
        3 => colors.purple,
        _ => colors.magenta,
    }
}
