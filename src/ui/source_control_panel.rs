//! Source control panel UI rendering
//!
//! A decorative source-control view: branch summary, commit box, and a
//! short list of working-tree changes. Nothing here mutates state.

use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

/// Renders the source control view
pub fn render_source_control_panel(ui: &mut egui::Ui, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🌿").color(colors.green));
        ui.label(RichText::new("main").strong());
        ui.label(RichText::new("↑0 ↓0").size(11.0).color(colors.text_dim));
    });
    ui.add_space(6.0);

    egui::Frame::default()
        .fill(colors.extreme_background)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Message (Ctrl+Enter to commit on 'main')")
                    .size(12.0)
                    .color(colors.text_dim),
            );
        });
    ui.add_space(10.0);

    ui.label(RichText::new("CHANGES").size(10.0).color(colors.text_dim));
    ui.add_space(2.0);

    let changes = [
        ("site/about-me.md", "M", colors.orange),
        ("apps/packet-lens/notes.md", "M", colors.orange),
        ("site/contact.md", "U", colors.green),
    ];
    for (path, badge, badge_color) in changes {
        ui.horizontal(|ui| {
            ui.label(RichText::new("📄").size(12.0));
            ui.label(RichText::new(path).size(12.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(badge).size(12.0).color(badge_color));
            });
        });
    }
}
