//! Debug panel UI rendering
//!
//! Handles the "Run and Debug" view, which fronts the Google indexing
//! server: single-URL submission and status lookup, the two batch actions,
//! and a scrolling result log. Buttons disable while a request is in
//! flight since the server paces batch submissions.

use crate::app::AppState;
use crate::io::AdminAction;
use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

/// Renders the indexing admin view
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<AdminAction>` - A request the shell should start
pub fn render_debug_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<AdminAction> {
    let mut action = None;

    ui.label(
        RichText::new("GOOGLE INDEXING")
            .size(10.0)
            .color(colors.text_dim),
    );
    ui.add_space(4.0);

    ui.label(RichText::new("Server").size(11.0));
    ui.add(
        egui::TextEdit::singleline(state.admin.server_url_mut()).desired_width(f32::INFINITY),
    );
    ui.label(RichText::new("URL").size(11.0));
    ui.add(egui::TextEdit::singleline(state.admin.url_input_mut()).desired_width(f32::INFINITY));
    ui.add_space(6.0);

    let busy = state.admin.is_busy();
    ui.add_enabled_ui(!busy, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui.button("▶ Submit URL").clicked() {
                action = Some(AdminAction::Submit {
                    url: state.admin.url_input().trim().to_string(),
                });
            }
            if ui.button("🔎 Check Status").clicked() {
                action = Some(AdminAction::Status {
                    url: state.admin.url_input().trim().to_string(),
                });
            }
        });
        ui.horizontal_wrapped(|ui| {
            if ui
                .button("⚡ Quick Update")
                .on_hover_text("Ping the sitemap and resubmit the priority URLs")
                .clicked()
            {
                action = Some(AdminAction::QuickUpdate);
            }
            if ui
                .button("🔁 Complete Reindex")
                .on_hover_text("Ping the sitemap and resubmit every published URL")
                .clicked()
            {
                action = Some(AdminAction::CompleteReindex);
            }
        });
    });

    if busy {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Request in flight").color(colors.text_dim));
        });
    }
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new("OUTPUT").size(10.0).color(colors.text_dim));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Clear").clicked() {
                state.admin.clear_log();
            }
        });
    });

    egui::ScrollArea::vertical()
        .id_salt("admin_log")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if state.admin.log().is_empty() {
                ui.label(
                    RichText::new("No requests yet.")
                        .italics()
                        .color(colors.text_dim),
                );
            }
            for entry in state.admin.log() {
                let (glyph, glyph_color) = if entry.success {
                    ("✔", colors.green)
                } else {
                    ("✘", colors.red)
                };
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(glyph).color(glyph_color));
                    ui.label(RichText::new(&entry.text).size(12.0));
                });
            }
        });

    action
}
