//! Extensions panel UI rendering
//!
//! Handles the extensions view: the skill catalog rendered as marketplace
//! cards with ratings, download counts, and status badges, behind a text
//! filter.

use crate::app::AppState;
use crate::utils::format_rating_stars;
use eframe::egui;
use egui::RichText;
use rfolio::site::{SkillExtension, SKILL_EXTENSIONS};
use rfolio::theme::ThemeColors;

/// Renders the extensions view
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_extensions_panel(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    ui.add(
        egui::TextEdit::singleline(state.layout.extensions_query_mut())
            .hint_text("Search Extensions in Marketplace")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    let needle = state.layout.extensions_query().trim().to_lowercase();
    egui::ScrollArea::vertical()
        .id_salt("extensions_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut shown = 0;
            for skill in &SKILL_EXTENSIONS {
                if !needle.is_empty() && !matches_filter(skill, &needle) {
                    continue;
                }
                shown += 1;
                render_extension_card(ui, skill, colors);
                ui.add_space(6.0);
            }
            if shown == 0 {
                ui.label(format!("No extensions found matching '{}'", needle));
            }
        });
}

fn matches_filter(skill: &SkillExtension, needle_lower: &str) -> bool {
    skill.name.to_lowercase().contains(needle_lower)
        || skill.publisher.to_lowercase().contains(needle_lower)
        || skill.description.to_lowercase().contains(needle_lower)
}

fn render_extension_card(ui: &mut egui::Ui, skill: &SkillExtension, colors: &ThemeColors) {
    egui::Frame::default()
        .fill(colors.extreme_background)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(skill.name).size(13.0).strong());
                ui.label(
                    RichText::new(skill.publisher)
                        .size(11.0)
                        .color(colors.text_dim),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if skill.installed {
                        ui.label(RichText::new("INSTALLED").size(9.0).color(colors.green));
                    }
                    if skill.recommended {
                        ui.label(RichText::new("RECOMMENDED").size(9.0).color(colors.purple));
                    }
                    if skill.popular {
                        ui.label(RichText::new("POPULAR").size(9.0).color(colors.blue));
                    }
                });
            });
            ui.label(RichText::new(skill.description).size(11.5));
            ui.add_space(2.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format_rating_stars(skill.rating))
                        .size(11.0)
                        .color(colors.yellow),
                );
                ui.label(
                    RichText::new(format!("⬇ {}", skill.downloads))
                        .size(11.0)
                        .color(colors.text_dim),
                );
            });
        });
}
