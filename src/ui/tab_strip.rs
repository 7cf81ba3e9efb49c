//! Tab strip UI rendering
//!
//! Handles the open-editor tab row above the content area: activation,
//! close buttons, middle-click close, and drag-and-drop reordering. A tab
//! dropped on another lands beside it; a tab dropped on the empty strip
//! tail moves to the end.

use crate::app::AppState;
use crate::presentation::color_mapping;
use eframe::egui;
use egui::RichText;
use rfolio::theme::ThemeColors;

const TAB_HEIGHT: f32 = 32.0;

/// Renders the tab strip and applies its interactions
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_tab_strip(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) {
    let mut activate: Option<String> = None;
    let mut close: Option<String> = None;
    let mut moved: Option<(String, String)> = None;
    let mut to_end: Option<String> = None;

    egui::ScrollArea::horizontal()
        .id_salt("tab_strip")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 1.0;

                for tab in state.tabs.open_tabs() {
                    let active = state.route.is_current(&tab.href);
                    let fill = if active {
                        colors.background
                    } else {
                        colors.topbar_background
                    };

                    let drag_id = egui::Id::new("tab").with(tab.href.as_str());
                    let inner = ui.dnd_drag_source(drag_id, tab.href.clone(), |ui| {
                        egui::Frame::default()
                            .fill(fill)
                            .inner_margin(egui::Margin::symmetric(10, 7))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(color_mapping::file_kind_icon(tab.kind))
                                            .color(color_mapping::file_kind_color(
                                                tab.kind, colors,
                                            )),
                                    );
                                    let title = RichText::new(&tab.title).size(13.0).color(
                                        if active {
                                            colors.text_strong
                                        } else {
                                            colors.text_dim
                                        },
                                    );
                                    let body = ui
                                        .add(egui::Label::new(title).sense(egui::Sense::click()));
                                    let close_button = ui.small_button("✕");
                                    (body, close_button)
                                })
                                .inner
                            })
                            .inner
                    });

                    let (body, close_button) = inner.inner;
                    if body.clicked() {
                        activate = Some(tab.href.clone());
                    }
                    if close_button.clicked() || body.middle_clicked() {
                        close = Some(tab.href.clone());
                    }
                    if active {
                        let top = inner.response.rect;
                        let accent = egui::Rect::from_min_size(
                            top.left_top(),
                            egui::vec2(top.width(), 2.0),
                        );
                        ui.painter().rect_filled(accent, 0.0, colors.blue);
                    }
                    if let Some(dragged) = inner.response.dnd_release_payload::<String>() {
                        if dragged.as_str() != tab.href {
                            moved = Some((dragged.as_ref().clone(), tab.href.clone()));
                        }
                    }
                }

                // Tail drop zone: drags released here move the tab to the end.
                let (_, dropped) =
                    ui.dnd_drop_zone::<String, ()>(egui::Frame::default(), |ui| {
                        ui.allocate_space(egui::vec2(120.0, TAB_HEIGHT));
                    });
                if let Some(href) = dropped {
                    to_end = Some(href.as_ref().clone());
                }
            });
        });

    if let Some(href) = activate {
        state.route.request(href);
    }
    if let Some(href) = close {
        state.tabs.close(&href);
    }
    if let Some((from, to)) = moved {
        state.tabs.move_tab(&from, &to);
    }
    if let Some(href) = to_end {
        state.tabs.move_to_end(&href);
    }
}
