//! The auto-scrolling image ribbon across the top of the window.

use eframe::egui;

use gallery_core::{GalleryViewModel, SurfaceStatus};

pub const PANEL_HEIGHT: f32 = 112.0;
const TILE_SIZE: egui::Vec2 = egui::vec2(150.0, 96.0);
const SCROLL_SPEED: f32 = 40.0;

/// Renders the ribbon and returns the scroll offset for the next frame.
///
/// The offset advances at a fixed speed and wraps at the content width, so
/// the strip loops forever. The entry sequence itself already guarantees no
/// image repeats back to back.
pub fn show(ui: &mut egui::Ui, view: &GalleryViewModel, offset: f32) -> f32 {
    if view.ribbon.is_empty() {
        if view.ribbon_status == SurfaceStatus::Probing {
            ui.centered_and_justified(|ui| {
                ui.label("Looking for studio photos…");
            });
        }
        return 0.0;
    }

    let spacing = ui.spacing().item_spacing.x;
    let content_width = view.ribbon.len() as f32 * (TILE_SIZE.x + spacing);
    let dt = ui.input(|i| i.stable_dt).min(0.1);
    let next = (offset + SCROLL_SPEED * dt) % content_width;

    egui::ScrollArea::horizontal()
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .scroll_offset(egui::vec2(next, 0.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for url in &view.ribbon {
                    ui.add(
                        egui::Image::from_uri(url)
                            .fit_to_exact_size(TILE_SIZE)
                            .rounding(6.0),
                    );
                }
            });
        });

    next
}
