//! The main gallery grid: one clickable tile per collection item.

use eframe::egui;

use gallery_core::{GalleryViewModel, Msg, SurfaceStatus};

const TILE_SIZE: egui::Vec2 = egui::vec2(230.0, 170.0);

pub fn show(ui: &mut egui::Ui, view: &GalleryViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.heading("Our Gallery");

    match view.grid_status {
        SurfaceStatus::Idle | SurfaceStatus::Probing => {
            ui.label("Looking for studio photos…");
            return msgs;
        }
        SurfaceStatus::FellBack => {
            ui.label("Showing a small sample while the full gallery is unavailable.");
        }
        SurfaceStatus::Ready => {}
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for tile in &view.grid {
                ui.vertical(|ui| {
                    ui.set_width(TILE_SIZE.x);
                    let image = egui::Image::from_uri(&tile.image_url)
                        .fit_to_exact_size(TILE_SIZE)
                        .rounding(4.0);
                    if ui.add(egui::ImageButton::new(image)).clicked() {
                        msgs.push(Msg::TileClicked { id: tile.id });
                    }
                    ui.label(egui::RichText::new(&tile.title).strong());
                    ui.label(&tile.description);
                });
            }
        });
    });

    msgs
}
