//! Bottom status line summarising discovery progress per surface.

use eframe::egui;

use gallery_core::{GalleryViewModel, SurfaceStatus};

pub fn show(ui: &mut egui::Ui, view: &GalleryViewModel) {
    ui.horizontal(|ui| {
        ui.label(format!(
            "Gallery: {}",
            surface_text(view.grid_status, view.grid.len())
        ));
        ui.separator();
        ui.label(format!(
            "Ribbon: {}",
            surface_text(view.ribbon_status, view.ribbon.len())
        ));
    });
}

fn surface_text(status: SurfaceStatus, entries: usize) -> String {
    match status {
        SurfaceStatus::Idle => "idle".to_string(),
        SurfaceStatus::Probing => "probing…".to_string(),
        SurfaceStatus::Ready => format!("{entries} images"),
        SurfaceStatus::FellBack => format!("fallback ({entries} images)"),
    }
}
