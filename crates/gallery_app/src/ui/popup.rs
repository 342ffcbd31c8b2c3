//! Promotional popup, shown once per user until dismissed.

use eframe::egui;

use gallery_core::{GalleryViewModel, Msg};

pub fn show(ctx: &egui::Context, view: &GalleryViewModel) -> Vec<Msg> {
    if !view.promo_visible {
        return Vec::new();
    }
    let mut msgs = Vec::new();

    egui::Window::new("Grand Opening Special")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("20% off all gel manicures this month.");
            ui.label("Mention this offer when you book.");
            ui.add_space(8.0);
            if ui.button("No thanks").clicked() {
                msgs.push(Msg::PromoDismissed);
            }
        });

    msgs
}
