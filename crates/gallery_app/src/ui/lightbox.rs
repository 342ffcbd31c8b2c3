//! Full-screen lightbox overlay for a single gallery item.
//!
//! Three ways out: the Close button, a click on the dimmed backdrop, or
//! Escape (handled at the app level since it needs no widget).

use eframe::egui;

use gallery_core::{GalleryViewModel, Msg};

pub fn show(ctx: &egui::Context, view: &GalleryViewModel) -> Vec<Msg> {
    let Some(lightbox) = &view.lightbox else {
        return Vec::new();
    };
    let mut msgs = Vec::new();

    let screen = ctx.screen_rect();

    let backdrop = egui::Area::new(egui::Id::new("lightbox_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));
            response
        });
    if backdrop.inner.clicked() {
        msgs.push(Msg::BackdropClicked);
    }

    egui::Area::new(egui::Id::new("lightbox_panel"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| {
                ui.set_max_width(screen.width() * 0.7);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::from_uri(&lightbox.image_url)
                            .max_size(egui::vec2(screen.width() * 0.65, screen.height() * 0.6))
                            .rounding(4.0),
                    );
                    ui.heading(&lightbox.title);
                    ui.label(&lightbox.description);
                    ui.add_space(8.0);
                    if ui.button("Close").clicked() {
                        msgs.push(Msg::LightboxCloseClicked);
                    }
                });
            });
        });

    msgs
}
