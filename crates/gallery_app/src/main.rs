use std::path::PathBuf;

use eframe::egui;

mod app;
mod config;
mod effects;
mod logging;
mod prefs;
mod ui;

fn main() -> Result<(), eframe::Error> {
    logging::initialize(logging::LogDestination::Both);

    let config = config::load(&config::default_path());
    let state_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let prefs_store = prefs::PrefsStore::new(state_dir);
    let prefs = prefs_store.load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salon Gallery",
        options,
        Box::new(move |cc| Ok(Box::new(app::GalleryApp::new(cc, config, prefs, prefs_store)))),
    )
}
