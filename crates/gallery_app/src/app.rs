//! The egui application shell.
//!
//! Owns the pure [`GalleryState`], drains the message channel each frame,
//! runs the update function and hands the resulting effects to the
//! [`EffectRunner`]. The cached view model is rebuilt only when the state
//! reports itself dirty.

use std::sync::mpsc;
use std::time::Duration;

use eframe::egui;

use gallery_core::{update, GalleryConfig, GalleryState, GalleryViewModel, Msg};
use gallery_engine::ProbeSettings;

use crate::effects::EffectRunner;
use crate::prefs::{Prefs, PrefsStore};
use crate::ui;

pub struct GalleryApp {
    state: GalleryState,
    view: GalleryViewModel,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
    ribbon_offset: f32,
}

impl GalleryApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: GalleryConfig,
        prefs: Prefs,
        prefs_store: PrefsStore,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(msg_tx, ProbeSettings::default(), prefs_store);

        let mut app = Self {
            state: GalleryState::new(config, rand::random()),
            view: GalleryViewModel::default(),
            msg_rx,
            runner,
            ribbon_offset: 0.0,
        };
        app.dispatch(Msg::PageLoaded {
            promo_dismissed: prefs.promo_dismissed,
        });
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn drain_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_messages();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dispatch(Msg::EscapePressed);
        }

        let mut msgs = Vec::new();

        egui::TopBottomPanel::top("ribbon")
            .exact_height(ui::ribbon::PANEL_HEIGHT)
            .show(ctx, |panel| {
                self.ribbon_offset = ui::ribbon::show(panel, &self.view, self.ribbon_offset);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |panel| {
            ui::status::show(panel, &self.view);
        });

        egui::CentralPanel::default().show(ctx, |panel| {
            msgs.extend(ui::grid::show(panel, &self.view));
        });

        msgs.extend(ui::lightbox::show(ctx, &self.view));
        msgs.extend(ui::popup::show(ctx, &self.view));

        for msg in msgs {
            self.dispatch(msg);
        }

        // The ribbon scrolls continuously.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
