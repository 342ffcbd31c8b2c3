//! Bridges the pure core to the discovery engine and the prefs store.
//!
//! Effects flow out of `gallery_core::update`; completed discoveries flow
//! back in as messages on the channel the UI drains every frame.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use gallery_core::{DiscoveryRequest, Effect, Msg, ResolvedImage};
use gallery_engine::{DiscoveryPlan, EngineEvent, EngineHandle, ProbeSettings};
use gallery_logging::{gallery_error, gallery_info, gallery_warn};

use crate::prefs::{Prefs, PrefsStore};

/// Executes the effects emitted by the core update function.
pub struct EffectRunner {
    engine: EngineHandle,
    prefs: PrefsStore,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    /// Create the runner and start the background loop that forwards
    /// engine events back to the UI as messages.
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ProbeSettings, prefs: PrefsStore) -> Self {
        let engine = EngineHandle::new(settings);
        spawn_event_loop(engine.clone(), msg_tx.clone());
        Self {
            engine,
            prefs,
            msg_tx,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::StartDiscovery { surface, request } => {
                gallery_info!(
                    "Starting discovery for {:?}: {}/{}[1..{}] extensions {:?}",
                    surface,
                    request.folder,
                    request.stem,
                    request.count,
                    request.extensions
                );
                match to_plan(&request) {
                    Ok(plan) => self.engine.start_discovery(to_engine_surface(surface), plan),
                    Err(err) => {
                        gallery_error!(
                            "Invalid discovery request: {} ({})",
                            err.kind,
                            err.message
                        );
                        // Let the surface fall back instead of staying stuck.
                        let _ = self.msg_tx.send(Msg::DiscoveryComplete {
                            surface,
                            resolved: Vec::new(),
                        });
                    }
                }
            }
            Effect::SavePromoDismissed => {
                self.prefs.save(&Prefs {
                    promo_dismissed: true,
                });
            }
        }
    }
}

fn to_plan(request: &DiscoveryRequest) -> Result<DiscoveryPlan, gallery_engine::ProbeError> {
    DiscoveryPlan::new(
        &request.base_url,
        &request.folder,
        &request.stem,
        request.count,
        request.extensions.clone(),
    )
}

fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        match engine.try_recv() {
            Some(EngineEvent::DiscoveryCompleted { surface, report }) => {
                if report.resolved.is_empty() {
                    gallery_warn!("Discovery found nothing for {:?}, falling back", surface);
                }
                let resolved = report
                    .resolved
                    .into_iter()
                    .map(|hit| ResolvedImage {
                        index: hit.index,
                        url: hit.url.to_string(),
                    })
                    .collect();
                if msg_tx
                    .send(Msg::DiscoveryComplete {
                        surface: to_core_surface(surface),
                        resolved,
                    })
                    .is_err()
                {
                    // UI is gone, stop forwarding.
                    return;
                }
            }
            None => thread::sleep(Duration::from_millis(20)),
        }
    });
}

fn to_engine_surface(surface: gallery_core::Surface) -> gallery_engine::Surface {
    match surface {
        gallery_core::Surface::Grid => gallery_engine::Surface::Grid,
        gallery_core::Surface::Ribbon => gallery_engine::Surface::Ribbon,
    }
}

fn to_core_surface(surface: gallery_engine::Surface) -> gallery_core::Surface {
    match surface {
        gallery_engine::Surface::Grid => gallery_core::Surface::Grid,
        gallery_engine::Surface::Ribbon => gallery_core::Surface::Ribbon,
    }
}
