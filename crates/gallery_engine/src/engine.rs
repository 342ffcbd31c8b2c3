use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use gallery_logging::gallery_warn;

use crate::discover::discover;
use crate::probe::{Probe, ProbeSettings, ReqwestProbe};
use crate::{DiscoveryPlan, DiscoveryReport, EngineEvent, Surface};

enum EngineCommand {
    StartDiscovery { surface: Surface, plan: DiscoveryPlan },
}

/// Handle to the discovery worker thread.
///
/// Commands are fire-and-forget; once a discovery starts it cannot be
/// aborted. Events are polled with [`EngineHandle::try_recv`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ProbeSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let probe = Arc::new(ReqwestProbe::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let probe = probe.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(probe.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn start_discovery(&self, surface: Surface, plan: DiscoveryPlan) {
        let _ = self.cmd_tx.send(EngineCommand::StartDiscovery { surface, plan });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    probe: &dyn Probe,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::StartDiscovery { surface, plan } => {
            let report = match discover(probe, &plan).await {
                Ok(report) => report,
                Err(err) => {
                    // A plan that cannot be expanded behaves like a run
                    // where nothing resolved; the core falls back.
                    gallery_warn!(
                        "discovery for {:?} could not expand its plan: {} ({})",
                        surface,
                        err.kind,
                        err.message
                    );
                    DiscoveryReport {
                        resolved: Vec::new(),
                        probes_settled: 0,
                        probes_failed: 0,
                    }
                }
            };
            let _ = event_tx.send(EngineEvent::DiscoveryCompleted { surface, report });
        }
    }
}
