//! Gallery engine: asynchronous image discovery and effect execution.
mod discover;
mod engine;
mod persist;
mod probe;
mod types;

pub use discover::discover;
pub use engine::EngineHandle;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use probe::{Probe, ProbeSettings, ReqwestProbe};
pub use types::{
    DiscoveryPlan, DiscoveryReport, EngineEvent, FailureKind, ProbeError, ProbeTarget,
    ResolvedHit, Surface,
};
