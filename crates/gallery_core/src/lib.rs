//! Gallery core: pure state machine, collection builders and view-model helpers.
mod collection;
mod config;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use collection::{
    build_grid_items, build_ribbon, fallback_items, fallback_urls, GalleryItem, ResolvedImage,
    GRID_CATEGORY, GRID_DESCRIPTION,
};
pub use config::{GalleryConfig, SurfaceSpec};
pub use effect::{DiscoveryRequest, Effect, Surface};
pub use msg::Msg;
pub use state::{GalleryState, SurfaceStatus};
pub use update::update;
pub use view_model::{GalleryTileView, GalleryViewModel, LightboxView};
