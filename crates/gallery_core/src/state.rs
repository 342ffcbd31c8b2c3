use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collection::{self, GalleryItem, ResolvedImage};
use crate::config::GalleryConfig;
use crate::view_model::{GalleryTileView, GalleryViewModel, LightboxView};

/// Lifecycle of one discovery surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceStatus {
    #[default]
    Idle,
    Probing,
    /// Populated from resolved images.
    Ready,
    /// Populated from the built-in fallback collection.
    FellBack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    config: GalleryConfig,
    grid_status: SurfaceStatus,
    ribbon_status: SurfaceStatus,
    grid_items: Vec<GalleryItem>,
    ribbon_entries: Vec<String>,
    /// At most one item is shown at a time; overwritten on each open.
    lightbox: Option<GalleryItem>,
    promo_visible: bool,
    rng_seed: u64,
    dirty: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(GalleryConfig::default(), 0)
    }
}

impl GalleryState {
    pub fn new(config: GalleryConfig, rng_seed: u64) -> Self {
        Self {
            config,
            grid_status: SurfaceStatus::Idle,
            ribbon_status: SurfaceStatus::Idle,
            grid_items: Vec::new(),
            ribbon_entries: Vec::new(),
            lightbox: None,
            promo_visible: false,
            rng_seed,
            dirty: false,
        }
    }

    pub fn view(&self) -> GalleryViewModel {
        GalleryViewModel {
            grid: self
                .grid_items
                .iter()
                .map(|item| GalleryTileView {
                    id: item.id,
                    title: item.title.clone(),
                    description: item.description.clone(),
                    image_url: item.image_url.clone(),
                })
                .collect(),
            ribbon: self.ribbon_entries.clone(),
            lightbox: self.lightbox.as_ref().map(|item| LightboxView {
                title: item.title.clone(),
                description: item.description.clone(),
                image_url: item.image_url.clone(),
            }),
            grid_status: self.grid_status,
            ribbon_status: self.ribbon_status,
            promo_visible: self.promo_visible,
            dirty: self.dirty,
        }
    }

    /// Reports and clears the dirty flag; the platform layer repaints only
    /// when this returns true.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub(crate) fn grid_status(&self) -> SurfaceStatus {
        self.grid_status
    }

    /// Moves both surfaces into `Probing` and decides promo visibility.
    pub(crate) fn begin_page_load(&mut self, promo_dismissed: bool) {
        self.grid_status = SurfaceStatus::Probing;
        self.ribbon_status = SurfaceStatus::Probing;
        self.promo_visible = self.config.promo_enabled && !promo_dismissed;
        self.mark_dirty();
    }

    /// Replaces the grid collection wholesale; prior items never survive.
    pub(crate) fn apply_grid_results(&mut self, resolved: &[ResolvedImage]) {
        if resolved.is_empty() {
            self.grid_items = collection::fallback_items();
            self.grid_status = SurfaceStatus::FellBack;
        } else {
            self.grid_items = collection::build_grid_items(resolved);
            self.grid_status = SurfaceStatus::Ready;
        }
        self.mark_dirty();
    }

    /// Replaces the ribbon sequence wholesale.
    pub(crate) fn apply_ribbon_results(&mut self, resolved: &[ResolvedImage]) {
        let urls: Vec<String> = if resolved.is_empty() {
            collection::fallback_urls()
        } else {
            resolved.iter().map(|image| image.url.clone()).collect()
        };

        let mut rng = StdRng::seed_from_u64(self.rng_seed);
        self.ribbon_entries =
            collection::build_ribbon(&urls, self.config.ribbon_repetitions, &mut rng);
        self.rng_seed = rng.gen();

        self.ribbon_status = if resolved.is_empty() {
            SurfaceStatus::FellBack
        } else {
            SurfaceStatus::Ready
        };
        self.mark_dirty();
    }

    /// Opens the lightbox on the given grid item. Returns false (and leaves
    /// state untouched) when no item carries that id.
    pub(crate) fn open_lightbox(&mut self, id: u32) -> bool {
        match self.grid_items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.lightbox = Some(item.clone());
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Closes the lightbox. Returns false when it was already closed.
    pub(crate) fn close_lightbox(&mut self) -> bool {
        if self.lightbox.is_none() {
            return false;
        }
        self.lightbox = None;
        self.mark_dirty();
        true
    }

    /// Hides the promo popup. Returns false when it was not visible.
    pub(crate) fn dismiss_promo(&mut self) -> bool {
        if !self.promo_visible {
            return false;
        }
        self.promo_visible = false;
        self.mark_dirty();
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
