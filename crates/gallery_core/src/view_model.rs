use crate::SurfaceStatus;

/// Snapshot handed to the platform layer. Rendering it replaces prior
/// content wholesale: one tile per grid entry, one image per ribbon entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryViewModel {
    pub grid: Vec<GalleryTileView>,
    pub ribbon: Vec<String>,
    pub lightbox: Option<LightboxView>,
    pub grid_status: SurfaceStatus,
    pub ribbon_status: SurfaceStatus,
    pub promo_visible: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTileView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub title: String,
    pub description: String,
    pub image_url: String,
}
