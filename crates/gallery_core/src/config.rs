/// One probe target folder: numbered files `{stem}{n}.{ext}` for `n` in `1..=count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    pub folder: String,
    pub stem: String,
    pub count: u32,
    /// Candidate extensions, tried in order; the first that resolves wins.
    pub extensions: Vec<String>,
}

impl SurfaceSpec {
    fn new(folder: &str, count: u32) -> Self {
        Self {
            folder: folder.to_string(),
            stem: "image".to_string(),
            count,
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "webp"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Static configuration for both gallery surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub base_url: String,
    pub grid: SurfaceSpec,
    pub ribbon: SurfaceSpec,
    pub ribbon_repetitions: usize,
    pub promo_enabled: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            grid: SurfaceSpec::new("assets/Gallery", 12),
            ribbon: SurfaceSpec::new("assets/scroll", 12),
            ribbon_repetitions: 6,
            promo_enabled: false,
        }
    }
}
