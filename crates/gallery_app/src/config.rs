//! Gallery configuration loaded from a RON file next to the binary.
//!
//! A missing or malformed file is not an error: the app starts with the
//! built-in defaults and logs what happened.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gallery_core::{GalleryConfig, SurfaceSpec};
use gallery_logging::{gallery_info, gallery_warn};

const CONFIG_FILENAME: &str = "gallery.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSurface {
    folder: String,
    stem: String,
    count: u32,
    extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedConfig {
    base_url: String,
    grid: PersistedSurface,
    ribbon: PersistedSurface,
    ribbon_repetitions: usize,
    promo_enabled: bool,
}

/// Default location of the configuration file: the working directory.
pub fn default_path() -> PathBuf {
    PathBuf::from(".").join(CONFIG_FILENAME)
}

/// Load the gallery configuration, falling back to defaults when the file
/// is absent or cannot be parsed.
pub fn load(path: &Path) -> GalleryConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            gallery_info!("No config at {:?}, using defaults", path);
            return GalleryConfig::default();
        }
        Err(err) => {
            gallery_warn!("Could not read config at {:?}: {}", path, err);
            return GalleryConfig::default();
        }
    };

    match ron::from_str::<PersistedConfig>(&contents) {
        Ok(persisted) => {
            gallery_info!("Loaded config from {:?}", path);
            into_config(persisted)
        }
        Err(err) => {
            gallery_warn!("Malformed config at {:?}: {}", path, err);
            GalleryConfig::default()
        }
    }
}

fn into_config(persisted: PersistedConfig) -> GalleryConfig {
    GalleryConfig {
        base_url: persisted.base_url,
        grid: into_spec(persisted.grid),
        ribbon: into_spec(persisted.ribbon),
        ribbon_repetitions: persisted.ribbon_repetitions,
        promo_enabled: persisted.promo_enabled,
    }
}

fn into_spec(persisted: PersistedSurface) -> SurfaceSpec {
    SurfaceSpec {
        folder: persisted.folder,
        stem: persisted.stem,
        count: persisted.count,
        extensions: persisted.extensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load(&dir.path().join(CONFIG_FILENAME));
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "(this is not valid").expect("write");
        let config = load(&path);
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn well_formed_file_is_parsed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"(
                base_url: "http://salon.test/",
                grid: (folder: "assets/Gallery", stem: "image", count: 3, extensions: ["jpg"]),
                ribbon: (folder: "assets/scroll", stem: "image", count: 5, extensions: ["jpg", "webp"]),
                ribbon_repetitions: 4,
                promo_enabled: true,
            )"#,
        )
        .expect("write");

        let config = load(&path);
        assert_eq!(config.base_url, "http://salon.test/");
        assert_eq!(config.grid.count, 3);
        assert_eq!(config.ribbon.extensions, vec!["jpg", "webp"]);
        assert_eq!(config.ribbon_repetitions, 4);
        assert!(config.promo_enabled);
    }
}
