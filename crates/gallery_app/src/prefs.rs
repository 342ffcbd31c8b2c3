//! Small user-preference store backed by a RON file.
//!
//! The only preference today is whether the promotional popup has been
//! dismissed; once set it survives restarts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use gallery_engine::AtomicFileWriter;
use gallery_logging::{gallery_info, gallery_warn};

const PREFS_FILENAME: &str = "gallery_prefs.ron";

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    pub promo_dismissed: bool,
}

/// Loads and saves [`Prefs`] in a fixed directory.
#[derive(Clone)]
pub struct PrefsStore {
    dir: PathBuf,
}

impl PrefsStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(PREFS_FILENAME)
    }

    /// Read the preferences file. Missing or malformed files yield the
    /// defaults; a malformed file is logged.
    pub fn load(&self) -> Prefs {
        let path = self.path();
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Prefs::default(),
            Err(err) => {
                gallery_warn!("Could not read prefs at {:?}: {}", path, err);
                return Prefs::default();
            }
        };

        match ron::from_str::<Prefs>(&contents) {
            Ok(prefs) => prefs,
            Err(err) => {
                gallery_warn!("Malformed prefs at {:?}: {}", path, err);
                Prefs::default()
            }
        }
    }

    /// Write the preferences atomically. Failures are logged, never fatal.
    pub fn save(&self, prefs: &Prefs) {
        let contents = match ron::ser::to_string_pretty(prefs, ron::ser::PrettyConfig::new()) {
            Ok(contents) => contents,
            Err(err) => {
                gallery_warn!("Could not serialize prefs: {}", err);
                return;
            }
        };

        let writer = AtomicFileWriter::new(self.dir.clone());
        match writer.write(PREFS_FILENAME, &contents) {
            Ok(path) => gallery_info!("Saved prefs to {:?}", path),
            Err(err) => gallery_warn!("Could not save prefs: {}", err),
        }
    }
}
