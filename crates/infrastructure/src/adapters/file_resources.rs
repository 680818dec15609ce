//! Properties files on disk as configuration resources

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use assay_application::ports::ResourceLoader;
use assay_domain::PropertySource;
use tracing::{debug, error};

/// Default directory holding the `.properties` files.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Loads `.properties` resources from a directory.
///
/// A missing file yields `None` quietly; the resolver decides how loud to
/// be. Unreadable or malformed files are logged at error level and also
/// yield `None`.
#[derive(Debug, Clone)]
pub struct FileResourceLoader {
    root: PathBuf,
}

impl FileResourceLoader {
    /// Creates a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory resources are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FileResourceLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

impl ResourceLoader for FileResourceLoader {
    fn load(&self, name: &str) -> Option<PropertySource> {
        let path = self.root.join(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Configuration resource not present");
                return None;
            }
            Err(e) => {
                error!("Error reading {}: {e}", path.display());
                return None;
            }
        };

        match java_properties::read(BufReader::new(file)) {
            Ok(properties) => {
                debug!(path = %path.display(), count = properties.len(), "Loaded properties");
                Some(PropertySource::new(name, properties))
            }
            Err(e) => {
                error!("Error parsing {}: {e}", path.display());
                None
            }
        }
    }
}
