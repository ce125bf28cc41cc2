use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ManifestLocator port for discovering manifest files
///
/// This port abstracts the directory walk that finds every `pom.xml`
/// below a package root.
pub trait ManifestLocator {
    /// Lists manifest files under `root`, in traversal order
    ///
    /// # Errors
    /// Returns an error if any directory below `root` cannot be read
    fn locate_manifests(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
