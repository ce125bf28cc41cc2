use crate::ports::outbound::ManifestLocator;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Conventional file name of a Maven manifest
pub const MANIFEST_FILE_NAME: &str = "pom.xml";

/// WalkDirManifestLocator adapter for finding manifests recursively
///
/// Within each directory, files are visited before subdirectories and
/// both are sorted by name, so a parent `pom.xml` always comes before the
/// manifests of its modules. Symbolic links are never followed, but a link
/// named like a manifest is still returned.
pub struct WalkDirManifestLocator {
    file_name: String,
}

impl WalkDirManifestLocator {
    pub fn new() -> Self {
        Self::with_file_name(MANIFEST_FILE_NAME)
    }

    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
        a.file_type()
            .is_dir()
            .cmp(&b.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    }
}

impl Default for WalkDirManifestLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestLocator for WalkDirManifestLocator {
    fn locate_manifests(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut manifests = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by(Self::files_before_directories)
        {
            let entry = entry.map_err(|e| VisualizerError::DirectoryWalkError {
                path: e.path().unwrap_or(root).to_path_buf(),
                details: e.to_string(),
            })?;

            // Symlinked manifests are kept so the reader can reject them
            let candidate = entry.file_type().is_file() || entry.path_is_symlink();
            if candidate && entry.file_name() == self.file_name.as_str() {
                manifests.push(entry.into_path());
            }
        }

        Ok(manifests)
    }
}
