use pom_visualizer::prelude::*;
use std::path::{Path, PathBuf};

/// Mock ManifestLocator returning a fixed list of manifest paths
pub struct MockManifestLocator {
    pub manifests: Vec<PathBuf>,
    pub should_fail: bool,
}

impl MockManifestLocator {
    pub fn new(manifests: Vec<PathBuf>) -> Self {
        Self {
            manifests,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            manifests: Vec::new(),
            should_fail: true,
        }
    }
}

impl ManifestLocator for MockManifestLocator {
    fn locate_manifests(&self, _root: &Path) -> Result<Vec<PathBuf>> {
        if self.should_fail {
            anyhow::bail!("Mock directory walk failure");
        }
        Ok(self.manifests.clone())
    }
}
