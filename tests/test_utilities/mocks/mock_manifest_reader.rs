use pom_visualizer::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving in-memory pom.xml content through the real parser
#[derive(Default)]
pub struct MockManifestReader {
    pub manifests: HashMap<PathBuf, String>,
    parser: MavenPomParser,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.manifests.insert(path.into(), content.to_string());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_dependencies(&self, manifest_path: &Path) -> Result<DependencyMap> {
        match self.manifests.get(manifest_path) {
            Some(content) => self.parser.parse(content, manifest_path),
            None => anyhow::bail!("Mock manifest not found: {}", manifest_path.display()),
        }
    }
}
