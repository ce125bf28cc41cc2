use crate::dependency_diagram::domain::DependencyMap;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for extracting dependencies from one manifest
pub trait ManifestReader {
    /// Reads and parses a single manifest file
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the `pom.xml` file
    ///
    /// # Returns
    /// Mapping from `"<groupId>:<artifactId>"` to version, in document order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not well-formed XML
    /// - A dependency lacks groupId, artifactId or version
    fn read_dependencies(&self, manifest_path: &Path) -> Result<DependencyMap>;
}
