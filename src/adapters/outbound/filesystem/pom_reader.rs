use crate::adapters::outbound::parsers::MavenPomParser;
use crate::dependency_diagram::domain::DependencyMap;
use crate::ports::outbound::ManifestReader;
use crate::shared::security::safe_read_bytes;
use crate::shared::Result;
use std::path::Path;

/// MavenPomReader adapter for reading `pom.xml` files from the file system
///
/// The file is read with the regular-file and size checks from
/// `shared::security` and handed to the parser as raw bytes, so the
/// encoding named in the XML declaration is honored.
pub struct MavenPomReader {
    parser: MavenPomParser,
}

impl MavenPomReader {
    pub fn new() -> Self {
        Self::with_parser(MavenPomParser::new())
    }

    pub fn with_parser(parser: MavenPomParser) -> Self {
        Self { parser }
    }
}

impl Default for MavenPomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for MavenPomReader {
    fn read_dependencies(&self, manifest_path: &Path) -> Result<DependencyMap> {
        let content = safe_read_bytes(manifest_path, "pom.xml")?;
        self.parser.parse_bytes(&content, manifest_path)
    }
}
