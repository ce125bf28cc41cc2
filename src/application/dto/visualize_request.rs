use std::path::PathBuf;

/// VisualizeRequest - Request DTO for the dependency visualization use case
#[derive(Debug, Clone)]
pub struct VisualizeRequest {
    /// Root directory searched recursively for pom.xml files
    pub package_path: PathBuf,
    /// Configured image path; the diagram is written next to it as `.puml`
    pub output_path: PathBuf,
    /// Whether to run the external renderer after writing the diagram
    pub render: bool,
}

impl VisualizeRequest {
    pub fn new(package_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            package_path,
            output_path,
            render: true,
        }
    }

    /// Stops after the diagram file is written
    pub fn without_rendering(mut self) -> Self {
        self.render = false;
        self
    }
}
