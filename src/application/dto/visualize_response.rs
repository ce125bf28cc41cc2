use std::path::PathBuf;

/// VisualizeResponse - Response DTO describing what a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizeResponse {
    /// Path of the written `.puml` diagram description
    pub diagram_path: PathBuf,
    /// Number of manifests that were parsed
    pub manifest_count: usize,
    /// Number of distinct coordinates in the diagram
    pub dependency_count: usize,
    /// Whether the external renderer was invoked
    pub rendered: bool,
}

impl VisualizeResponse {
    pub fn new(
        diagram_path: PathBuf,
        manifest_count: usize,
        dependency_count: usize,
        rendered: bool,
    ) -> Self {
        Self {
            diagram_path,
            manifest_count,
            dependency_count,
            rendered,
        }
    }
}
