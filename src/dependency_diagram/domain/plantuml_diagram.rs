use std::path::{Path, PathBuf};

/// File extension of the diagram description handed to the renderer
pub const DIAGRAM_EXTENSION: &str = "puml";

pub const START_MARKER: &str = "@startuml";
pub const END_MARKER: &str = "@enduml";
pub const LAYOUT_HINT: &str = "skinparam linetype ortho";

/// PlantUmlDiagram value object holding a complete diagram description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantUmlDiagram {
    content: String,
    edge_count: usize,
}

impl PlantUmlDiagram {
    pub fn new(content: String, edge_count: usize) -> Self {
        Self {
            content,
            edge_count,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Path of the diagram description for a configured output path
///
/// Keeps the stem and directory, replacing the extension with `.puml`.
pub fn diagram_path_for(output_path: &Path) -> PathBuf {
    output_path.with_extension(DIAGRAM_EXTENSION)
}
