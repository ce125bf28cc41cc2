use crate::dependency_diagram::domain::PlantUmlDiagram;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DiagramWriter port for persisting a diagram description
pub trait DiagramWriter {
    /// Writes the diagram next to `output_path`, with the `.puml` extension
    ///
    /// # Returns
    /// The path of the written diagram file
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn write_diagram(&self, diagram: &PlantUmlDiagram, output_path: &Path) -> Result<PathBuf>;
}
