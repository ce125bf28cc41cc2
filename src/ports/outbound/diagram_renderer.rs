use crate::shared::Result;
use std::path::Path;

/// DiagramRenderer port for turning a diagram description into an image
///
/// The image file name is chosen by the renderer, not by this tool.
pub trait DiagramRenderer {
    /// Renders `diagram_path`, blocking until done
    ///
    /// # Arguments
    /// * `diagram_path` - The `.puml` file to render
    /// * `output_path` - The configured image path; only its directory is used
    ///
    /// # Errors
    /// Returns an error if the renderer cannot be launched or reports failure
    fn render(&self, diagram_path: &Path, output_path: &Path) -> Result<()>;
}
