use crate::dependency_diagram::domain::{diagram_path_for, PlantUmlDiagram};
use crate::ports::outbound::DiagramWriter;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemDiagramWriter adapter for writing `.puml` files
///
/// This adapter implements the DiagramWriter port. Existing files are
/// replaced wholesale.
pub struct FileSystemDiagramWriter;

impl FileSystemDiagramWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(diagram_path: &Path) -> Result<()> {
        if let Some(parent) = diagram_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(VisualizerError::FileWriteError {
                    path: diagram_path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing target that is a symbolic link
    fn validate_output_security(diagram_path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(diagram_path) {
            if metadata.is_symlink() {
                return Err(VisualizerError::FileWriteError {
                    path: diagram_path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for FileSystemDiagramWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramWriter for FileSystemDiagramWriter {
    fn write_diagram(&self, diagram: &PlantUmlDiagram, output_path: &Path) -> Result<PathBuf> {
        let diagram_path = diagram_path_for(output_path);

        Self::validate_parent_directory(&diagram_path)?;
        Self::validate_output_security(&diagram_path)?;

        fs::write(&diagram_path, diagram.content()).map_err(|e| {
            VisualizerError::FileWriteError {
                path: diagram_path.clone(),
                details: e.to_string(),
            }
        })?;

        Ok(diagram_path)
    }
}
