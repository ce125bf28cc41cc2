use pom_visualizer::prelude::*;
use pom_visualizer::shared::error::VisualizerError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DiagramRenderer that records calls instead of launching Java
#[derive(Default, Clone)]
pub struct MockDiagramRenderer {
    pub calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    pub should_fail: bool,
}

impl MockDiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DiagramRenderer for MockDiagramRenderer {
    fn render(&self, diagram_path: &Path, output_path: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((diagram_path.to_path_buf(), output_path.to_path_buf()));
        if self.should_fail {
            return Err(VisualizerError::RendererFailed {
                status: "exit status: 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
