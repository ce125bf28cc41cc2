use crate::ports::outbound::DiagramRenderer;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Program used to launch the PlantUML jar unless overridden
pub const DEFAULT_JAVA_COMMAND: &str = "java";

/// PlantUmlJarRenderer adapter running `java -jar plantuml.jar`
///
/// The child inherits stdout and stderr, so PlantUML's own diagnostics reach
/// the user directly. A non-zero exit status is reported as `RendererFailed`.
pub struct PlantUmlJarRenderer {
    java_command: String,
    jar_path: PathBuf,
}

impl PlantUmlJarRenderer {
    pub fn new(jar_path: impl Into<PathBuf>) -> Self {
        Self {
            java_command: DEFAULT_JAVA_COMMAND.to_string(),
            jar_path: jar_path.into(),
        }
    }

    pub fn with_java_command(mut self, java_command: impl Into<String>) -> Self {
        self.java_command = java_command.into();
        self
    }

    #[allow(dead_code)]
    pub fn java_command(&self) -> &str {
        &self.java_command
    }

    #[allow(dead_code)]
    pub fn jar_path(&self) -> &Path {
        &self.jar_path
    }

    fn build_command(&self, diagram_path: &Path, output_dir: &Path) -> Command {
        let mut command = Command::new(&self.java_command);
        command
            .arg("-jar")
            .arg(&self.jar_path)
            .arg(diagram_path)
            .arg("-o")
            .arg(output_dir)
            .stdin(Stdio::null());
        command
    }
}

impl DiagramRenderer for PlantUmlJarRenderer {
    fn render(&self, diagram_path: &Path, output_path: &Path) -> Result<()> {
        let output_dir = output_directory_for(output_path)?;
        let status = self
            .build_command(diagram_path, &output_dir)
            .status()
            .map_err(|e| VisualizerError::RendererLaunchError {
                program: self.java_command.clone(),
                details: e.to_string(),
            })?;

        if !status.success() {
            return Err(VisualizerError::RendererFailed {
                status: status.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Directory the renderer should write the image into
///
/// PlantUML resolves a relative `-o` against the diagram file's directory,
/// so the parent of `output_path` is made absolute here.
pub fn output_directory_for(output_path: &Path) -> Result<PathBuf> {
    let parent = match output_path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };

    std::path::absolute(parent).map_err(|e| {
        VisualizerError::FileWriteError {
            path: parent.to_path_buf(),
            details: format!("Failed to resolve output directory: {}", e),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_arguments() {
        let renderer = PlantUmlJarRenderer::new("/opt/plantuml.jar");
        let command = renderer.build_command(Path::new("/out/graph.puml"), Path::new("/out"));

        assert_eq!(command.get_program(), "java");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(
            args,
            vec!["-jar", "/opt/plantuml.jar", "/out/graph.puml", "-o", "/out"]
        );
    }

    #[test]
    fn test_with_java_command() {
        let renderer =
            PlantUmlJarRenderer::new("plantuml.jar").with_java_command("/usr/lib/jvm/bin/java");
        assert_eq!(renderer.java_command(), "/usr/lib/jvm/bin/java");
        assert_eq!(renderer.jar_path(), Path::new("plantuml.jar"));
    }

    #[test]
    fn test_output_directory_for_nested_path() {
        let dir = output_directory_for(Path::new("/tmp/graphs/deps.png")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/graphs"));
    }

    #[test]
    fn test_output_directory_for_bare_file_name() {
        let dir = output_directory_for(Path::new("deps.png")).unwrap();
        assert!(dir.is_absolute());
        assert_eq!(dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_render_launch_failure() {
        let renderer = PlantUmlJarRenderer::new("plantuml.jar")
            .with_java_command("/nonexistent/bin/java-does-not-exist");
        let result = renderer.render(Path::new("graph.puml"), Path::new("graph.png"));

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VisualizerError>(),
            Some(VisualizerError::RendererLaunchError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_render_success_status() {
        let renderer = PlantUmlJarRenderer::new("plantuml.jar").with_java_command("true");
        assert!(renderer
            .render(Path::new("graph.puml"), Path::new("graph.png"))
            .is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_render_failure_status() {
        let renderer = PlantUmlJarRenderer::new("plantuml.jar").with_java_command("false");
        let err = renderer
            .render(Path::new("graph.puml"), Path::new("graph.png"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VisualizerError>(),
            Some(VisualizerError::RendererFailed { .. })
        ));
    }
}
