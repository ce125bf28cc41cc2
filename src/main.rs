mod adapters;
mod application;
mod cli;
mod config;
mod dependency_diagram;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    FileSystemDiagramWriter, MavenPomReader, WalkDirManifestLocator,
};
use adapters::outbound::parsers::MavenPomParser;
use adapters::outbound::renderer::PlantUmlJarRenderer;
use application::dto::VisualizeRequest;
use application::use_cases::VisualizeDependenciesUseCase;
use cli::Args;
use config::load_config_from_path;
use shared::error::{ExitCode, VisualizerError};
use shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with 2 on usage errors)
    let args = Args::parse_args();

    // Load configuration
    let config = load_config_from_path(Path::new(&args.config))?;

    let package_path = config.package_path();
    validate_package_path(&package_path)?;

    // Create adapters (Dependency Injection)
    let manifest_locator = WalkDirManifestLocator::new();
    let manifest_reader =
        MavenPomReader::with_parser(MavenPomParser::with_namespace(args.pom_namespace));
    let diagram_writer = FileSystemDiagramWriter::new();
    let diagram_renderer =
        PlantUmlJarRenderer::new(config.visualizer_path()).with_java_command(args.java);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = VisualizeDependenciesUseCase::new(
        manifest_locator,
        manifest_reader,
        diagram_writer,
        diagram_renderer,
        progress_reporter,
    );

    // Create request
    let mut request = VisualizeRequest::new(package_path, config.output_path());
    if args.no_render {
        request = request.without_rendering();
    }

    // Execute use case
    use_case.execute(request)?;

    println!(
        "Dependency graph successfully created: {}",
        config.output_path
    );

    Ok(())
}

fn validate_package_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(VisualizerError::InvalidPackagePath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    std::fs::metadata(path).map_err(|e| VisualizerError::InvalidPackagePath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if !path.is_dir() {
        return Err(VisualizerError::InvalidPackagePath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_package_path_accepts_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_package_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_package_path_missing() {
        let result = validate_package_path(Path::new("/nonexistent/project"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
        assert_eq!(ExitCode::from_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_validate_package_path_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("pom.xml");
        fs::write(&file, "<project/>").unwrap();

        let result = validate_package_path(&file);
        assert!(result.unwrap_err().to_string().contains("Not a directory"));
    }
}
