use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a broken pipeline from a
/// renderer that ran and reported failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - diagram written and rendered
    #[allow(dead_code)]
    Success = 0,
    /// Application error (config, manifest, file I/O, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    #[allow(dead_code)]
    InvalidArguments = 2,
    /// The external renderer exited with a failure status
    RendererFailed = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error from the pipeline to the exit code it should produce
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<VisualizerError>() {
            Some(VisualizerError::RendererFailed { .. }) => ExitCode::RendererFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::RendererFailed => write!(f, "Renderer Failed (3)"),
        }
    }
}

/// Application-specific errors for dependency visualization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-facing messages next to the variants they describe.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file is valid XML, YAML or TOML")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Missing required config field '{field}' in {path}\n\n💡 Hint: The config must define visualizer_path, package_path, output_path and repository_url")]
    MissingConfigField { path: PathBuf, field: &'static str },

    #[error("Invalid package path: {path}\nReason: {reason}\n\n💡 Hint: Set package_path to an existing project directory")]
    InvalidPackagePath { path: PathBuf, reason: String },

    #[error("Failed to walk directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have read permissions for every subdirectory")]
    DirectoryWalkError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse pom.xml file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is well-formed XML")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Dependency #{index} in {path} is missing <{field}>\n\n💡 Hint: Every <dependency> must declare groupId, artifactId and version")]
    MissingDependencyField {
        path: PathBuf,
        index: usize,
        field: &'static str,
    },

    #[error("Malformed dependency coordinate: '{coordinate}'\n\n💡 Hint: Coordinates must have the form <groupId>:<artifactId>")]
    MalformedCoordinate { coordinate: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to launch renderer '{program}'\nDetails: {details}\n\n💡 Hint: Make sure Java is installed and on your PATH")]
    RendererLaunchError { program: String, details: String },

    #[error("Renderer exited with {status}\n\n💡 Hint: Check visualizer_path points at a valid plantuml.jar")]
    RendererFailed { status: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
