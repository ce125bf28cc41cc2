//! Configuration file support for pom-visualizer.
//!
//! A config file names four required values: the PlantUML jar, the package
//! directory to scan, the image output path and the repository URL. XML is
//! the primary format; `.yml`/`.yaml` and `.toml` files are accepted too.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::error::VisualizerError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;

/// Validated configuration, created once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub visualizer_path: String,
    pub package_path: String,
    pub output_path: String,
    /// Loaded for completeness; the pipeline does not contact the repository.
    pub repository_url: String,
}

impl AppConfig {
    pub fn visualizer_path(&self) -> PathBuf {
        PathBuf::from(&self.visualizer_path)
    }

    pub fn package_path(&self) -> PathBuf {
        PathBuf::from(&self.package_path)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_path)
    }
}

/// On-disk schema. Every field is optional here so that a missing value is
/// reported by name instead of as a generic deserialization error.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    visualizer_path: Option<String>,
    package_path: Option<String>,
    output_path: Option<String>,
    repository_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Xml,
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Xml,
        }
    }
}

/// Load config from an explicit path.
///
/// # Errors
///
/// - `ConfigReadError` if the file cannot be read
/// - `ConfigParseError` if the content is malformed
/// - `MissingConfigField` if a required field is absent or empty
pub fn load_config_from_path(path: &Path) -> Result<AppConfig> {
    let content =
        safe_read_to_string(path, "config file").map_err(|e| VisualizerError::ConfigReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let raw = parse_config(&content, ConfigFormat::from_path(path)).map_err(|details| {
        VisualizerError::ConfigParseError {
            path: path.to_path_buf(),
            details,
        }
    })?;

    validate_config(raw, path)
}

fn parse_config(content: &str, format: ConfigFormat) -> std::result::Result<ConfigFile, String> {
    match format {
        ConfigFormat::Xml => quick_xml::de::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Validate the loaded configuration; fields are checked in declaration order.
fn validate_config(raw: ConfigFile, path: &Path) -> Result<AppConfig> {
    let require = |value: Option<String>, field: &'static str| -> Result<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(VisualizerError::MissingConfigField {
                path: path.to_path_buf(),
                field,
            }
            .into()),
        }
    };

    Ok(AppConfig {
        visualizer_path: require(raw.visualizer_path, "visualizer_path")?,
        package_path: require(raw.package_path, "package_path")?,
        output_path: require(raw.output_path, "output_path")?,
        repository_url: require(raw.repository_url, "repository_url")?,
    })
}
