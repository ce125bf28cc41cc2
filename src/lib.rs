//! pom-visualizer - Dependency diagrams for Maven projects
//!
//! This library walks a project tree for `pom.xml` files, collects the
//! declared dependency coordinates into one flat map, and writes a PlantUML
//! diagram that an external `plantuml.jar` turns into an image. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_diagram`): Coordinates, the dependency map and diagram text
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): Loading and validating the config file
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pom_visualizer::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let use_case = VisualizeDependenciesUseCase::new(
//!     WalkDirManifestLocator::new(),
//!     MavenPomReader::new(),
//!     FileSystemDiagramWriter::new(),
//!     PlantUmlJarRenderer::new("/opt/plantuml/plantuml.jar"),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = VisualizeRequest::new(
//!     PathBuf::from("./my-project"),
//!     PathBuf::from("./out/dependencies.png"),
//! );
//! let response = use_case.execute(request)?;
//! println!("{}", response.diagram_path.display());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_diagram;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDiagramWriter, MavenPomReader, WalkDirManifestLocator,
    };
    pub use crate::adapters::outbound::parsers::{MavenPomParser, MAVEN_POM_NAMESPACE};
    pub use crate::adapters::outbound::renderer::PlantUmlJarRenderer;
    pub use crate::application::dto::{VisualizeRequest, VisualizeResponse};
    pub use crate::application::use_cases::{DependencyCollector, VisualizeDependenciesUseCase};
    pub use crate::config::{load_config_from_path, AppConfig};
    pub use crate::dependency_diagram::domain::{
        diagram_path_for, Coordinate, DependencyMap, PlantUmlDiagram,
    };
    pub use crate::dependency_diagram::services::DiagramGenerator;
    pub use crate::ports::outbound::{
        DiagramRenderer, DiagramWriter, ManifestLocator, ManifestReader, ProgressReporter,
    };
    pub use crate::shared::Result;
}
