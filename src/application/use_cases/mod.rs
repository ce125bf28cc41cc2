/// Use cases module containing application business logic orchestration
mod collect_dependencies;
mod visualize_dependencies;

pub use collect_dependencies::{CollectedDependencies, DependencyCollector};
pub use visualize_dependencies::VisualizeDependenciesUseCase;
