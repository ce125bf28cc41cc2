pub mod coordinate;
pub mod dependency_map;
pub mod plantuml_diagram;

pub use coordinate::Coordinate;
pub use dependency_map::DependencyMap;
pub use plantuml_diagram::{diagram_path_for, PlantUmlDiagram};
