use crate::dependency_diagram::domain::plantuml_diagram::{END_MARKER, LAYOUT_HINT, START_MARKER};
use crate::dependency_diagram::domain::{Coordinate, DependencyMap, PlantUmlDiagram};
use crate::shared::Result;

/// DiagramGenerator service for turning dependencies into PlantUML
///
/// This service contains pure business logic with no I/O; writing the
/// result to disk is the job of a `DiagramWriter` adapter.
pub struct DiagramGenerator;

impl DiagramGenerator {
    /// Generates a PlantUML diagram with one edge per dependency
    ///
    /// Edges follow the map's iteration order. Each edge points from a
    /// `group\nartifact\nversion` node to a node named by the artifact alone.
    ///
    /// # Errors
    /// Returns `MalformedCoordinate` if a key is not `"<group>:<artifact>"`.
    pub fn generate(dependencies: &DependencyMap) -> Result<PlantUmlDiagram> {
        let mut content = String::new();
        content.push_str(START_MARKER);
        content.push('\n');
        content.push_str(LAYOUT_HINT);
        content.push('\n');

        for (key, version) in dependencies.iter() {
            let coordinate = Coordinate::parse(key)?;
            content.push_str(&Self::edge_line(&coordinate, version));
            content.push('\n');
        }

        content.push_str(END_MARKER);
        content.push('\n');

        Ok(PlantUmlDiagram::new(content, dependencies.len()))
    }

    /// Formats a single edge; `\n` is emitted literally for PlantUML to break the label
    fn edge_line(coordinate: &Coordinate, version: &str) -> String {
        format!(
            "\"{}\\n{}\\n{}\" --> \"{}\"",
            coordinate.group(),
            coordinate.artifact(),
            version,
            coordinate.artifact()
        )
    }
}
