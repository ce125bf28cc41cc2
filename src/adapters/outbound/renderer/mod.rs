/// Renderer adapters invoking external diagram tools
mod plantuml_jar_renderer;

pub use plantuml_jar_renderer::{PlantUmlJarRenderer, DEFAULT_JAVA_COMMAND};
