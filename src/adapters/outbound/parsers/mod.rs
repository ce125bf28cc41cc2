/// Manifest format parsers
mod maven_pom_parser;

pub use maven_pom_parser::{MavenPomParser, MAVEN_POM_NAMESPACE};
