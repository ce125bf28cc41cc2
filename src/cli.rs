use clap::Parser;

use crate::adapters::outbound::parsers::MAVEN_POM_NAMESPACE;
use crate::adapters::outbound::renderer::DEFAULT_JAVA_COMMAND;

/// Visualize Maven pom.xml dependencies as a PlantUML diagram
#[derive(Parser, Debug)]
#[command(name = "pom-visualizer")]
#[command(version = "0.1.0")]
#[command(about = "Visualize Maven pom.xml dependencies as a PlantUML diagram", long_about = None)]
pub struct Args {
    /// Path to the config file (XML, or .yml/.yaml/.toml)
    #[arg(value_name = "CONFIG")]
    pub config: String,

    /// Java executable used to run the PlantUML jar
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_JAVA_COMMAND)]
    pub java: String,

    /// XML namespace that dependency elements must belong to
    #[arg(long, value_name = "URI", default_value = MAVEN_POM_NAMESPACE)]
    pub pom_namespace: String,

    /// Write the .puml file but skip the renderer
    #[arg(long)]
    pub no_render: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
