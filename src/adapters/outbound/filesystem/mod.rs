/// Filesystem adapters for file I/O operations
mod diagram_writer;
mod manifest_walker;
mod pom_reader;

pub use diagram_writer::FileSystemDiagramWriter;
pub use manifest_walker::WalkDirManifestLocator;
pub use pom_reader::MavenPomReader;
