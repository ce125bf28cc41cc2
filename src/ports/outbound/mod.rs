/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, renderer process, console).
pub mod diagram_renderer;
pub mod diagram_writer;
pub mod manifest_locator;
pub mod manifest_reader;
pub mod progress_reporter;

pub use diagram_renderer::DiagramRenderer;
pub use diagram_writer::DiagramWriter;
pub use manifest_locator::ManifestLocator;
pub use manifest_reader::ManifestReader;
pub use progress_reporter::ProgressReporter;
