/// Mock implementations for testing
mod mock_diagram_renderer;
mod mock_manifest_locator;
mod mock_manifest_reader;
mod mock_progress_reporter;

pub use mock_diagram_renderer::MockDiagramRenderer;
pub use mock_manifest_locator::MockManifestLocator;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
