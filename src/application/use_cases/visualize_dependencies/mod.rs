use crate::application::dto::{VisualizeRequest, VisualizeResponse};
use crate::application::use_cases::{CollectedDependencies, DependencyCollector};
use crate::dependency_diagram::domain::DependencyMap;
use crate::dependency_diagram::services::DiagramGenerator;
use crate::ports::outbound::{
    DiagramRenderer, DiagramWriter, ManifestLocator, ManifestReader, ProgressReporter,
};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// VisualizeDependenciesUseCase - Core use case for dependency visualization
///
/// This use case runs the pipeline strictly in order: collect dependencies,
/// generate the diagram, write it, then hand it to the renderer. Any error
/// stops the run at the step where it happened.
///
/// # Type Parameters
/// * `ML` - ManifestLocator implementation
/// * `MR` - ManifestReader implementation
/// * `DW` - DiagramWriter implementation
/// * `DR` - DiagramRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct VisualizeDependenciesUseCase<ML, MR, DW, DR, PR> {
    collector: DependencyCollector<ML, MR>,
    diagram_writer: DW,
    diagram_renderer: DR,
    progress_reporter: PR,
}

impl<ML, MR, DW, DR, PR> VisualizeDependenciesUseCase<ML, MR, DW, DR, PR>
where
    ML: ManifestLocator,
    MR: ManifestReader,
    DW: DiagramWriter,
    DR: DiagramRenderer,
    PR: ProgressReporter,
{
    /// Creates a new VisualizeDependenciesUseCase with injected dependencies
    pub fn new(
        manifest_locator: ML,
        manifest_reader: MR,
        diagram_writer: DW,
        diagram_renderer: DR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            collector: DependencyCollector::new(manifest_locator, manifest_reader),
            diagram_writer,
            diagram_renderer,
            progress_reporter,
        }
    }

    /// Executes the visualization use case
    ///
    /// # Returns
    /// VisualizeResponse with the diagram path and collection statistics
    pub fn execute(&self, request: VisualizeRequest) -> Result<VisualizeResponse> {
        // Step 1: Collect dependencies from every manifest under the package path
        let collected = self.collect_dependencies(&request)?;

        // Step 2: Generate and write the diagram description
        let diagram_path = self.write_diagram(&collected.dependencies, &request.output_path)?;

        // Step 3: Render the image
        let rendered = self.render_if_requested(&request, &diagram_path)?;

        Ok(VisualizeResponse::new(
            diagram_path,
            collected.manifest_count,
            collected.dependencies.len(),
            rendered,
        ))
    }

    fn collect_dependencies(&self, request: &VisualizeRequest) -> Result<CollectedDependencies> {
        self.progress_reporter.report(&format!(
            "📖 Scanning for pom.xml files in: {}",
            request.package_path.display()
        ));

        let collected = self
            .collector
            .collect(&request.package_path, &self.progress_reporter)?;

        self.progress_reporter.report(&format!(
            "✅ Collected {} dependency coordinate(s)",
            collected.dependencies.len()
        ));

        Ok(collected)
    }

    fn write_diagram(&self, dependencies: &DependencyMap, output_path: &Path) -> Result<PathBuf> {
        self.progress_reporter
            .report("📝 Generating PlantUML diagram...");

        let diagram = DiagramGenerator::generate(dependencies)?;
        let diagram_path = self.diagram_writer.write_diagram(&diagram, output_path)?;

        self.progress_reporter.report(&format!(
            "✅ Diagram written: {} ({} edge(s))",
            diagram_path.display(),
            diagram.edge_count()
        ));

        Ok(diagram_path)
    }

    /// Runs the renderer unless the request disabled it
    ///
    /// # Returns
    /// Whether the renderer was invoked
    fn render_if_requested(&self, request: &VisualizeRequest, diagram_path: &Path) -> Result<bool> {
        if !request.render {
            self.progress_reporter
                .report("⏭️  Skipping rendering; diagram description left for manual use");
            return Ok(false);
        }

        self.progress_reporter.report(&format!(
            "🎨 Rendering diagram for: {}",
            request.output_path.display()
        ));

        self.diagram_renderer
            .render(diagram_path, &request.output_path)?;

        self.progress_reporter
            .report_completion("✅ Rendering complete");
        Ok(true)
    }
}
