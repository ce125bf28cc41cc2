use crate::dependency_diagram::domain::DependencyMap;
use crate::ports::outbound::{ManifestLocator, ManifestReader, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// Result of a collection run: the merged map plus how many files fed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedDependencies {
    pub dependencies: DependencyMap,
    pub manifest_count: usize,
}

/// DependencyCollector - Flat aggregation of dependencies across manifests
///
/// Manifests are merged in the order the locator returns them; a later
/// manifest overwrites the version of any coordinate seen earlier. No
/// resolution or conflict detection is performed.
///
/// # Type Parameters
/// * `ML` - ManifestLocator implementation
/// * `MR` - ManifestReader implementation
pub struct DependencyCollector<ML, MR> {
    manifest_locator: ML,
    manifest_reader: MR,
}

impl<ML, MR> DependencyCollector<ML, MR>
where
    ML: ManifestLocator,
    MR: ManifestReader,
{
    pub fn new(manifest_locator: ML, manifest_reader: MR) -> Self {
        Self {
            manifest_locator,
            manifest_reader,
        }
    }

    /// Walks `root` and merges every manifest found into one map
    ///
    /// # Errors
    /// Any walk or parse error aborts the whole collection; no partial
    /// result is returned.
    pub fn collect<PR: ProgressReporter>(
        &self,
        root: &Path,
        progress_reporter: &PR,
    ) -> Result<CollectedDependencies> {
        let manifests = self.manifest_locator.locate_manifests(root)?;
        let total = manifests.len();

        if total == 0 {
            progress_reporter.report_error(&format!(
                "⚠️  Warning: No pom.xml files found under {}",
                root.display()
            ));
        } else {
            progress_reporter.report(&format!("✅ Found {} manifest(s)", total));
        }

        let mut dependencies = DependencyMap::new();
        for (i, manifest_path) in manifests.iter().enumerate() {
            let display_path = manifest_path
                .strip_prefix(root)
                .unwrap_or(manifest_path)
                .display()
                .to_string();
            progress_reporter.report_progress(i + 1, total, Some(&display_path));

            let parsed = self.manifest_reader.read_dependencies(manifest_path)?;
            dependencies.merge(parsed);
        }

        Ok(CollectedDependencies {
            dependencies,
            manifest_count: total,
        })
    }
}
