//! Maven POM parser with default-namespace support.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::dependency_diagram::domain::{Coordinate, DependencyMap};
use crate::shared::error::VisualizerError;
use crate::shared::Result;

/// Default namespace of Maven 4.0.0 POM files.
pub const MAVEN_POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

const DEPENDENCY_TAG: &[u8] = b"dependency";

const TRAILING_ELEMENT: &str = "unexpected element after the document root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    GroupId,
    ArtifactId,
    Version,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"groupId" => Some(Field::GroupId),
            b"artifactId" => Some(Field::ArtifactId),
            b"version" => Some(Field::Version),
            _ => None,
        }
    }
}

/// A `<dependency>` element collected while streaming through the document.
#[derive(Debug, Default)]
struct PendingDependency {
    depth: usize,
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl PendingDependency {
    fn at_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::GroupId => &mut self.group_id,
            Field::ArtifactId => &mut self.artifact_id,
            Field::Version => &mut self.version,
        }
    }
}

/// Text captured for one direct child of an open dependency.
struct Capture {
    record: usize,
    field: Field,
    depth: usize,
    text: String,
}

/// Extracts `groupId:artifactId -> version` from POM documents.
///
/// Only elements in the configured namespace are considered, so a POM
/// declaring no namespace (or a different one) yields no dependencies.
#[derive(Debug, Clone)]
pub struct MavenPomParser {
    namespace: String,
}

impl MavenPomParser {
    pub fn new() -> Self {
        Self::with_namespace(MAVEN_POM_NAMESPACE)
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    #[allow(dead_code)]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Parses POM content; `path` is only used for error messages.
    ///
    /// Every `<dependency>` at any depth counts, including those under
    /// `dependencyManagement` and plugins. Later duplicates overwrite
    /// earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `ManifestParseError` for malformed XML and
    /// `MissingDependencyField` when a dependency lacks a required child.
    #[allow(dead_code)]
    pub fn parse(&self, content: &str, path: &Path) -> Result<DependencyMap> {
        self.parse_bytes(content.as_bytes(), path)
    }

    /// Parses raw POM bytes, decoding text with the encoding named in the
    /// XML declaration (or BOM), UTF-8 otherwise.
    pub fn parse_bytes(&self, content: &[u8], path: &Path) -> Result<DependencyMap> {
        let records = self.collect_records(content, path)?;

        let mut dependencies = DependencyMap::new();
        for (i, record) in records.into_iter().enumerate() {
            let index = i + 1;
            let group_id = required(record.group_id, path, index, "groupId")?;
            let artifact_id = required(record.artifact_id, path, index, "artifactId")?;
            let version = required(record.version, path, index, "version")?;

            dependencies.insert(Coordinate::new(group_id, artifact_id).key(), version);
        }

        Ok(dependencies)
    }

    fn collect_records(&self, content: &[u8], path: &Path) -> Result<Vec<PendingDependency>> {
        let mut reader = NsReader::from_reader(content);
        let mut buf = Vec::new();

        let mut records: Vec<PendingDependency> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut capture: Option<Capture> = None;
        let mut depth = 0usize;
        let mut seen_root = false;

        loop {
            buf.clear();
            let (resolved, event) = reader
                .read_resolved_event_into(&mut buf)
                .map_err(|e| parse_error(path, e))?;
            let in_namespace = self.is_pom_namespace(&resolved);

            match event {
                Event::Start(e) => {
                    if seen_root && depth == 0 {
                        return Err(parse_error(path, TRAILING_ELEMENT));
                    }
                    depth += 1;
                    seen_root = true;
                    if !in_namespace {
                        continue;
                    }
                    let local = e.local_name();
                    if local.as_ref() == DEPENDENCY_TAG {
                        open.push(records.len());
                        records.push(PendingDependency::at_depth(depth));
                    } else if let Some(field) = Field::from_local_name(local.as_ref()) {
                        if let Some(record) = direct_parent(&records, &open, depth) {
                            if records[record].slot(field).is_none() && capture.is_none() {
                                capture = Some(Capture {
                                    record,
                                    field,
                                    depth,
                                    text: String::new(),
                                });
                            }
                        }
                    }
                }
                Event::Empty(e) => {
                    if seen_root && depth == 0 {
                        return Err(parse_error(path, TRAILING_ELEMENT));
                    }
                    seen_root = true;
                    if !in_namespace {
                        continue;
                    }
                    let local = e.local_name();
                    if local.as_ref() == DEPENDENCY_TAG {
                        records.push(PendingDependency::at_depth(depth + 1));
                    } else if let Some(field) = Field::from_local_name(local.as_ref()) {
                        if let Some(record) = direct_parent(&records, &open, depth + 1) {
                            let slot = records[record].slot(field);
                            if slot.is_none() {
                                *slot = Some(String::new());
                            }
                        }
                    }
                }
                Event::End(_) => {
                    if capture.as_ref().is_some_and(|c| c.depth == depth) {
                        if let Some(current) = capture.take() {
                            *records[current.record].slot(current.field) =
                                Some(current.text.trim().to_string());
                        }
                    }
                    if open
                        .last()
                        .is_some_and(|&record| records[record].depth == depth)
                    {
                        open.pop();
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Text(e) => {
                    if let Some(current) = capture.as_mut().filter(|c| c.depth == depth) {
                        let text = reader
                            .decoder()
                            .decode(&e)
                            .map_err(|err| parse_error(path, err))?;
                        current.text.push_str(&text);
                    }
                }
                Event::GeneralRef(e) => {
                    if let Some(current) = capture.as_mut().filter(|c| c.depth == depth) {
                        let entity = reader
                            .decoder()
                            .decode(&e)
                            .map_err(|err| parse_error(path, err))?;
                        current.text.push_str(&decode_entity(&entity, path)?);
                    }
                }
                Event::CData(e) => {
                    if let Some(current) = capture.as_mut().filter(|c| c.depth == depth) {
                        let text = reader
                            .decoder()
                            .decode(&e)
                            .map_err(|err| parse_error(path, err))?;
                        current.text.push_str(&text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(parse_error(path, "no root element found"));
        }
        if depth != 0 {
            return Err(parse_error(
                path,
                format!("unexpected end of file: {} unclosed element(s)", depth),
            ));
        }

        Ok(records)
    }

    fn is_pom_namespace(&self, resolved: &ResolveResult<'_>) -> bool {
        matches!(resolved, ResolveResult::Bound(Namespace(ns)) if *ns == self.namespace.as_bytes())
    }
}

impl Default for MavenPomParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the open dependency whose direct child sits at `child_depth`.
fn direct_parent(records: &[PendingDependency], open: &[usize], child_depth: usize) -> Option<usize> {
    open.last()
        .copied()
        .filter(|&record| records[record].depth + 1 == child_depth)
}

fn required(value: Option<String>, path: &Path, index: usize, field: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            VisualizerError::MissingDependencyField {
                path: path.to_path_buf(),
                index,
                field,
            }
            .into()
        })
}

/// Decodes a general entity reference body such as `amp` or `#x41`.
fn decode_entity(entity: &str, path: &Path) -> Result<String> {
    if let Some(reference) = entity.strip_prefix('#') {
        let code = match reference.strip_prefix('x').or_else(|| reference.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => reference.parse::<u32>().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or_else(|| parse_error(path, format!("invalid character reference &{};", entity)));
    }

    let resolved = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        _ => return Err(parse_error(path, format!("unknown entity &{};", entity))),
    };
    Ok(resolved.to_string())
}

fn parse_error(path: &Path, details: impl std::fmt::Display) -> anyhow::Error {
    VisualizerError::ManifestParseError {
        path: path.to_path_buf(),
        details: details.to_string(),
    }
    .into()
}
