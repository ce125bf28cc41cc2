use crate::shared::error::VisualizerError;
use crate::shared::Result;

/// Separator between groupId and artifactId in a coordinate key
pub const COORDINATE_SEPARATOR: char = ':';

/// Coordinate value object identifying a Maven dependency
///
/// A coordinate is the pair (groupId, artifactId), written as
/// `"<group>:<artifact>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group: String,
    artifact: String,
}

impl Coordinate {
    pub fn new(group: String, artifact: String) -> Self {
        Self { group, artifact }
    }

    /// Splits a `"<group>:<artifact>"` key back into its parts
    ///
    /// # Errors
    /// Returns `MalformedCoordinate` unless the key holds exactly one
    /// separator with non-empty text on both sides.
    pub fn parse(key: &str) -> Result<Self> {
        let mut parts = key.split(COORDINATE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(artifact), None) if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(group.to_string(), artifact.to_string()))
            }
            _ => Err(VisualizerError::MalformedCoordinate {
                coordinate: key.to_string(),
            }
            .into()),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// The map key form, `"<group>:<artifact>"`
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.group, COORDINATE_SEPARATOR, self.artifact)
    }
}
