use std::collections::HashMap;

/// DependencyMap aggregate mapping coordinate keys to version strings
///
/// Entries keep the order in which their key was first inserted. Inserting
/// an existing key replaces the version in place, so the last value wins
/// while the original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a coordinate, returning the previous version if any
    pub fn insert(&mut self, coordinate: String, version: String) -> Option<String> {
        if let Some(&position) = self.index.get(&coordinate) {
            return Some(std::mem::replace(&mut self.entries[position].1, version));
        }

        self.index.insert(coordinate.clone(), self.entries.len());
        self.entries.push((coordinate, version));
        None
    }

    /// Merges another map into this one; entries from `other` win on collision
    pub fn merge(&mut self, other: DependencyMap) {
        for (coordinate, version) in other.entries {
            self.insert(coordinate, version);
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, coordinate: &str) -> Option<&str> {
        self.index
            .get(coordinate)
            .map(|&position| self.entries[position].1.as_str())
    }

    #[allow(dead_code)]
    pub fn contains(&self, coordinate: &str) -> bool {
        self.index.contains_key(coordinate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(coordinate, version)| (coordinate.as_str(), version.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (coordinate, version) in iter {
            map.insert(coordinate, version);
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(coordinate, version)| (coordinate.to_string(), version.to_string()))
            .collect()
    }
}
