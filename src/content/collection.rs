//! Named collections of entries
//!
//! Entries reach this crate through an *entries export*: a JSON or YAML
//! document written by the content loader, mapping each collection name
//! to its list of `{ id, body, data }` records.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::schema::POST_SCHEMA;
use super::{ContentError, Post, RawEntry};

/// Serialization of an entries export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            _ => Err(ContentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// One record of an entries export, before validation
#[derive(Debug, Deserialize)]
struct ExportedEntry {
    id: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    data: Value,
}

/// Validated entries grouped by collection, in export order
#[derive(Debug, Clone, Default)]
pub struct Collections {
    entries: IndexMap<String, Vec<RawEntry>>,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a collection
    pub fn insert(&mut self, name: impl Into<String>, entries: Vec<RawEntry>) {
        self.entries.insert(name.into(), entries);
    }

    /// Load an entries export from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Parse an entries export.
    ///
    /// Entries that fail the schema are skipped with a warning.
    pub fn parse(content: &str, format: ExportFormat) -> Result<Self, ContentError> {
        let export: IndexMap<String, Vec<ExportedEntry>> = match format {
            ExportFormat::Json => serde_json::from_str(content)?,
            ExportFormat::Yaml => serde_yaml::from_str(content)?,
        };

        let mut collections = Self::new();
        for (name, exported) in export {
            let total = exported.len();
            let entries: Vec<RawEntry> = exported
                .into_iter()
                .filter_map(|e| {
                    match RawEntry::from_value(&e.id, e.body, &e.data, &POST_SCHEMA) {
                        Ok(entry) => Some(entry),
                        Err(err) => {
                            tracing::warn!("Skipping entry {}/{}: {}", name, e.id, err);
                            None
                        }
                    }
                })
                .collect();

            tracing::debug!(
                "Collection {}: {} of {} entries valid",
                name,
                entries.len(),
                total
            );
            collections.insert(name, entries);
        }

        Ok(collections)
    }

    /// Collection names, in export order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries of a collection; empty if the collection does not exist
    pub fn get(&self, name: &str) -> &[RawEntry] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Normalized posts of a collection, in entry order
    pub fn posts(&self, name: &str) -> Vec<Post> {
        self.get(name).iter().map(Post::from_entry).collect()
    }

    /// Normalized posts of each named collection, one list per name
    pub fn posts_of(&self, names: &[String]) -> Vec<Vec<Post>> {
        names
            .iter()
            .map(|name| {
                if !self.entries.contains_key(name) {
                    tracing::debug!("Collection {} not found in entries export", name);
                }
                self.posts(name)
            })
            .collect()
    }

    /// Total number of entries across all collections
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
