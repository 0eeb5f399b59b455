//! Raw collection entries, as handed over by the content loader

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::{Component, Path};

use super::schema::{Record, Schema, SchemaError, POST_SCHEMA};
use super::{ContentError, FrontMatter};

/// Validated entry metadata. `readTime` is derived later and not part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryData {
    pub title: String,
    pub description: Option<String>,
    /// Publication date; undated entries never reach feeds or listings
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl EntryData {
    /// Create metadata with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            date: None,
            category: None,
            tags: Vec::new(),
        }
    }

    fn from_record(record: &Record) -> Self {
        Self {
            title: record.text("title").unwrap_or_default().to_string(),
            description: record.text("description").map(str::to_string),
            date: record.date("date"),
            category: record.text("category").map(str::to_string),
            tags: record.list("tags"),
        }
    }
}

/// One entry of a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawEntry {
    /// Stable slug, unique within its collection
    pub id: String,
    /// Markdown body without front-matter
    pub body: Option<String>,
    pub data: EntryData,
}

impl RawEntry {
    pub fn new(id: impl Into<String>, body: Option<String>, data: EntryData) -> Self {
        Self {
            id: id.into(),
            body,
            data,
        }
    }

    /// Build an entry from untyped metadata, validating it first
    pub fn from_value(
        id: impl Into<String>,
        body: Option<String>,
        data: &Value,
        schema: &Schema,
    ) -> Result<Self, SchemaError> {
        let record = schema.validate(data)?;
        Ok(Self::new(id, body, EntryData::from_record(&record)))
    }

    /// Build an entry from a whole markdown document (front-matter + body)
    pub fn from_markdown(id: impl Into<String>, source: &str) -> Result<Self, ContentError> {
        let (fm, body) = FrontMatter::parse(source)?;
        let body = Some(body.to_string()).filter(|b| !b.trim().is_empty());
        Ok(Self::from_value(id, body, &fm.data, &POST_SCHEMA)?)
    }
}

/// Derive an entry id from a file path below a collection root.
///
/// The extension is dropped and each path segment is slugified, so
/// `linux/Arch Install.md` becomes `linux/arch-install`.
pub fn id_from_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = relative.with_extension("");

    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .map(slug::slugify)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_from_markdown() {
        let source = r#"---
title: Hardening SSH
description: Keys only, no passwords
date: 2024-03-02
category: security
tags: [ssh, linux]
---

Disable password login first.
"#;

        let entry = RawEntry::from_markdown("linux/ssh", source).unwrap();
        assert_eq!(entry.id, "linux/ssh");
        assert_eq!(entry.data.title, "Hardening SSH");
        assert_eq!(entry.data.description.as_deref(), Some("Keys only, no passwords"));
        assert_eq!(
            entry.data.date,
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap())
        );
        assert_eq!(entry.data.category.as_deref(), Some("security"));
        assert_eq!(entry.data.tags, vec!["ssh", "linux"]);
        assert_eq!(
            entry.body.as_deref(),
            Some("Disable password login first.\n")
        );
    }

    #[test]
    fn test_from_markdown_without_body() {
        let entry = RawEntry::from_markdown("draft", "---\ntitle: Draft\n---\n\n").unwrap();
        assert_eq!(entry.body, None);
        assert_eq!(entry.data, EntryData::new("Draft"));
    }

    #[test]
    fn test_from_markdown_schema_failure() {
        let err = RawEntry::from_markdown("x", "---\ndate: 2024-01-01\n---\nBody").unwrap_err();
        match err {
            ContentError::Schema(e) => assert_eq!(e.violations[0].field, "title"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_from_value() {
        let data = json!({ "title": "CSS Grid", "category": "web-dev" });
        let entry =
            RawEntry::from_value("web/grid", Some("Body".to_string()), &data, &POST_SCHEMA)
                .unwrap();
        assert_eq!(entry.data.category.as_deref(), Some("web-dev"));
        assert!(entry.data.tags.is_empty());
    }

    #[test]
    fn test_id_from_path() {
        let root = PathBuf::from("/site/content/linux");
        assert_eq!(
            id_from_path(&root, &root.join("arch/Arch Install.md")),
            "arch/arch-install"
        );
        assert_eq!(id_from_path(&root, &root.join("zsh.mdx")), "zsh");
        assert_eq!(
            id_from_path(Path::new("/elsewhere"), Path::new("notes/vim.md")),
            "notes/vim"
        );
    }
}
