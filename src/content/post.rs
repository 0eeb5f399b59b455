//! Post model, normalization and ordering

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

use super::RawEntry;
use crate::helpers::{post_path, read_time};

/// A render-ready blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Slug from the content loader
    pub id: String,

    /// Public path, `/` + id
    pub url: String,

    /// Raw markdown body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    pub data: PostData,
}

/// Post metadata including the derived read time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication date
    pub date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub tags: Vec<String>,

    /// Estimated minutes to read, at least 1
    pub read_time: u32,
}

impl Post {
    /// Build a post from a raw entry, leaving the entry untouched
    pub fn from_entry(entry: &RawEntry) -> Self {
        let read_time = read_time::estimate(entry.body.as_deref().unwrap_or(""));

        Self {
            id: entry.id.clone(),
            url: post_path(&entry.id),
            body: entry.body.clone(),
            data: PostData {
                title: entry.data.title.clone(),
                description: entry.data.description.clone(),
                date: entry.data.date,
                category: entry.data.category.clone(),
                tags: entry.data.tags.clone(),
                read_time,
            },
        }
    }

    /// Whether the post can appear in feeds and date-sorted listings
    pub fn is_dated(&self) -> bool {
        self.data.date.is_some()
    }
}

/// Normalize a raw entry into a post
pub fn normalize(entry: &RawEntry) -> Post {
    Post::from_entry(entry)
}

/// Newest first. Undated posts order after every dated one.
pub fn by_date_desc(a: &Post, b: &Post) -> Ordering {
    b.data.date.cmp(&a.data.date)
}

/// Sort newest first; posts with equal dates keep their input order
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by(by_date_desc);
}
