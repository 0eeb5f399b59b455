//! tech-guides: post processing and syndication for a markdown tech blog
//!
//! Entries exported by the content loader are validated against the post
//! schema, normalized into posts (read time, public URL), listed newest
//! first with category badges and syndicated as an RSS feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod feed;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{Collections, ListingItem, Post};
use feed::FeedGenerator;

/// The blog: configuration plus the paths derived from it
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Entries export written by the content loader
    pub entries_path: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog with an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let entries_path = base_dir.join(&config.entries);
        let public_dir = base_dir.join(&config.public_dir);

        tracing::debug!(
            "Site {:?} (base {}), highlight themes {}/{}, sitemap={}, tailwind={}",
            config.url,
            config.base,
            config.markdown.themes.light,
            config.markdown.themes.dark,
            config.integrations.sitemap,
            config.integrations.tailwind
        );

        Self {
            config,
            base_dir,
            entries_path,
            public_dir,
        }
    }

    /// Load and validate the entries export
    pub fn load_collections(&self) -> Result<Collections> {
        let collections = Collections::load(&self.entries_path)?;
        tracing::debug!(
            "Loaded {} entries from {:?}",
            collections.len(),
            self.entries_path
        );
        Ok(collections)
    }

    /// Render the RSS feed for the configured collections
    pub fn render_feed(&self, collections: &Collections) -> String {
        let posts = collections.posts_of(&self.config.feed.collections);
        let slices: Vec<&[Post]> = posts.iter().map(Vec::as_slice).collect();

        FeedGenerator::from_config(&self.config).render(&slices, self.config.url.as_deref())
    }

    /// Listing of one collection, or of every collection when `name` is `None`
    pub fn listing(&self, collections: &Collections, name: Option<&str>) -> Vec<ListingItem> {
        let posts: Vec<Post> = match name {
            Some(name) => collections.posts(name),
            None => collections
                .names()
                .flat_map(|name| collections.posts(name))
                .collect(),
        };
        content::listing(posts)
    }

    /// Where `feed` writes the feed file
    pub fn feed_output_path(&self) -> PathBuf {
        self.public_dir
            .join(self.config.feed.path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    pub(crate) const ENTRIES: &str = r#"{
        "linux": [
            { "id": "arch", "body": "Install it", "data": { "title": "Arch", "date": "2024-01-10", "category": "terminal" } },
            { "id": "someday", "data": { "title": "Someday" } }
        ],
        "web": [
            { "id": "grid", "body": "Grid it", "data": { "title": "Grid", "date": "2024-03-01", "category": "web-dev", "tags": ["css"] } }
        ],
        "notes": [
            { "id": "scratch", "data": { "title": "Scratch", "date": "2025-01-01" } }
        ]
    }"#;

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.entries_path, dir.path().join("entries.json"));
        assert_eq!(blog.feed_output_path(), dir.path().join("dist/rss.xml"));
    }

    #[test]
    fn test_new_with_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "entries: export/entries.yml\npublic_dir: public\nfeed:\n  path: /feed.xml\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.entries_path, dir.path().join("export/entries.yml"));
        assert_eq!(blog.feed_output_path(), dir.path().join("public/feed.xml"));
    }

    #[test]
    fn test_render_feed_uses_configured_collections() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("entries.json"), ENTRIES).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let collections = blog.load_collections().unwrap();
        let xml = blog.render_feed(&collections);

        assert!(xml.contains("<link>https://blog.chenxing-dev</link>"));
        let grid = xml.find("<link>/grid</link>").unwrap();
        let arch = xml.find("<link>/arch</link>").unwrap();
        assert!(grid < arch);
        assert!(!xml.contains("/someday"));
        assert!(!xml.contains("/scratch"));
    }

    #[test]
    fn test_listing() {
        let blog = Blog::with_config(".", config::SiteConfig::default());
        let collections =
            Collections::parse(ENTRIES, content::ExportFormat::Json).unwrap();

        let all: Vec<_> = blog
            .listing(&collections, None)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(all, vec!["scratch", "grid", "arch"]);

        let linux = blog.listing(&collections, Some("linux"));
        assert_eq!(linux.len(), 1);
        assert_eq!(linux[0].badge.icon, ">");
    }
}
