//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // URL
    /// Public site URL, used as the feed's channel link
    pub url: Option<String>,
    /// Base path prefix for every generated URL
    pub base: String,

    // Directory
    /// Entries export written by the content loader
    pub entries: String,
    pub public_dir: String,

    // Writing
    #[serde(default)]
    pub markdown: MarkdownConfig,

    // Extensions
    #[serde(default)]
    pub integrations: IntegrationsConfig,
    #[serde(default)]
    pub feed: FeedConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "陈刑's Tech Guides".to_string(),
            description: "技术指南与笔记".to_string(),

            url: Some("https://blog.chenxing-dev".to_string()),
            base: "/".to_string(),

            entries: "entries.json".to_string(),
            public_dir: "dist".to_string(),

            markdown: MarkdownConfig::default(),

            integrations: IntegrationsConfig::default(),
            feed: FeedConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Markdown rendering options, handed to the renderer untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub themes: HighlightThemes,
}

/// Syntax highlighting themes for light and dark mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightThemes {
    pub light: String,
    pub dark: String,
}

impl Default for HighlightThemes {
    fn default() -> Self {
        Self {
            light: "github-light-high-contrast".to_string(),
            dark: "slack-dark".to_string(),
        }
    }
}

/// Optional site integrations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    pub sitemap: bool,
    pub tailwind: bool,
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            sitemap: false,
            tailwind: true,
        }
    }
}

/// RSS feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Path the feed is published at, relative to the site root
    pub path: String,
    /// Channel link used when `url` is not set
    pub fallback_site: Option<String>,
    /// Collections whose posts are syndicated
    pub collections: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "rss.xml".to_string(),
            fallback_site: Some("https://blog.chenxing-dev/".to_string()),
            collections: vec!["linux".to_string(), "web".to_string()],
        }
    }
}
