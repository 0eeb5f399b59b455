//! RSS feed generation.
//!
//! Merges the posts of every syndicated collection, drops undated ones,
//! orders them newest first and serializes an RSS 2.0 channel.

use rss::{Category, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use tracing::debug;

use crate::config::SiteConfig;
use crate::content::{by_date_desc, Post};
use crate::helpers::{absolute_url, post_path};

/// RSS feed generator.
#[derive(Debug, Clone)]
pub struct FeedGenerator {
    title: String,
    description: String,
    fallback_site: Option<String>,
}

impl FeedGenerator {
    /// Create a generator with a channel title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fallback_site: None,
        }
    }

    /// Channel link to use when no site URL is passed to [`build`](Self::build).
    #[must_use]
    pub fn with_fallback_site(mut self, site: Option<String>) -> Self {
        self.fallback_site = site;
        self
    }

    /// Generator using the site title, description and feed fallback site.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.title, &config.description)
            .with_fallback_site(config.feed.fallback_site.clone())
    }

    /// Build the channel for the given collections.
    ///
    /// Without a site URL or fallback the channel link is left empty.
    pub fn build(&self, collections: &[&[Post]], site_url: Option<&str>) -> Channel {
        let site = site_url
            .filter(|s| !s.is_empty())
            .or(self.fallback_site.as_deref())
            .unwrap_or("");

        let posts = feed_posts(collections);
        debug!(count = posts.len(), site, "generating RSS feed");

        let items: Vec<Item> = posts
            .into_iter()
            .map(|post| post_to_item(post, site))
            .collect();

        ChannelBuilder::default()
            .title(self.title.clone())
            .link(site.to_string())
            .description(self.description.clone())
            .items(items)
            .build()
    }

    /// Build the channel and serialize it to XML.
    pub fn render(&self, collections: &[&[Post]], site_url: Option<&str>) -> String {
        self.build(collections, site_url).to_string()
    }
}

/// Posts that belong in the feed: dated ones from every collection,
/// newest first, ties in collection order.
pub fn feed_posts<'a>(collections: &[&'a [Post]]) -> Vec<&'a Post> {
    let mut posts: Vec<&Post> = collections
        .iter()
        .flat_map(|posts| posts.iter())
        .filter(|post| post.is_dated())
        .collect();
    posts.sort_by(|a, b| by_date_desc(a, b));
    posts
}

/// Convert a post to an RSS item.
fn post_to_item(post: &Post, site: &str) -> Item {
    let link = post_path(&post.id);

    let guid = if site.is_empty() {
        GuidBuilder::default()
            .value(link.clone())
            .permalink(false)
            .build()
    } else {
        GuidBuilder::default()
            .value(absolute_url(site, &link))
            .permalink(true)
            .build()
    };

    let categories: Vec<Category> = post
        .data
        .tags
        .iter()
        .map(|tag| Category {
            name: tag.clone(),
            domain: None,
        })
        .collect();

    let mut builder = ItemBuilder::default();
    builder.title(Some(post.data.title.clone()));
    builder.link(Some(link));
    builder.guid(Some(guid));
    builder.description(post.data.description.clone());
    builder.pub_date(post.data.date.map(|date| date.to_rfc2822()));
    builder.content(post.body.clone().filter(|body| !body.is_empty()));
    builder.categories(categories);

    builder.build()
}
