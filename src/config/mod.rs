//! Configuration module

mod site;

pub use site::FeedConfig;
pub use site::HighlightThemes;
pub use site::IntegrationsConfig;
pub use site::MarkdownConfig;
pub use site::SiteConfig;
