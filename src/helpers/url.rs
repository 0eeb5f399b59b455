//! URL helper functions

use crate::config::SiteConfig;

/// Public path of a post: `/` followed by its id.
///
/// # Examples
/// ```ignore
/// post_path("linux/arch-install") // -> "/linux/arch-install"
/// ```
pub fn post_path(id: &str) -> String {
    format!("/{}", id.trim_start_matches('/'))
}

/// Prefix a path with the configured base path.
///
/// The result always starts with `/`, even when `base` is written without one.
///
/// # Examples
/// ```ignore
/// url_for(&config, "/linux/arch") // -> "/blog/linux/arch" with base "/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.base.trim_matches('/');
    let path = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", path)
    } else {
        format!("/{}/{}", base, path)
    }
}

/// Join a site URL and a path without doubling the slash between them
///
/// # Examples
/// ```ignore
/// absolute_url("https://example.com/", "/rss.xml") // -> "https://example.com/rss.xml"
/// ```
pub fn absolute_url(site: &str, path: &str) -> String {
    format!(
        "{}/{}",
        site.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
