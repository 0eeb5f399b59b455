//! List posts newest first

use anyhow::Result;

use crate::helpers::url_for;
use crate::Blog;

/// Print the date-sorted listing of one collection (or all of them)
pub fn run(blog: &Blog, collection: Option<&str>, json: bool) -> Result<()> {
    let collections = blog.load_collections()?;

    if let Some(name) = collection {
        if !collections.names().any(|n| n == name) {
            anyhow::bail!(
                "Unknown collection: {}. Available: {}",
                name,
                collections.names().collect::<Vec<_>>().join(", ")
            );
        }
    }

    let items = blog.listing(&collections, collection);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("Posts ({}):", items.len());
    for item in items {
        let date = item
            .data
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "  {} {} {} ({} min) [{}]",
            date,
            item.badge.icon,
            item.data.title,
            item.data.read_time,
            url_for(&blog.config, &item.url)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn blog_with_entries() -> (tempfile::TempDir, Blog) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("entries.json"), crate::tests::ENTRIES).unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        (dir, blog)
    }

    #[test]
    fn test_list_all_and_json() {
        let (_dir, blog) = blog_with_entries();
        run(&blog, None, false).unwrap();
        run(&blog, Some("web"), true).unwrap();
    }

    #[test]
    fn test_unknown_collection() {
        let (_dir, blog) = blog_with_entries();
        let err = run(&blog, Some("gardening"), false).unwrap_err();
        assert!(err.to_string().contains("Unknown collection: gardening"));
    }
}
