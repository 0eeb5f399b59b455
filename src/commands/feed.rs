//! Write the RSS feed

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::Blog;

/// Render the feed and write it to `output`, the configured feed path, or stdout
pub fn run(blog: &Blog, output: Option<&Path>, stdout: bool) -> Result<()> {
    let start = std::time::Instant::now();

    let collections = blog.load_collections()?;
    let xml = blog.render_feed(&collections);

    if stdout {
        std::io::stdout().write_all(xml.as_bytes())?;
        return Ok(());
    }

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| blog.feed_output_path());
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, xml)?;

    tracing::info!(
        "Generated {:?} in {:.2}s",
        output_path,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_feed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("entries.json"), crate::tests::ENTRIES).unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        run(&blog, None, false).unwrap();

        let xml = fs::read_to_string(dir.path().join("dist/rss.xml")).unwrap();
        assert!(xml.contains("<link>/grid</link>"));
    }

    #[test]
    fn test_writes_to_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("entries.json"), crate::tests::ENTRIES).unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let output = dir.path().join("out/feed.xml");

        run(&blog, Some(&output), false).unwrap();

        assert!(output.exists());
        assert!(!blog.feed_output_path().exists());
    }

    #[test]
    fn test_missing_export_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, None, false).is_err());
    }
}
