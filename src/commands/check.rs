//! Validate markdown files against the post schema

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{id_from_path, normalize, RawEntry};

/// Check each file's front-matter and print its id, title and read time.
///
/// Ids are derived relative to `root`, or to each file's own directory.
pub fn run(root: Option<&Path>, files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for path in files {
        match check_file(root, path) {
            Ok(entry) => {
                let post = normalize(&entry);
                if !post.is_dated() {
                    tracing::warn!("{} has no date and is left out of feeds", post.id);
                }
                println!(
                    "  ok    {} - {} ({} min)",
                    post.id, post.data.title, post.data.read_time
                );
            }
            Err(e) => {
                failed += 1;
                println!("  FAIL  {}: {}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed validation", failed, files.len());
    }

    tracing::info!("Checked {} files", files.len());
    Ok(())
}

fn check_file(root: Option<&Path>, path: &Path) -> Result<RawEntry> {
    let source = fs::read_to_string(path)?;
    let root = root.or_else(|| path.parent()).unwrap_or(Path::new(""));
    let entry = RawEntry::from_markdown(id_from_path(root, path), &source)?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_file_derives_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linux").join("Tmux Basics.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "---\ntitle: Tmux basics\ndate: 2024-02-02\n---\nSplit panes.").unwrap();

        let entry = check_file(Some(dir.path()), &path).unwrap();
        assert_eq!(entry.id, "linux/tmux-basics");

        let entry = check_file(None, &path).unwrap();
        assert_eq!(entry.id, "tmux-basics");
    }

    #[test]
    fn test_run_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.md");
        let bad = dir.path().join("bad.md");
        fs::write(&good, "---\ntitle: Good\n---\nBody").unwrap();
        fs::write(&bad, "---\ntitle: \"\"\n---\nBody").unwrap();

        run(None, &[good.clone()]).unwrap();

        let err = run(None, &[good, bad]).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 files failed validation");
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(None, &[dir.path().join("nope.md")]).is_err());
    }
}
