// src/core/fs_ops.rs
//! File system operations for asset discovery and output writing

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::app_log;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(info, "Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write file, creating its parent directory first
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        app_log!(info, "Written file: {}", path.display());
        Ok(())
    }

    /// Files in `dir` whose name contains `extension`, sorted by name
    pub async fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        if !dir.exists() {
            app_log!(warn, "Directory does not exist: {}", dir.display());
            return Ok(files);
        }

        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.contains(extension) {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Resolve a user selection to a file: an index into the listing of `dir`,
    /// an existing path, or a file name inside `dir`.
    pub async fn select_file(dir: &Path, selection: &str, extension: &str) -> Result<PathBuf> {
        if let Ok(index) = selection.parse::<usize>() {
            let files = Self::list_files_with_extension(dir, extension).await?;
            return files.get(index).cloned().with_context(|| {
                format!(
                    "Invalid selection {}: {} has {} {} files",
                    index,
                    dir.display(),
                    files.len(),
                    extension
                )
            });
        }

        let direct = PathBuf::from(selection);
        if direct.is_file() {
            return Ok(direct);
        }

        let in_dir = dir.join(selection);
        if in_dir.is_file() {
            return Ok(in_dir);
        }

        anyhow::bail!(
            "No file named {} (looked in current directory and {})",
            selection,
            dir.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_job.html", "a_job.html", "notes.txt"] {
            std::fs::write(dir.path().join(name), "<body></body>").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.html")).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_list_files_filters_and_sorts() {
        let dir = assets();
        let files = FsOps::list_files_with_extension(dir.path(), ".html").await.unwrap();

        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, ["a_job.html", "b_job.html"]);
    }

    #[tokio::test]
    async fn test_list_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = FsOps::list_files_with_extension(&dir.path().join("nope"), ".html")
            .await
            .unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_select_by_index_and_name() {
        let dir = assets();

        let by_index = FsOps::select_file(dir.path(), "1", ".html").await.unwrap();
        assert_eq!(by_index, dir.path().join("b_job.html"));

        let by_name = FsOps::select_file(dir.path(), "a_job.html", ".html").await.unwrap();
        assert_eq!(by_name, dir.path().join("a_job.html"));

        let by_path = FsOps::select_file(
            Path::new("elsewhere"),
            dir.path().join("notes.txt").to_str().unwrap(),
            ".html",
        )
        .await
        .unwrap();
        assert_eq!(by_path, dir.path().join("notes.txt"));
    }

    #[tokio::test]
    async fn test_select_out_of_range() {
        let dir = assets();
        assert!(FsOps::select_file(dir.path(), "2", ".html").await.is_err());
        assert!(FsOps::select_file(dir.path(), "missing.html", ".html").await.is_err());
    }

    #[tokio::test]
    async fn test_write_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("letter.md");

        FsOps::write_file_safe(&path, "Dear team,").await.unwrap();
        assert_eq!(FsOps::read_file_safe(&path).await.unwrap(), "Dear team,");
    }
}
