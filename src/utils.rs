// src/utils.rs
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Get file extension in lowercase
pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(path: &Path, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(path)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", path.display()))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

/// `output/cover-letter.md` becomes `output/cover-letter_20240101_120000.md`
pub fn timestamped_path(path: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    with_suffix(path, &stamp.to_string())
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cover-letter");
    let file_name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext),
        None => format!("{}_{}", stem, suffix),
    };
    path.with_file_name(file_name)
}
