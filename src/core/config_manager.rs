// src/core/config_manager.rs
//! Unified configuration management: asset paths, inference settings and vocabulary

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::FsOps;
use crate::decompose::Vocabulary;
use crate::inference::GenerationSettings;

pub const CONFIG_PATH_ENV: &str = "COVER_LETTER_CONFIG";
pub const INFERENCE_URL_ENV: &str = "INFERENCE_API_URL";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigManager {
    pub paths: PathsConfig,
    pub inference: InferenceConfig,
    pub vocabulary: Vocabulary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub jobs_dir: PathBuf,
    pub resumes_dir: PathBuf,
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    #[serde(flatten)]
    pub generation: GenerationSettings,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            jobs_dir: PathBuf::from("assets/jobs"),
            resumes_dir: PathBuf::from("assets/resumes"),
            output_file: PathBuf::from("output/cover-letter.md"),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_seconds: 600,
            generation: GenerationSettings::default(),
        }
    }
}

impl ConfigManager {
    /// Config file location, from `COVER_LETTER_CONFIG` or `./config.yaml`
    pub fn config_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        Self::load_with_env(&Self::config_path())
    }

    /// Load `path`, then apply environment overrides
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let mut config = Self::load_from(path)?;

        if let Ok(url) = std::env::var(INFERENCE_URL_ENV) {
            app_log!(debug, "Inference URL overridden by {}", INFERENCE_URL_ENV);
            config.inference.base_url = url;
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            app_log!(
                info,
                "No configuration at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.inference.generation.validate()?;
        if config.vocabulary.is_empty() {
            app_log!(warn, "Vocabulary is empty, no skills will be detected in resumes");
        }
        app_log!(info, "Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize configuration")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        app_log!(info, "Saved configuration to {}", path.display());
        Ok(())
    }

    /// Ensure the asset directories and the output file's directory exist
    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.paths.jobs_dir).await?;
        FsOps::ensure_dir_exists(&self.paths.resumes_dir).await?;

        if let Some(parent) = self.paths.output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            FsOps::ensure_dir_exists(parent).await?;
        }

        Ok(())
    }
}
