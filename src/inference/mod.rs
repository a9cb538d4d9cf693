// src/inference/mod.rs
//! Text generation backends.
//!
//! The rest of the crate only sees [`TextGenerator`]; [`InferenceClient`] talks
//! to a local completion server hosting a quantized model.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app_log;

pub mod settings;

pub use settings::GenerationSettings;

const COMPLETION_ENDPOINT: &str = "/completion";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    n_predict: u32,
    repeat_penalty: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
    #[serde(default)]
    tokens_predicted: Option<u64>,
}

pub struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
    settings: GenerationSettings,
}

impl InferenceClient {
    pub fn new(base_url: &str, timeout_seconds: u64, settings: GenerationSettings) -> Result<Self> {
        settings.validate()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            settings,
        })
    }

    fn completion_url(&self) -> String {
        format!("{}{}", self.base_url, COMPLETION_ENDPOINT)
    }

    fn request<'a>(&self, prompt: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            prompt,
            n_predict: self.settings.max_new_tokens,
            repeat_penalty: self.settings.repetition_penalty,
            stream: false,
        }
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.completion_url();
        app_log!(
            info,
            "Requesting completion from {} (max_new_tokens={}, repetition_penalty={})",
            url,
            self.settings.max_new_tokens,
            self.settings.repetition_penalty
        );

        let response = self
            .client
            .post(&url)
            .json(&self.request(prompt))
            .send()
            .await
            .with_context(|| format!("Failed to reach inference server at {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            app_log!(error, "Inference server error {}: {}", status, error_text);
            anyhow::bail!("Inference server returned error {}: {}", status, error_text);
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        if completion.content.trim().is_empty() {
            anyhow::bail!("Inference server returned an empty completion");
        }

        if let Some(tokens) = completion.tokens_predicted {
            app_log!(debug, "Completion used {} tokens", tokens);
        }
        Ok(completion.content)
    }
}
