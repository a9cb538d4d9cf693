// src/pipeline.rs
//! End-to-end cover letter generation: decompose, prompt, generate, save.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::FsOps;
use crate::decompose::{self, Vocabulary};
use crate::inference::TextGenerator;
use crate::prompt::build_prompt;
use crate::types::ApplicantDetails;

/// Decomposed inputs and the prompt built from them.
#[derive(Debug, Clone)]
pub struct PreparedPrompt {
    pub job_json: String,
    pub resume_json: String,
    pub prompt: String,
}

pub struct CoverLetterPipeline<G> {
    generator: G,
    vocabulary: Vocabulary,
}

impl<G: TextGenerator> CoverLetterPipeline<G> {
    pub fn new(generator: G, vocabulary: Vocabulary) -> Self {
        Self {
            generator,
            vocabulary,
        }
    }

    /// Decompose both documents and build the prompt, failing when either
    /// document yields nothing.
    pub fn prepare(
        &self,
        job_html: &str,
        resume_html: &str,
        details: &ApplicantDetails,
    ) -> Result<PreparedPrompt> {
        details.validate()?;

        let job_json = decompose::decompose_job(job_html);
        if decompose::is_empty_extraction(&job_json) {
            anyhow::bail!("Could not decompose job description");
        }

        let resume_json = decompose::decompose_resume(resume_html, &self.vocabulary);
        if decompose::is_empty_extraction(&resume_json) {
            anyhow::bail!("Could not decompose resume");
        }

        let prompt = build_prompt(&job_json, &resume_json, details);
        app_log!(debug, "Built prompt of {} characters", prompt.len());

        Ok(PreparedPrompt {
            job_json,
            resume_json,
            prompt,
        })
    }

    pub async fn generate(
        &self,
        job_html: &str,
        resume_html: &str,
        details: &ApplicantDetails,
    ) -> Result<String> {
        let prepared = self.prepare(job_html, resume_html, details)?;

        app_log!(info, "Generating cover letter for {}", details.name);
        self.generator
            .generate(&prepared.prompt)
            .await
            .context("Cover letter generation failed")
    }

    /// Read both HTML files, generate, and write the letter to `output`
    pub async fn generate_to_file(
        &self,
        job_path: &Path,
        resume_path: &Path,
        details: &ApplicantDetails,
        output: &Path,
    ) -> Result<PathBuf> {
        let job_html = FsOps::read_file_safe(job_path).await?;
        let resume_html = FsOps::read_file_safe(resume_path).await?;

        let letter = self.generate(&job_html, &resume_html, details).await?;

        FsOps::write_file_safe(output, &letter).await?;
        app_log!(info, "Cover letter saved to {}", output.display());
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the prompt it was given and answers with a fixed letter.
    #[derive(Default)]
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            Ok("Dear Hiring Manager,".to_string())
        }
    }

    const JOB: &str = "<body><p>Requirements:</p><ul><li>Rust</li></ul></body>";
    const RESUME: &str = "<body><p>Rust and Docker</p><p>Intern</p><ul><li>Shipped</li></ul></body>";

    fn details() -> ApplicantDetails {
        ApplicantDetails {
            name: "Ada".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_passes_decomposed_json_to_model() {
        let pipeline = CoverLetterPipeline::new(RecordingGenerator::default(), Vocabulary::default());

        let letter = pipeline.generate(JOB, RESUME, &details()).await.unwrap();
        assert_eq!(letter, "Dear Hiring Manager,");

        let prompts = pipeline.generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"Requirements\": [\n        \"Rust\"\n    ]"));
        assert!(prompts[0].contains("\"docker\""));
        assert!(prompts[0].contains("\"title\": \"Intern\""));
    }

    #[tokio::test]
    async fn test_empty_job_stops_before_generation() {
        let pipeline = CoverLetterPipeline::new(RecordingGenerator::default(), Vocabulary::default());

        let err = pipeline
            .generate("<p>no body</p>", RESUME, &details())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Could not decompose job description"));
        assert!(pipeline.generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_resume_stops_before_generation() {
        let pipeline = CoverLetterPipeline::new(RecordingGenerator::default(), Vocabulary::default());

        let err = pipeline.generate(JOB, "<body></body>", &details()).await.unwrap_err();
        assert!(err.to_string().contains("Could not decompose resume"));
    }

    #[test]
    fn test_prepare_requires_name() {
        let pipeline = CoverLetterPipeline::new(RecordingGenerator::default(), Vocabulary::default());
        assert!(pipeline
            .prepare(JOB, RESUME, &ApplicantDetails::default())
            .is_err());
    }

    #[tokio::test]
    async fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let job_path = dir.path().join("job.html");
        let resume_path = dir.path().join("resume.html");
        std::fs::write(&job_path, JOB).unwrap();
        std::fs::write(&resume_path, RESUME).unwrap();
        let output = dir.path().join("output").join("cover-letter.md");

        let pipeline = CoverLetterPipeline::new(RecordingGenerator::default(), Vocabulary::default());
        let written = pipeline
            .generate_to_file(&job_path, &resume_path, &details(), &output)
            .await
            .unwrap();

        assert_eq!(written, output);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dear Hiring Manager,");
    }
}
