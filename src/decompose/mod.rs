// src/decompose/mod.rs
//! HTML decomposition: job postings and résumés to JSON records.
//!
//! Both entry points report "nothing extracted" with the `{}` sentinel rather
//! than an error, so callers only ever compare against [`EMPTY_SENTINEL`].

use serde::Serialize;
use thiserror::Error;

pub mod association;
pub mod document;
pub mod job;
pub mod normalize;
pub mod resume;
pub mod vocabulary;

pub use association::{associate, LabeledList, ListContent};
pub use document::{Document, Element, HtmlNode};
pub use job::{classify_job, JobRecord, JobSection};
pub use resume::{classify_resume, ResumeEntry, ResumeRecord};
pub use vocabulary::Vocabulary;

use crate::app_log;

pub const EMPTY_SENTINEL: &str = "{}";

#[derive(Debug, Error)]
pub enum DecomposeError {
    #[error("document has no <body>")]
    MissingBody,

    #[error("no structured content found")]
    EmptyExtraction,

    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub fn decompose_job(html: &str) -> String {
    try_decompose_job(html).unwrap_or_else(|e| {
        app_log!(debug, "Job decomposition produced nothing: {}", e);
        EMPTY_SENTINEL.to_string()
    })
}

pub fn decompose_resume(html: &str, vocabulary: &Vocabulary) -> String {
    try_decompose_resume(html, vocabulary).unwrap_or_else(|e| {
        app_log!(debug, "Resume decomposition produced nothing: {}", e);
        EMPTY_SENTINEL.to_string()
    })
}

pub fn try_decompose_job(html: &str) -> Result<String, DecomposeError> {
    let pairs = labelled_lists(html, None)?;
    let record = classify_job(pairs);
    if record.is_empty() {
        return Err(DecomposeError::EmptyExtraction);
    }
    to_pretty_json(&record)
}

pub fn try_decompose_resume(html: &str, vocabulary: &Vocabulary) -> Result<String, DecomposeError> {
    let pairs = labelled_lists(html, Some(vocabulary))?;
    let record = classify_resume(pairs);
    if record.is_empty() {
        return Err(DecomposeError::EmptyExtraction);
    }
    to_pretty_json(&record)
}

/// Parse `html` and run the association engine over its body.
pub fn labelled_lists(
    html: &str,
    vocabulary: Option<&Vocabulary>,
) -> Result<Vec<LabeledList>, DecomposeError> {
    let document = Document::parse(html);
    let body = document.body().ok_or(DecomposeError::MissingBody)?;
    Ok(associate(body, vocabulary))
}

pub fn is_empty_extraction(json: &str) -> bool {
    json.trim() == EMPTY_SENTINEL
}

/// JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, DecomposeError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
