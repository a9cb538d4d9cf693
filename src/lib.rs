// src/lib.rs
//! Cover letter generation from HTML job postings and résumés.
//!
//! [`decompose`] extracts structured JSON from loosely structured HTML lists,
//! [`prompt`] frames it for a language model, and [`pipeline`] runs the model
//! through any [`inference::TextGenerator`].

pub mod logging;

pub mod cli;
pub mod core;
pub mod decompose;
pub mod inference;
pub mod pipeline;
pub mod prompt;
pub mod types;
pub mod utils;

pub use decompose::{decompose_job, decompose_resume, Vocabulary, EMPTY_SENTINEL};
pub use pipeline::CoverLetterPipeline;
