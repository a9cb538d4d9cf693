// src/types/mod.rs
pub mod details;

pub use details::{ApplicantDetails, DetailsOverrides};
