// src/types/details.rs
//! Applicant and company details that frame the generated cover letter.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplicantDetails {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub company: String,
    pub company_address_1: String,
    pub company_address_2: String,
    pub job_title: String,
}

/// Per-field overrides, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct DetailsOverrides {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub company_address_1: Option<String>,
    pub company_address_2: Option<String>,
    pub job_title: Option<String>,
}

impl ApplicantDetails {
    /// Load details from a TOML file with one key per field
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read details file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse details file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply(mut self, overrides: DetailsOverrides) -> Self {
        fn set(field: &mut String, value: Option<String>) {
            if let Some(value) = value {
                *field = value;
            }
        }

        set(&mut self.name, overrides.name);
        set(&mut self.address, overrides.address);
        set(&mut self.phone_number, overrides.phone_number);
        set(&mut self.email, overrides.email);
        set(&mut self.company, overrides.company);
        set(&mut self.company_address_1, overrides.company_address_1);
        set(&mut self.company_address_2, overrides.company_address_2);
        set(&mut self.job_title, overrides.job_title);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Applicant name is required");
        }
        Ok(())
    }
}
