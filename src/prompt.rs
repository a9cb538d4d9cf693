// src/prompt.rs
use crate::types::ApplicantDetails;

/// Build the cover letter prompt from the decomposed job and résumé JSON.
pub fn build_prompt(job_json: &str, resume_json: &str, details: &ApplicantDetails) -> String {
    let applicant = contact_block(&[
        &details.name,
        &details.address,
        &details.phone_number,
        &details.email,
    ]);
    let company = contact_block(&[
        &details.company,
        &details.company_address_1,
        &details.company_address_2,
    ]);
    let position = if details.job_title.trim().is_empty() {
        "the advertised position".to_string()
    } else {
        details.job_title.trim().to_string()
    };

    format!(
        r#"## Instructions:
You are an assistant that writes cover letters. You are given the applicant's contact details, the company's details, a job description and the applicant's background, both as JSON. Write the cover letter in markdown, addressed to the company, for {position}. Only mention experience and skills that appear in the background.

## Input:
Applicant:
{applicant}

Company:
{company}

The job description as JSON:
{job_json}

My resume as JSON:
{resume_json}

Please write a cover letter tailored to my credentials.

## Response:
"#
    )
}

fn contact_block(lines: &[&String]) -> String {
    let present: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if present.is_empty() {
        "(not provided)".to_string()
    } else {
        present.join("\n")
    }
}
