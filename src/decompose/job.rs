// src/decompose/job.rs
use serde::Serialize;

use super::association::LabeledList;
use crate::app_log;

/// Section of a job posting, in the order headers are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSection {
    Responsibilities,
    Qualifications,
    Requirements,
    Skills,
}

impl JobSection {
    pub const ALL: [JobSection; 4] = [
        JobSection::Responsibilities,
        JobSection::Qualifications,
        JobSection::Requirements,
        JobSection::Skills,
    ];

    /// Text a label must contain to fall in this section.
    pub fn header(self) -> &'static str {
        match self {
            JobSection::Responsibilities => "Responsibilities:",
            JobSection::Qualifications => "Qualifications:",
            JobSection::Requirements => "Requirements:",
            JobSection::Skills => "Skills:",
        }
    }

    /// First section whose header appears in `label`.
    pub fn for_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| label.contains(section.header()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    #[serde(rename = "Responsibilities", skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(rename = "Qualifications", skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Vec<String>>,
    #[serde(rename = "Requirements", skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(rename = "Skills", skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl JobRecord {
    pub fn is_empty(&self) -> bool {
        self.responsibilities.is_none()
            && self.qualifications.is_none()
            && self.requirements.is_none()
            && self.skills.is_none()
    }

    pub fn section_mut(&mut self, section: JobSection) -> &mut Option<Vec<String>> {
        match section {
            JobSection::Responsibilities => &mut self.responsibilities,
            JobSection::Qualifications => &mut self.qualifications,
            JobSection::Requirements => &mut self.requirements,
            JobSection::Skills => &mut self.skills,
        }
    }
}

/// Bucket labelled lists under the first header their label contains.
///
/// Unlabelled and unmatched lists are dropped. A later list for the same
/// header replaces the earlier one.
pub fn classify_job(pairs: Vec<LabeledList>) -> JobRecord {
    let mut record = JobRecord::default();

    for pair in pairs {
        let label = pair.label_str();
        if label.is_empty() {
            continue;
        }

        let Some(section) = JobSection::for_label(label) else {
            continue;
        };

        app_log!(trace, "Job section {:?} from label {:?}", section, label);
        *record.section_mut(section) = Some(pair.content.into_items());
    }

    record
}
