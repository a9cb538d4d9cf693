// src/decompose/resume.rs
use serde::Serialize;

use super::association::{LabeledList, ListContent, SKILLS_LABEL};
use super::normalize::normalize_title;
use crate::app_log;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeEntry {
    pub title: String,
    pub description: Vec<String>,
}

pub type ProjectEntry = ResumeEntry;
pub type ExperienceEntry = ResumeEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeRecord {
    /// Unique skill names in first-seen order; `Some` once any `"Skills"` pair is seen.
    #[serde(rename = "Skills", skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(rename = "Projects", skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectEntry>,
    #[serde(rename = "Experience/Activities", skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<ExperienceEntry>,
}

impl ResumeRecord {
    pub fn is_empty(&self) -> bool {
        self.skills.is_none() && self.projects.is_empty() && self.experience.is_empty()
    }

    fn skills_mut(&mut self) -> &mut Vec<String> {
        self.skills.get_or_insert_with(Vec::new)
    }

    fn add_skill(&mut self, skill: String) {
        let skills = self.skills_mut();
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    }
}

/// Route each labelled list into projects, skills or experience.
///
/// Labels containing a link are projects; the `"Skills"` label carries keyword
/// hits; everything else, unlabelled lists included, is experience.
pub fn classify_resume(pairs: Vec<LabeledList>) -> ResumeRecord {
    let mut record = ResumeRecord::default();

    for pair in pairs {
        let label = pair.label_str();

        if label.contains("http") {
            let title = normalize_title(label);
            record.projects.push(ResumeEntry {
                title,
                description: pair.content.into_items(),
            });
        } else if label == SKILLS_LABEL {
            match pair.content {
                ListContent::Keyword(skill) => record.add_skill(skill),
                ListContent::Items(items) => {
                    record.skills_mut();
                    app_log!(trace, "Skipping Skills list of {} items", items.len());
                }
            }
        } else {
            let title = normalize_title(label);
            record.experience.push(ResumeEntry {
                title,
                description: pair.content.into_items(),
            });
        }
    }

    record
}
