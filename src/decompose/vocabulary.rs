// src/decompose/vocabulary.rs
use serde::{Deserialize, Serialize};

/// Terms that stand for both C and C++ and are reported as the two separately.
const C_FAMILY_TERMS: [&str; 2] = ["c++/c", "c/c++"];

pub const DEFAULT_SKILL_TERMS: &[&str] = &[
    "docker", "rust", "java", "golang", "ghidra", "python", "mysql", "redis", "sqlite", "json",
    "pytorch", "c/c++", "c++/c", "orm",
];

/// Ordered, lowercase keyword list used to spot skills in résumé text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|term| term.as_ref().trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms found in `text`, case-insensitively, in vocabulary order.
    pub fn matches<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a str> + 'a {
        let haystack = text.to_lowercase();
        self.terms
            .iter()
            .filter(move |term| haystack.contains(term.as_str()))
            .map(String::as_str)
    }
}

/// Skill names reported for a matched term.
pub fn expand_term(term: &str) -> Vec<&str> {
    if C_FAMILY_TERMS.contains(&term) {
        vec!["c", "c++"]
    } else {
        vec![term]
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILL_TERMS)
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.terms
    }
}
