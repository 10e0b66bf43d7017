//! Candidate profile extracted from a resume.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel stored in [`Profile::experience_summary`] when no experience
/// section could be located.
pub const EXPERIENCE_NOT_FOUND: &str = "Experience details not clearly extracted";

/// Structured candidate record.
///
/// Every optional field is extracted independently, so any combination of
/// them may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Best-effort name (first sufficiently long line of the document).
    pub name: Option<String>,

    /// First email address found.
    pub email: Option<String>,

    /// First phone number found.
    pub phone: Option<String>,

    /// Professional network URL, always with a scheme.
    pub professional_link: Option<String>,

    /// Skills from the controlled vocabulary, in vocabulary order.
    pub skills: Vec<String>,

    /// Excerpt of the experience section, or [`EXPERIENCE_NOT_FOUND`].
    pub experience_summary: String,

    /// Full extracted document text.
    #[serde(default)]
    pub raw_text: String,

    /// Links discovered after extraction (e.g. "github" -> URL).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub online_presence: BTreeMap<String, String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            phone: None,
            professional_link: None,
            skills: Vec::new(),
            experience_summary: EXPERIENCE_NOT_FOUND.to_string(),
            raw_text: String::new(),
            online_presence: BTreeMap::new(),
        }
    }
}

impl Profile {
    /// Record an online presence link. Does not touch extracted fields.
    pub fn add_online_presence(&mut self, kind: impl Into<String>, url: impl Into<String>) {
        self.online_presence.insert(kind.into(), url.into());
    }

    /// Whether an experience section was found.
    pub fn has_experience(&self) -> bool {
        self.experience_summary != EXPERIENCE_NOT_FOUND
    }

    /// Display name, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Candidate")
    }

    /// The first `n` skills, in vocabulary order.
    pub fn top_skills(&self, n: usize) -> &[String] {
        &self.skills[..n.min(self.skills.len())]
    }
}
