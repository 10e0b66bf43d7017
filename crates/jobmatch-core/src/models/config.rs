//! Configuration structures for the matching pipeline.
//!
//! Nothing in the core reads environment variables. Callers build a
//! [`JobmatchConfig`] (from a file, defaults, or CLI flags) and hand the
//! relevant section to each component.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the jobmatch pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobmatchConfig {
    /// Profile extraction configuration.
    pub extraction: ExtractionConfig,

    /// Ranking configuration.
    pub matching: MatchingConfig,

    /// Posting search configuration.
    pub search: SearchConfig,

    /// Email drafting configuration.
    pub drafting: DraftingConfig,

    /// Draft export configuration.
    pub export: ExportConfig,
}

/// Profile extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum trimmed length (in characters) of a line accepted as the name.
    pub min_name_length: usize,

    /// Maximum number of lines kept in the experience summary.
    pub max_experience_lines: usize,

    /// Heading markers that open the experience section (upper case).
    pub experience_markers: Vec<String>,

    /// Heading markers that close the experience section (upper case).
    pub section_end_markers: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_name_length: 4,
            max_experience_lines: 500,
            experience_markers: ["EXPERIENCE", "WORK HISTORY", "EMPLOYMENT", "PROFESSIONAL EXPERIENCE"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            section_end_markers: ["EDUCATION", "SKILLS", "PROJECTS", "CERTIFICATIONS"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Number of ranked matches kept.
    pub max_results: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self { max_results: 10 }
    }
}

/// Posting search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Location used when neither the caller nor the posting gives one.
    pub default_location: String,

    /// Maximum postings pulled from a source.
    pub max_postings: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_location: "San Francisco, CA".to_string(),
            max_postings: 20,
        }
    }
}

/// Email drafting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftingConfig {
    /// Maximum number of drafts produced per run.
    pub max_drafts: usize,

    /// Sign-off name. Falls back to the profile name.
    pub signature: Option<String>,
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            max_drafts: 5,
            signature: None,
        }
    }
}

/// Draft export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File the drafts are written to.
    pub drafts_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            drafts_path: PathBuf::from("email_drafts.txt"),
        }
    }
}

impl JobmatchConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
