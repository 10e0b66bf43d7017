//! Experience section extraction.
//!
//! Headings are detected by upper-case substring containment, so any line
//! mentioning "experience" opens the section, and any line mentioning
//! "skills" closes it ("Developed leadership skills" ends the scan).

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::profile::EXPERIENCE_NOT_FOUND;

use super::{ExtractionMatch, FieldExtractor};

/// Collects the lines under an experience heading.
#[derive(Debug, Clone)]
pub struct ExperienceExtractor {
    start_markers: Vec<String>,
    end_markers: Vec<String>,
    max_lines: usize,
}

impl ExperienceExtractor {
    /// Create an extractor with the default markers and a 500-line cap.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            start_markers: config.experience_markers.iter().map(|m| m.to_uppercase()).collect(),
            end_markers: config.section_end_markers.iter().map(|m| m.to_uppercase()).collect(),
            max_lines: config.max_experience_lines,
        }
    }

    /// Set the maximum number of collected lines.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    fn collect_lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut collected = Vec::new();
        let mut in_section = false;

        for line in text.lines() {
            let upper = line.trim().to_uppercase();

            if self.start_markers.iter().any(|m| upper.contains(m.as_str())) {
                in_section = true;
                continue;
            }

            if !in_section {
                continue;
            }

            if self.end_markers.iter().any(|m| upper.contains(m.as_str())) {
                break;
            }

            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if collected.len() >= self.max_lines {
                    break;
                }
                collected.push(trimmed);
            }
        }

        collected
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ExperienceExtractor {
    type Output = ExtractionMatch<String>;

    fn field(&self) -> &'static str {
        "experience_summary"
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lines = self.collect_lines(text);
        if lines.is_empty() {
            return None;
        }

        debug!("Experience section: {} lines", lines.len());
        let summary = lines.join(" ");
        Some(ExtractionMatch::new(summary.clone(), 0.7, summary))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// Extract the experience summary, or the "not extracted" sentinel.
pub fn extract_experience_summary(text: &str) -> String {
    ExperienceExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| EXPERIENCE_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RESUME: &str = "Jane Doe\n\
        jane@example.com\n\
        \n\
        Work Experience\n\
        Senior Engineer, Acme (2019-2023)\n\
        \n\
        Built data pipelines in Python\n\
        Education\n\
        BSc Computer Science\n";

    #[test]
    fn test_extract_experience_section() {
        assert_eq!(
            extract_experience_summary(RESUME),
            "Senior Engineer, Acme (2019-2023) Built data pipelines in Python"
        );
    }

    #[test]
    fn test_extract_experience_runs_to_end() {
        let text = "EMPLOYMENT\nAcme Corp\n  Staff Engineer  \n";
        assert_eq!(extract_experience_summary(text), "Acme Corp Staff Engineer");
    }

    #[test]
    fn test_extract_experience_sentinel() {
        assert_eq!(extract_experience_summary("Jane Doe\nEducation\nBSc"), EXPERIENCE_NOT_FOUND);
        assert_eq!(extract_experience_summary(""), EXPERIENCE_NOT_FOUND);
        // Heading found but nothing under it.
        assert_eq!(extract_experience_summary("Experience\n\nSkills\nRust"), EXPERIENCE_NOT_FOUND);
    }

    #[test]
    fn test_substring_headings() {
        // Any line mentioning a start marker is treated as a heading and skipped.
        let text = "Work History\nAcme\n5 years experience with Rust\nGlobex\n";
        assert_eq!(extract_experience_summary(text), "Acme Globex");

        // Any line mentioning an end marker closes the section.
        let text = "Experience\nAcme\nImproved team communication skills\nGlobex\n";
        assert_eq!(extract_experience_summary(text), "Acme");
    }

    #[test]
    fn test_line_cap() {
        let mut text = String::from("Experience\n");
        for i in 0..600 {
            text.push_str(&format!("line {}\n", i));
        }

        let summary = extract_experience_summary(&text);
        assert_eq!(summary.split("line ").count() - 1, 500);
        assert!(summary.ends_with("line 499"));

        let short = ExperienceExtractor::new().with_max_lines(2).extract(&text).unwrap();
        assert_eq!(short.value, "line 0 line 1");
    }

    #[test]
    fn test_custom_markers() {
        let config = ExtractionConfig {
            experience_markers: vec!["career".to_string()],
            section_end_markers: vec!["hobbies".to_string()],
            ..ExtractionConfig::default()
        };
        let extractor = ExperienceExtractor::from_config(&config);
        let text = "Career\nAcme\nEducation\nHobbies\nChess";
        assert_eq!(extractor.extract(text).unwrap().value, "Acme Education");
    }
}
