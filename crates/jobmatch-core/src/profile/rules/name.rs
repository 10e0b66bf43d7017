//! Candidate name heuristic.
//!
//! The first line long enough to be a name is taken as the name. This often
//! picks up a header or logo text instead; treat the result as a guess. The
//! parser takes the name rule as a boxed [`FieldExtractor`], so a better
//! strategy can replace this one without touching the other rules.

use super::{ExtractionMatch, FieldExtractor};

/// Default minimum trimmed length, in characters.
pub const DEFAULT_MIN_NAME_LENGTH: usize = 4;

/// Picks the first non-empty line of at least `min_length` characters.
///
/// Blank lines are never names, even with a `min_length` of zero.
#[derive(Debug)]
pub struct FirstLineNameExtractor {
    min_length: usize,
}

impl FirstLineNameExtractor {
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }

    /// Set the minimum trimmed line length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

impl Default for FirstLineNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FirstLineNameExtractor {
    type Output = ExtractionMatch<String>;

    fn field(&self) -> &'static str {
        "name"
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut offset = 0;
        let mut results = Vec::new();

        for line in text.split_inclusive('\n') {
            let trimmed = line.trim();
            if !trimmed.is_empty() && trimmed.chars().count() >= self.min_length {
                let start = offset + (line.len() - line.trim_start().len());
                results.push(
                    ExtractionMatch::new(trimmed.to_string(), 0.4, trimmed)
                        .with_position(start, start + trimmed.len()),
                );
            }
            offset += line.len();
        }

        results
    }
}

/// Extract the candidate name using the first-long-line heuristic.
pub fn extract_name(text: &str) -> Option<String> {
    FirstLineNameExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name_first_long_line() {
        let text = "\n  \nJane Doe\nSenior Engineer\n";
        assert_eq!(extract_name(text), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_extract_name_skips_short_lines() {
        let text = "CV\nBob\n  Alice Smith  \n";
        assert_eq!(extract_name(text), Some("Alice Smith".to_string()));
    }

    #[test]
    fn test_extract_name_boundary_length() {
        assert_eq!(extract_name("Ann\nAnna"), Some("Anna".to_string()));
    }

    #[test]
    fn test_extract_name_misfires_on_header() {
        // Known weakness: a document header wins over the real name.
        let text = "CURRICULUM VITAE\nJane Doe";
        assert_eq!(extract_name(text), Some("CURRICULUM VITAE".to_string()));
    }

    #[test]
    fn test_extract_name_absent() {
        assert_eq!(extract_name(""), None);
        assert_eq!(extract_name("a\nbc\n   \n"), None);
    }

    #[test]
    fn test_zero_min_length_skips_blank_lines() {
        let extractor = FirstLineNameExtractor::new().with_min_length(0);
        assert_eq!(extractor.extract("\n   \nJane").unwrap().value, "Jane");
        assert!(extractor.extract("\n \t \n").is_none());
    }

    #[test]
    fn test_custom_min_length_and_position() {
        let extractor = FirstLineNameExtractor::new().with_min_length(10);
        let m = extractor.extract("Jane Doe\n  Jane Q. Doe\n").unwrap();
        assert_eq!(m.value, "Jane Q. Doe");
        assert_eq!(m.position, Some((11, 22)));
    }
}
