//! Email address extraction.

use super::patterns::EMAIL;
use super::{ExtractionMatch, FieldExtractor};

/// Email field extractor.
#[derive(Debug, Default)]
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn field(&self) -> &'static str {
        "email"
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL
            .find(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), 0.95, m.as_str()).with_position(m.start(), m.end()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), 0.95, m.as_str()).with_position(m.start(), m.end()))
            .collect()
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("Contact me at john.doe@example.com"),
            Some("john.doe@example.com".to_string())
        );
    }

    #[test]
    fn test_extract_email_first_wins() {
        let text = "Contact me at john.doe@example.com or jane@test.org";
        assert_eq!(extract_email(text), Some("john.doe@example.com".to_string()));

        let all: Vec<String> = EmailExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(all, vec!["john.doe@example.com", "jane@test.org"]);
    }

    #[test]
    fn test_extract_email_plus_and_upper_domain() {
        assert_eq!(
            extract_email("mail: First.Last+jobs@Mail.Example.CO.UK."),
            Some("First.Last+jobs@Mail.Example.CO.UK".to_string())
        );
    }

    #[test]
    fn test_extract_email_rejects_short_tld() {
        assert_eq!(extract_email("user@host.c"), None);
        assert_eq!(extract_email("no address here"), None);
        assert_eq!(extract_email(""), None);
    }

    #[test]
    fn test_extract_email_position() {
        let m = EmailExtractor::new().extract("email: a@b.io").unwrap();
        assert_eq!(m.position, Some((7, 13)));
        assert_eq!(m.source, "a@b.io");
    }
}
