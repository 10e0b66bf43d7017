//! Phone number extraction.

use super::patterns::PHONE;
use super::{ExtractionMatch, FieldExtractor};

/// Phone field extractor.
///
/// Accepts `+CC`, parenthesised area codes and space/dot/hyphen separators.
/// The matched text is returned as written, without normalization.
#[derive(Debug, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn field(&self) -> &'static str {
        "phone"
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .find_iter(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), 0.8, m.as_str()).with_position(m.start(), m.end()))
            .collect()
    }
}

/// Extract the first phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_phone_formats() {
        assert_eq!(extract_phone("Phone: (555) 123-4567"), Some("(555) 123-4567".to_string()));
        assert_eq!(extract_phone("tel 555.123.4567"), Some("555.123.4567".to_string()));
        assert_eq!(extract_phone("5551234567"), Some("5551234567".to_string()));
    }

    #[test]
    fn test_extract_phone_country_code() {
        assert_eq!(
            extract_phone("Call +1 555-123-4567 anytime"),
            Some("+1 555-123-4567".to_string())
        );
        assert_eq!(
            extract_phone("Mobile: +44-207-555-0199"),
            Some("+44-207-555-0199".to_string())
        );
    }

    #[test]
    fn test_extract_phone_first_wins() {
        let text = "Home 555-111-2222, Work 555-333-4444";
        assert_eq!(extract_phone(text), Some("555-111-2222".to_string()));
        assert_eq!(PhoneExtractor::new().extract_all(text).len(), 2);
    }

    #[test]
    fn test_extract_phone_absent() {
        assert_eq!(extract_phone("Worked 2015-2020 at Acme"), None);
        assert_eq!(extract_phone(""), None);
    }
}
