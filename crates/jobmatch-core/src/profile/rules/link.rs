//! Professional network profile link extraction.

use super::patterns::{PROFESSIONAL_LINK, URL_SCHEME};
use super::{ExtractionMatch, FieldExtractor};

/// Extracts `linkedin.com/in/<handle>` links, normalized to carry a scheme.
#[derive(Debug, Default)]
pub struct ProfessionalLinkExtractor;

impl ProfessionalLinkExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for ProfessionalLinkExtractor {
    type Output = ExtractionMatch<String>;

    fn field(&self) -> &'static str {
        "professional_link"
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PROFESSIONAL_LINK
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(normalize_link(m.as_str()), 0.95, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Prefix `https://` unless the link already has an http(s) scheme.
pub fn normalize_link(link: &str) -> String {
    if URL_SCHEME.is_match(link) {
        link.to_string()
    } else {
        format!("https://{}", link)
    }
}

/// Extract the first professional network link from text.
pub fn extract_professional_link(text: &str) -> Option<String> {
    ProfessionalLinkExtractor::new().extract(text).map(|m| m.value)
}
