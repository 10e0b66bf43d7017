//! Resume profile extraction.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, ProfileParser, RuleProfileParser};
pub use rules::{
    extract_email, extract_experience_summary, extract_name, extract_phone,
    extract_professional_link, extract_skills, FieldExtractor, SkillVocabulary,
};

use crate::models::profile::Profile;

/// Extract a profile from text with the default rules.
pub fn extract_profile(text: &str) -> Profile {
    RuleProfileParser::new().parse(text).profile
}
