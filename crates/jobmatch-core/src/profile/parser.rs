//! Rule-based profile parser.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, trace};

use crate::models::config::ExtractionConfig;
use crate::models::profile::{Profile, EXPERIENCE_NOT_FOUND};

use super::rules::{
    EmailExtractor, ExperienceExtractor, ExtractionMatch, FieldExtractor, FirstLineNameExtractor,
    PhoneExtractor, ProfessionalLinkExtractor, SkillExtractor, SkillVocabulary, TextRule,
};

/// Result of profile extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted profile.
    pub profile: Profile,
    /// One entry per field that could not be determined.
    pub warnings: Vec<String>,
    /// Confidence of each extracted field, keyed by field name.
    pub field_confidence: BTreeMap<&'static str, f32>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for profile parsing.
///
/// Parsing is total: any text, including empty or garbled text, yields a
/// profile.
pub trait ProfileParser {
    /// Parse a profile from text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Profile parser applying one independent rule per field.
pub struct RuleProfileParser {
    name_rule: TextRule,
    email_rule: EmailExtractor,
    phone_rule: PhoneExtractor,
    link_rule: ProfessionalLinkExtractor,
    skill_rule: SkillExtractor,
    experience_rule: ExperienceExtractor,
}

impl RuleProfileParser {
    /// Create a parser with the default rules.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            name_rule: Box::new(FirstLineNameExtractor::new().with_min_length(config.min_name_length)),
            email_rule: EmailExtractor::new(),
            phone_rule: PhoneExtractor::new(),
            link_rule: ProfessionalLinkExtractor::new(),
            skill_rule: SkillExtractor::new(),
            experience_rule: ExperienceExtractor::from_config(config),
        }
    }

    /// Replace the name strategy.
    pub fn with_name_rule(mut self, rule: TextRule) -> Self {
        self.name_rule = rule;
        self
    }

    /// Use a custom skill vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: SkillVocabulary) -> Self {
        self.skill_rule = SkillExtractor::new().with_vocabulary(vocabulary);
        self
    }

    /// Replace the experience rule.
    pub fn with_experience_rule(mut self, rule: ExperienceExtractor) -> Self {
        self.experience_rule = rule;
        self
    }

    /// The vocabulary skills are drawn from.
    pub fn vocabulary(&self) -> &SkillVocabulary {
        self.skill_rule.vocabulary()
    }
}

impl Default for RuleProfileParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-field bookkeeping shared by every rule application.
#[derive(Default)]
struct Diagnostics {
    warnings: Vec<String>,
    confidence: BTreeMap<&'static str, f32>,
}

impl Diagnostics {
    fn single<R>(&mut self, rule: &R, text: &str) -> Option<String>
    where
        R: FieldExtractor<Output = ExtractionMatch<String>> + ?Sized,
    {
        match rule.extract(text) {
            Some(found) => {
                trace!("{}: {:?} at {:?}", rule.field(), found.value, found.position);
                self.confidence.insert(rule.field(), found.confidence);
                Some(found.value)
            }
            None => {
                self.warnings.push(format!("Could not extract {}", rule.field()));
                None
            }
        }
    }
}

impl ProfileParser for RuleProfileParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut diag = Diagnostics::default();

        info!("Parsing resume from {} characters of text", text.len());

        let name = diag.single(self.name_rule.as_ref(), text);
        let email = diag.single(&self.email_rule, text);
        let phone = diag.single(&self.phone_rule, text);
        let professional_link = diag.single(&self.link_rule, text);

        let skill_matches = self.skill_rule.extract_all(text);
        if skill_matches.is_empty() {
            diag.warnings.push(format!("Could not extract {}", self.skill_rule.field()));
        } else {
            let mean = skill_matches.iter().map(|m| m.confidence).sum::<f32>() / skill_matches.len() as f32;
            diag.confidence.insert(self.skill_rule.field(), mean);
        }
        let skills: Vec<String> = skill_matches.into_iter().map(|m| m.value).collect();

        let experience_summary = diag
            .single(&self.experience_rule, text)
            .unwrap_or_else(|| EXPERIENCE_NOT_FOUND.to_string());

        let profile = Profile {
            name,
            email,
            phone,
            professional_link,
            skills,
            experience_summary,
            raw_text: text.to_string(),
            ..Profile::default()
        };

        debug!(
            "Extracted profile {:?}: {} skills, {} warnings",
            profile.name,
            profile.skills.len(),
            diag.warnings.len()
        );

        ExtractionResult {
            profile,
            warnings: diag.warnings,
            field_confidence: diag.confidence,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
