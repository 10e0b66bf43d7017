//! Rule-based field extractors for resumes.
//!
//! Each rule is independent: it reads the whole text and either finds its
//! field or reports nothing. Rules never fail and never depend on each other.

pub mod email;
pub mod experience;
pub mod link;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod skills;

pub use email::{extract_email, EmailExtractor};
pub use experience::{extract_experience_summary, ExperienceExtractor};
pub use link::{extract_professional_link, ProfessionalLinkExtractor};
pub use name::{extract_name, FirstLineNameExtractor};
pub use phone::{extract_phone, PhoneExtractor};
pub use skills::{extract_skills, SkillExtractor, SkillVocabulary};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Field name, used in warnings and logs.
    fn field(&self) -> &'static str;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A rule producing a single string-valued field, boxable for swapping.
pub type TextRule = Box<dyn FieldExtractor<Output = ExtractionMatch<String>> + Send + Sync>;

/// Extraction context with confidence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte range in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
