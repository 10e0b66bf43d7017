//! Skill extraction against a controlled vocabulary.
//!
//! Matching is a case-insensitive substring test with no word boundaries.
//! Short entries therefore fire inside unrelated words ("AI" in "maintain",
//! "Git" in "digital", "Java" in "JavaScript"). That is the current matching
//! policy and scores depend on it; changing it is a deliberate vocabulary
//! version bump, not a bug fix.

use std::collections::HashSet;

use lazy_static::lazy_static;
use tracing::trace;

use super::{ExtractionMatch, FieldExtractor};

/// Version tag of [`SkillVocabulary::standard`].
pub const STANDARD_VOCABULARY_VERSION: &str = "2024.1";

const STANDARD_SKILLS: [&str; 34] = [
    "Python",
    "Java",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "Machine Learning",
    "AI",
    "Django",
    "Flask",
    "Angular",
    "Vue.js",
    "TypeScript",
    "MongoDB",
    "PostgreSQL",
    "Redis",
    "Kafka",
    "REST API",
    "GraphQL",
    "Microservices",
    "Agile",
    "TensorFlow",
    "PyTorch",
    "Data Analysis",
    "Excel",
    "Tableau",
    "Leadership",
    "Project Management",
    "Communication",
    "Problem Solving",
];

lazy_static! {
    static ref STANDARD: SkillExtractor = SkillExtractor::new();
}

/// A fixed, ordered, versioned list of recognized skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    version: String,
    skills: Vec<String>,
    folded: Vec<String>,
}

impl SkillVocabulary {
    /// The built-in vocabulary.
    pub fn standard() -> Self {
        Self::new(STANDARD_VOCABULARY_VERSION, STANDARD_SKILLS)
    }

    /// Build a vocabulary. Blank entries are skipped and case-insensitive
    /// duplicates keep their first spelling.
    pub fn new<I, S>(version: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut folded = Vec::new();

        for skill in skills {
            let skill: String = skill.into();
            let skill = skill.trim();
            if skill.is_empty() {
                continue;
            }
            let key = skill.to_lowercase();
            if seen.insert(key.clone()) {
                kept.push(skill.to_string());
                folded.push(key);
            }
        }

        Self {
            version: version.into(),
            skills: kept,
            folded,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Skills in vocabulary order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Whether `skill` is an entry (case-insensitive, exact).
    pub fn contains(&self, skill: &str) -> bool {
        let key = skill.to_lowercase();
        self.folded.iter().any(|f| *f == key)
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Skill extractor over a [`SkillVocabulary`].
#[derive(Debug, Default)]
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
}

impl SkillExtractor {
    /// Create an extractor over the standard vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: SkillVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }
}

impl FieldExtractor for SkillExtractor {
    type Output = ExtractionMatch<String>;

    fn field(&self) -> &'static str {
        "skills"
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let haystack = text.to_lowercase();
        let folded = FoldedText::new(text);
        // Context-sensitive folding (final sigma) can make the two differ;
        // positions are only reported when they agree.
        let aligned = folded.text == haystack;

        self.vocabulary
            .skills
            .iter()
            .zip(&self.vocabulary.folded)
            .filter_map(|(skill, key)| {
                let start = haystack.find(key.as_str())?;
                let end = start + key.len();
                trace!("skill {:?} matched at folded byte {}", skill, start);

                let found = if aligned {
                    let (from, to) = folded.source_range(start, end);
                    ExtractionMatch::new(skill.clone(), 0.9, &text[from..to]).with_position(from, to)
                } else {
                    ExtractionMatch::new(skill.clone(), 0.9, &haystack[start..end])
                };
                Some(found)
            })
            .collect()
    }
}

/// Lower-cased text that remembers, for every folded byte, the source
/// character it came from. Case folding can change a character's UTF-8
/// length, so folded offsets cannot be used on the source directly.
struct FoldedText {
    text: String,
    origin: Vec<(usize, usize)>,
}

impl FoldedText {
    fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len());

        for (start, c) in source.char_indices() {
            let span = (start, start + c.len_utf8());
            for lower in c.to_lowercase() {
                text.push(lower);
                origin.extend(std::iter::repeat_n(span, lower.len_utf8()));
            }
        }

        Self { text, origin }
    }

    /// Source byte range covering folded bytes `start..end` (`end > start`).
    fn source_range(&self, start: usize, end: usize) -> (usize, usize) {
        (self.origin[start].0, self.origin[end - 1].1)
    }
}

/// Extract skills from text using the standard vocabulary.
///
/// Output order follows the vocabulary, not the document.
pub fn extract_skills(text: &str) -> Vec<String> {
    STANDARD.extract_all(text).into_iter().map(|m| m.value).collect()
}
