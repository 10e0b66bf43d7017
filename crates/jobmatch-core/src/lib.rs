//! Core library for resume profile extraction and job matching.
//!
//! This crate provides:
//! - Document text extraction (PDF and plain text)
//! - Rule-based profile extraction (name, contact details, skills, experience)
//! - Skill-overlap scoring and stable ranking of job postings
//! - Posting sources, email drafting and draft export

pub mod error;
pub mod models;
pub mod document;
pub mod profile;
pub mod matching;
pub mod outreach;

pub use error::{JobmatchError, Result};
pub use models::{JobmatchConfig, MatchResult, Posting, Profile, EXPERIENCE_NOT_FOUND};
pub use document::{extract_text, read_document_text, DocumentFormat, PdfContent, PdfType};
pub use profile::{extract_profile, ExtractionResult, ProfileParser, RuleProfileParser, SkillVocabulary};
pub use matching::{rank, score, top_n, MatchReport, MatchingEngine};
pub use outreach::{
    draft_many, Draft, DraftExporter, DraftedEmail, JsonPostingSource, PostingQuery, PostingSource,
    ProseGenerator, TemplateDrafter, TextFileExporter,
};
