//! Skill-overlap scoring and ranking of job postings.

pub mod ranker;
pub mod scoring;

pub use ranker::{rank, top_n, MatchReport, MatchingEngine};
pub use scoring::{matched_skills, score};
