//! Data models.

pub mod config;
pub mod posting;
pub mod profile;

pub use config::JobmatchConfig;
pub use posting::{MatchResult, Posting};
pub use profile::{Profile, EXPERIENCE_NOT_FOUND};
