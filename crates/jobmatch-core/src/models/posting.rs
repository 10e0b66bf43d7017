//! Job posting records and their scored form.

use serde::{Deserialize, Serialize};

/// An externally supplied job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Job title.
    pub title: String,

    /// Hiring company.
    pub company: String,

    /// Job location. Empty when the source did not provide one.
    #[serde(default)]
    pub location: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Link to the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Name of the source the posting came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Posting {
    /// Create a posting with the required fields.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: description.into(),
            url: None,
            source: None,
        }
    }

    /// Set the listing URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the source name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A posting annotated with its relevance score.
///
/// Serializes as the posting's fields plus `match_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub posting: Posting,

    /// Number of distinct profile skills found in the posting.
    pub match_score: u32,
}

impl MatchResult {
    pub fn new(posting: Posting, match_score: u32) -> Self {
        Self {
            posting,
            match_score,
        }
    }
}
