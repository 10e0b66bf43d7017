//! Posting sources.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PostingError, Result};
use crate::models::config::SearchConfig;
use crate::models::posting::Posting;

use super::PostingSource;

/// What to fetch from a [`PostingSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingQuery {
    /// Requested location.
    pub location: String,
    /// Maximum number of postings to return.
    pub limit: usize,
}

impl PostingQuery {
    pub fn new(location: impl Into<String>, limit: usize) -> Self {
        Self {
            location: location.into(),
            limit,
        }
    }

    /// Build a query from the search section of the configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.default_location.clone(), config.max_postings)
    }
}

/// Postings stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonPostingSource {
    path: PathBuf,
}

impl JsonPostingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON array of postings.
    pub fn parse(json: &str) -> Result<Vec<Posting>> {
        serde_json::from_str(json).map_err(|e| PostingError::Invalid(e.to_string()).into())
    }
}

impl PostingSource for JsonPostingSource {
    fn fetch(&self, query: &PostingQuery) -> Result<Vec<Posting>> {
        let json = fs::read_to_string(&self.path).map_err(|e| PostingError::Read {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut postings = Self::parse(&json)?;
        let available = postings.len();
        postings.truncate(query.limit);

        for posting in postings.iter_mut().filter(|p| p.location.trim().is_empty()) {
            posting.location = query.location.clone();
        }

        debug!("{} postings available, {} requested", available, query.limit);
        info!("Loaded {} postings from {}", postings.len(), self.path.display());

        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobmatchError;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const POSTINGS: &str = r#"[
        {"title": "Backend Engineer", "company": "Acme", "location": "Remote", "description": "Python"},
        {"title": "Data Engineer", "company": "Globex", "description": "Kafka", "url": "https://example.com/2"},
        {"title": "Frontend Engineer", "company": "Initech", "location": "", "description": "React"}
    ]"#;

    fn write_postings(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_fetch_stamps_missing_location() {
        let file = write_postings(POSTINGS);
        let source = JsonPostingSource::new(file.path());

        let postings = source.fetch(&PostingQuery::new("Berlin", 10)).unwrap();

        assert_eq!(postings.len(), 3);
        assert_eq!(postings[0].location, "Remote");
        assert_eq!(postings[1].location, "Berlin");
        assert_eq!(postings[1].url.as_deref(), Some("https://example.com/2"));
        assert_eq!(postings[2].location, "Berlin");
    }

    #[test]
    fn test_fetch_respects_limit() {
        let file = write_postings(POSTINGS);
        let source = JsonPostingSource::new(file.path());

        let postings = source.fetch(&PostingQuery::new("Berlin", 2)).unwrap();
        let titles: Vec<&str> = postings.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Backend Engineer", "Data Engineer"]);

        assert!(source.fetch(&PostingQuery::new("Berlin", 0)).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_missing_file() {
        let source = JsonPostingSource::new("/nonexistent/postings.json");
        let err = source.fetch(&PostingQuery::new("Berlin", 5)).unwrap_err();
        assert!(matches!(err, JobmatchError::Posting(PostingError::Read { .. })));
    }

    #[test]
    fn test_fetch_invalid_json() {
        let file = write_postings(r#"{"title": "not an array"}"#);
        let err = JsonPostingSource::new(file.path())
            .fetch(&PostingQuery::new("Berlin", 5))
            .unwrap_err();
        assert!(matches!(err, JobmatchError::Posting(PostingError::Invalid(_))));
    }

    #[test]
    fn test_query_from_config() {
        let query = PostingQuery::from_config(&SearchConfig::default());
        assert_eq!(query.location, "San Francisco, CA");
        assert_eq!(query.limit, 20);
    }
}
