use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::MatchingConfig;
use crate::models::posting::{MatchResult, Posting};
use crate::models::profile::Profile;

use super::scoring::score;

/// Score every posting and order by descending score.
///
/// The sort is stable: postings with equal scores keep their input order.
/// Nothing is filtered out, so the output is a permutation of the input.
pub fn rank<S: AsRef<str>>(postings: Vec<Posting>, skills: &[S]) -> Vec<MatchResult> {
    let mut ranked: Vec<MatchResult> = postings
        .into_iter()
        .map(|posting| {
            let match_score = score(&posting, skills);
            MatchResult::new(posting, match_score)
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

/// The first `n` ranked results, or all of them if there are fewer.
pub fn top_n(mut ranked: Vec<MatchResult>, n: usize) -> Vec<MatchResult> {
    ranked.truncate(n);
    ranked
}

/// Result of a matching run.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Ranked results, capped at the configured maximum.
    pub matches: Vec<MatchResult>,
    /// Number of postings considered.
    pub total_candidates: usize,
    /// Postings that matched at least one skill.
    pub matched_candidates: usize,
    /// Highest score seen, 0 when there were no postings.
    pub best_score: u32,
    pub processing_time_ms: u64,
}

/// Ranks postings against a profile's skills.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Rank `postings` for `profile` and keep the best `max_results`.
    ///
    /// Postings scoring zero are kept; a profile without skills yields the
    /// postings in input order.
    pub fn find_matches(&self, profile: &Profile, postings: Vec<Posting>) -> MatchReport {
        let start = Instant::now();
        let total_candidates = postings.len();

        let ranked = rank(postings, &profile.skills);
        let matched_candidates = ranked.iter().filter(|m| m.match_score > 0).count();
        let best_score = ranked.first().map(|m| m.match_score).unwrap_or(0);

        for m in &ranked {
            debug!("{} at {}: score {}", m.posting.title, m.posting.company, m.match_score);
        }

        let matches = top_n(ranked, self.config.max_results);
        info!(
            "Ranked {} postings against {} skills, {} matched, returning {}",
            total_candidates,
            profile.skills.len(),
            matched_candidates,
            matches.len()
        );

        MatchReport {
            matches,
            total_candidates,
            matched_candidates,
            best_score,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
