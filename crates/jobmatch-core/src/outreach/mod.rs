//! Collaborators around the matching core: where postings come from, how
//! application emails are written, and where drafts go.
//!
//! Each concern is a trait so a networked search client, a generative
//! drafter or a mail client can replace the offline implementations here.

mod drafter;
mod export;
mod source;

pub use drafter::{subject_for, Draft, TemplateDrafter};
pub use export::TextFileExporter;
pub use source::{JsonPostingSource, PostingQuery};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::posting::{MatchResult, Posting};
use crate::models::profile::Profile;

/// Supplies job postings.
pub trait PostingSource {
    /// Fetch at most `query.limit` postings.
    fn fetch(&self, query: &PostingQuery) -> Result<Vec<Posting>>;
}

/// Writes an application email for a posting.
pub trait ProseGenerator {
    fn draft(&self, profile: &Profile, posting: &Posting) -> Result<Draft>;
}

/// Delivers or stores drafted emails.
pub trait DraftExporter {
    fn export(&self, drafts: &[DraftedEmail]) -> Result<()>;
}

/// A ranked posting paired with its drafted email.
#[derive(Debug, Clone, Serialize)]
pub struct DraftedEmail {
    pub result: MatchResult,
    pub draft: Draft,
}

/// Draft emails for the first `limit` matches, in ranked order.
pub fn draft_many<G>(generator: &G, profile: &Profile, matches: &[MatchResult], limit: usize) -> Result<Vec<DraftedEmail>>
where
    G: ProseGenerator + ?Sized,
{
    matches
        .iter()
        .take(limit)
        .map(|result| -> Result<DraftedEmail> {
            debug!("Drafting email for {} at {}", result.posting.title, result.posting.company);
            let draft = generator.draft(profile, &result.posting)?;
            Ok(DraftedEmail {
                result: result.clone(),
                draft,
            })
        })
        .collect()
}
