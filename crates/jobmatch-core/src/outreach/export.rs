//! Draft export to a human-readable text file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::error::{OutreachError, Result};
use crate::models::config::ExportConfig;

use super::{DraftExporter, DraftedEmail};

const RULE_WIDTH: usize = 80;

/// Writes all drafts to a single text file, one block per draft.
#[derive(Debug, Clone)]
pub struct TextFileExporter {
    path: PathBuf,
}

impl TextFileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.drafts_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the file contents.
    pub fn render(drafts: &[DraftedEmail], generated_at: DateTime<Local>) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        let mut out = format!(
            "{heavy}\nDRAFTED JOB APPLICATION EMAILS\nGenerated: {}\n{heavy}\n\n",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        );

        for (i, drafted) in drafts.iter().enumerate() {
            let posting = &drafted.result.posting;

            out.push_str(&format!("\n{heavy}\nEMAIL #{}\n{heavy}\n\n", i + 1));
            out.push_str(&format!("To: [Find hiring manager email for {}]\n", posting.company));
            out.push_str(&format!("Subject: {}\n\n", drafted.draft.subject));
            out.push_str("Job Details:\n");
            out.push_str(&format!("  Title: {}\n", posting.title));
            out.push_str(&format!("  Company: {}\n", posting.company));
            out.push_str(&format!("  Location: {}\n", posting.location));
            out.push_str(&format!("  URL: {}\n", posting.url.as_deref().unwrap_or("N/A")));
            out.push_str(&format!("  Match Score: {}\n\n", drafted.result.match_score));
            out.push_str("Email Body:\n");
            out.push_str(&format!("{light}\n{}\n{light}\n\n", drafted.draft.body));
        }

        out
    }
}

impl DraftExporter for TextFileExporter {
    fn export(&self, drafts: &[DraftedEmail]) -> Result<()> {
        let content = Self::render(drafts, Local::now());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| OutreachError::Export(format!("{}: {}", parent.display(), e)))?;
        }
        fs::write(&self.path, content).map_err(|e| OutreachError::Export(format!("{}: {}", self.path.display(), e)))?;

        info!("Saved {} drafts to {}", drafts.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobmatchError;
    use crate::models::posting::{MatchResult, Posting};
    use crate::outreach::Draft;
    use tempfile::TempDir;

    fn drafted(company: &str, score: u32) -> DraftedEmail {
        let posting = Posting::new("Engineer", company, "Remote", "Rust").with_url("https://example.com/job");
        DraftedEmail {
            result: MatchResult::new(posting, score),
            draft: Draft {
                subject: format!("Application for Engineer at {}", company),
                body: "Dear Hiring Manager,\n\nHello.".to_string(),
            },
        }
    }

    #[test]
    fn test_render_blocks() {
        let drafts = vec![drafted("Acme", 3), drafted("Globex", 1)];
        let text = TextFileExporter::render(&drafts, Local::now());

        assert!(text.starts_with(&format!("{}\nDRAFTED JOB APPLICATION EMAILS\nGenerated: ", "=".repeat(80))));
        assert!(text.contains("EMAIL #1\n"));
        assert!(text.contains("EMAIL #2\n"));
        assert!(!text.contains("EMAIL #3"));
        assert!(text.contains("To: [Find hiring manager email for Acme]\n"));
        assert!(text.contains("Subject: Application for Engineer at Globex\n\n"));
        assert!(text.contains("  URL: https://example.com/job\n"));
        assert!(text.contains("  Match Score: 3\n\n"));
        assert!(text.contains(&format!("Email Body:\n{}\nDear Hiring Manager,", "-".repeat(80))));
    }

    #[test]
    fn test_render_missing_url() {
        let mut draft = drafted("Acme", 0);
        draft.result.posting.url = None;
        let text = TextFileExporter::render(&[draft], Local::now());
        assert!(text.contains("  URL: N/A\n"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("email_drafts.txt");
        let exporter = TextFileExporter::new(&path);

        exporter.export(&[drafted("Acme", 2)]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("To: [Find hiring manager email for Acme]"));
    }

    #[test]
    fn test_export_empty_writes_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("email_drafts.txt");

        TextFileExporter::new(&path).export(&[]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("DRAFTED JOB APPLICATION EMAILS"));
        assert!(!written.contains("EMAIL #1"));
    }

    #[test]
    fn test_export_unwritable_path() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be overwritten as a file.
        let err = TextFileExporter::new(dir.path()).export(&[]).unwrap_err();
        assert!(matches!(err, JobmatchError::Outreach(OutreachError::Export(_))));
    }

    #[test]
    fn test_default_path() {
        let exporter = TextFileExporter::from_config(&ExportConfig::default());
        assert_eq!(exporter.path(), Path::new("email_drafts.txt"));
    }
}
