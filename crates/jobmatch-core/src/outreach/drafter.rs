//! Template-based email drafting.

use serde::Serialize;

use crate::error::Result;
use crate::models::config::DraftingConfig;
use crate::models::posting::Posting;
use crate::models::profile::Profile;

use super::ProseGenerator;

/// Skills named in the body when the profile has none.
const FALLBACK_SKILLS: &str = "relevant technical skills";

/// Number of profile skills named in the body.
const TOP_SKILLS: usize = 3;

/// A drafted email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub subject: String,
    pub body: String,
}

/// Subject line for an application to `posting`.
pub fn subject_for(posting: &Posting) -> String {
    format!("Application for {} at {}", title_of(posting), company_of(posting))
}

fn title_of(posting: &Posting) -> &str {
    match posting.title.trim() {
        "" => "Position",
        title => title,
    }
}

fn company_of(posting: &Posting) -> &str {
    match posting.company.trim() {
        "" => "your company",
        company => company,
    }
}

/// Offline drafter filling a fixed template.
#[derive(Debug, Clone, Default)]
pub struct TemplateDrafter {
    signature: Option<String>,
}

impl TemplateDrafter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DraftingConfig) -> Self {
        Self {
            signature: config.signature.clone(),
        }
    }

    /// Sign off with `signature` instead of the candidate name.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }
}

impl ProseGenerator for TemplateDrafter {
    fn draft(&self, profile: &Profile, posting: &Posting) -> Result<Draft> {
        let name = profile.display_name();
        let title = title_of(posting);
        let company = company_of(posting);

        let top = profile.top_skills(TOP_SKILLS);
        let skills = if top.is_empty() {
            FALLBACK_SKILLS.to_string()
        } else {
            top.join(", ")
        };

        let sign_off = self.signature.as_deref().unwrap_or(name);

        let body = format!(
            "Dear Hiring Manager,\n\
             \n\
             I hope this email finds you well. My name is {name}, and I'm reaching out regarding the {title} position at {company}.\n\
             \n\
             I'm particularly excited about this opportunity because of my strong background in {skills}. \
             I've been following the startup ecosystem closely and am impressed by {company}'s innovative approach and growth trajectory.\n\
             \n\
             My experience aligns well with this role, and I believe I can contribute significantly to your team from day one. \
             I'm passionate about working in fast-paced startup environments where I can make a real impact.\n\
             \n\
             I would love to discuss how my skills and experience could benefit {company}. \
             Would you be available for a brief call this week?\n\
             \n\
             Thank you for considering my application. I look forward to hearing from you.\n\
             \n\
             Best regards,\n\
             {sign_off}"
        );

        Ok(Draft {
            subject: subject_for(posting),
            body,
        })
    }
}
