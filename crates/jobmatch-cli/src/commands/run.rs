//! Run command - the whole pipeline from resume to exported drafts.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use jobmatch_core::document::read_document_text;
use jobmatch_core::matching::MatchingEngine;
use jobmatch_core::outreach::{
    draft_many, DraftExporter, JsonPostingSource, PostingQuery, PostingSource, TemplateDrafter,
    TextFileExporter,
};
use jobmatch_core::profile::{ProfileParser, RuleProfileParser};

use super::load_config;

/// Matches listed on screen.
const SHOWN_MATCHES: usize = 5;

/// Skills listed in the profile summary.
const SHOWN_SKILLS: usize = 5;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Resume file (PDF or plain text)
    #[arg(required = true)]
    resume: PathBuf,

    /// JSON array of job postings
    #[arg(short, long)]
    postings: PathBuf,

    /// Search location
    #[arg(short, long, env = "DEFAULT_LOCATION")]
    location: Option<String>,

    /// Number of emails to draft (default: drafting.max_drafts)
    #[arg(long)]
    max_drafts: Option<usize>,

    /// Drafts file (default: export.drafts_path)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(location) = args.location {
        config.search.default_location = location;
    }
    if let Some(max_drafts) = args.max_drafts {
        config.drafting.max_drafts = max_drafts;
    }
    if let Some(output) = args.output {
        config.export.drafts_path = output;
    }

    let rule = "=".repeat(80);
    println!("{}", rule);
    println!("{}", style("jobmatch").bold());
    println!("{}", rule);
    println!();

    // Step 1: profile
    println!("{} Step 1: Parsing resume...", style("ℹ").blue());
    let text = read_document_text(&args.resume);
    let profile = RuleProfileParser::from_config(&config.extraction).parse(&text).profile;

    let Some(name) = profile.name.as_deref() else {
        anyhow::bail!(
            "Could not extract information from {}. Please check the file.",
            args.resume.display()
        );
    };

    println!("{} Extracted profile for: {}", style("✓").green(), name);
    println!("  Email: {}", profile.email.as_deref().unwrap_or("Not found"));
    println!("  Profile: {}", profile.professional_link.as_deref().unwrap_or("Not found"));
    println!("  Skills: {}", profile.top_skills(SHOWN_SKILLS).join(", "));
    println!();

    // Step 2: postings
    println!("{} Step 2: Ranking postings...", style("ℹ").blue());
    println!("  Location: {}", config.search.default_location);

    let source = JsonPostingSource::new(&args.postings);
    let postings = source.fetch(&PostingQuery::from_config(&config.search))?;
    let report = MatchingEngine::new(config.matching.clone()).find_matches(&profile, postings);

    println!("{} Found {} matching jobs:", style("✓").green(), report.matches.len());
    for (i, m) in report.matches.iter().take(SHOWN_MATCHES).enumerate() {
        println!("  {}. {} at {}", i + 1, m.posting.title, m.posting.company);
        println!(
            "     Match score: {} | Source: {}",
            m.match_score,
            m.posting.source.as_deref().unwrap_or("N/A")
        );
    }
    println!();

    // Step 3: drafts
    println!("{} Step 3: Drafting emails...", style("ℹ").blue());
    let drafter = TemplateDrafter::from_config(&config.drafting);
    let drafts = draft_many(&drafter, &profile, &report.matches, config.drafting.max_drafts)?;
    println!("{} Drafted {} emails", style("✓").green(), drafts.len());
    println!();

    // Step 4: export
    println!("{} Step 4: Saving drafts...", style("ℹ").blue());
    let exporter = TextFileExporter::from_config(&config.export);
    exporter.export(&drafts)?;
    println!(
        "{} Drafts saved to: {}",
        style("✓").green(),
        exporter.path().display()
    );
    println!();

    println!("{}", rule);
    println!("{} Done", style("✓").green());
    println!("{}", rule);
    println!();
    println!("Summary:");
    println!("  Profile parsed: {}", name);
    println!("  Jobs ranked: {}", report.total_candidates);
    println!("  Emails drafted: {}", drafts.len());
    println!("  Drafts saved to: {}", exporter.path().display());

    debug!("Pipeline finished in {:?}", start.elapsed());

    Ok(())
}
