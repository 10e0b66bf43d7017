//! Match command - rank job postings against a resume.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use jobmatch_core::matching::{matched_skills, MatchingEngine};
use jobmatch_core::models::posting::MatchResult;
use jobmatch_core::outreach::{JsonPostingSource, PostingQuery, PostingSource};
use jobmatch_core::profile::{ProfileParser, RuleProfileParser};

use super::profile::OutputFormat;
use super::{load_config, read_resume};

/// Arguments for the match command.
#[derive(Args)]
pub struct MatchArgs {
    /// Resume file (PDF or plain text)
    #[arg(required = true)]
    resume: PathBuf,

    /// JSON array of job postings
    #[arg(required = true)]
    postings: PathBuf,

    /// Number of ranked postings to keep (default: matching.max_results)
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Location given to postings that have none
    #[arg(short, long, env = "DEFAULT_LOCATION")]
    location: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub async fn run(args: MatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(top) = args.top {
        config.matching.max_results = top;
    }
    if let Some(location) = args.location {
        config.search.default_location = location;
    }

    let text = read_resume(&args.resume)?;
    let profile = RuleProfileParser::from_config(&config.extraction).parse(&text).profile;

    let source = JsonPostingSource::new(&args.postings);
    let postings = source.fetch(&PostingQuery::from_config(&config.search))?;

    let report = MatchingEngine::new(config.matching.clone()).find_matches(&profile, postings);
    info!(
        "{} of {} postings matched at least one skill",
        report.matched_candidates, report.total_candidates
    );

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report.matches)?,
        OutputFormat::Csv => format_csv(&report.matches)?,
        OutputFormat::Text => format_text(&report.matches, &profile.skills),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} matches written to {}",
            style("✓").green(),
            report.matches.len(),
            output_path.display()
        );
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

fn format_csv(matches: &[MatchResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["rank", "title", "company", "location", "match_score", "url", "source"])?;

    for (i, m) in matches.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string().as_str(),
            m.posting.title.as_str(),
            m.posting.company.as_str(),
            m.posting.location.as_str(),
            m.match_score.to_string().as_str(),
            m.posting.url.as_deref().unwrap_or_default(),
            m.posting.source.as_deref().unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(matches: &[MatchResult], skills: &[String]) -> String {
    if matches.is_empty() {
        return "No postings to rank.\n".to_string();
    }

    let mut output = String::new();

    for (i, m) in matches.iter().enumerate() {
        output.push_str(&format!("{}. {} at {}\n", i + 1, m.posting.title, m.posting.company));
        output.push_str(&format!(
            "   Match score: {} | Source: {}\n",
            m.match_score,
            m.posting.source.as_deref().unwrap_or("N/A")
        ));
        let matched = matched_skills(&m.posting, skills);
        if !matched.is_empty() {
            output.push_str(&format!("   Skills: {}\n", matched.join(", ")));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobmatch_core::models::posting::Posting;

    fn matches() -> Vec<MatchResult> {
        vec![
            MatchResult::new(Posting::new("Backend", "Acme", "Remote", "Python, SQL").with_source("Indeed"), 2),
            MatchResult::new(Posting::new("Designer", "Pixel, Inc", "NYC", "Figma"), 0),
        ]
    }

    #[test]
    fn test_format_csv_quotes_fields() {
        let csv = format_csv(&matches()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "rank,title,company,location,match_score,url,source");
        assert_eq!(lines[1], "1,Backend,Acme,Remote,2,,Indeed");
        assert_eq!(lines[2], "2,Designer,\"Pixel, Inc\",NYC,0,,");
    }

    #[test]
    fn test_format_text() {
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        let text = format_text(&matches(), &skills);
        assert!(text.starts_with("1. Backend at Acme\n   Match score: 2 | Source: Indeed\n   Skills: Python, SQL\n"));
        assert!(text.contains("2. Designer at Pixel, Inc\n   Match score: 0 | Source: N/A\n"));
    }

    #[test]
    fn test_format_text_empty() {
        assert_eq!(format_text(&[], &[]), "No postings to rank.\n");
    }
}
