//! Profile command - extract a profile from a single resume.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use jobmatch_core::models::profile::Profile;
use jobmatch_core::profile::{ProfileParser, RuleProfileParser};

use super::{load_config, read_resume};

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    /// Resume file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Keep the full resume text in JSON output
    #[arg(long)]
    include_text: bool,

    /// Show per-field confidence and extraction warnings
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProfileArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing resume: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Reading resume...");
    pb.set_position(10);
    let text = read_resume(&args.input)?;

    pb.set_message("Extracting profile...");
    pb.set_position(60);
    let result = RuleProfileParser::from_config(&config.extraction).parse(&text);

    pb.finish_and_clear();

    let mut profile = result.profile;
    if !args.include_text {
        profile.raw_text.clear();
    }

    let output = format_profile(&profile, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        for (field, confidence) in &result.field_confidence {
            println!(
                "{} {}: {:.0}%",
                style("ℹ").blue(),
                field,
                confidence * 100.0
            );
        }
        for warning in &result.warnings {
            println!("{} {}", style("!").yellow(), warning);
        }
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_profile(profile: &Profile, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
        OutputFormat::Csv => format_csv(profile),
        OutputFormat::Text => Ok(format_text(profile)),
    }
}

fn format_csv(profile: &Profile) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "name",
        "email",
        "phone",
        "professional_link",
        "skills",
        "experience_summary",
    ])?;

    wtr.write_record([
        profile.name.as_deref().unwrap_or_default(),
        profile.email.as_deref().unwrap_or_default(),
        profile.phone.as_deref().unwrap_or_default(),
        profile.professional_link.as_deref().unwrap_or_default(),
        profile.skills.join("; ").as_str(),
        profile.experience_summary.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(profile: &Profile) -> String {
    let not_found = "Not found";
    let mut output = String::new();

    output.push_str(&format!("Name: {}\n", profile.name.as_deref().unwrap_or(not_found)));
    output.push_str(&format!("Email: {}\n", profile.email.as_deref().unwrap_or(not_found)));
    output.push_str(&format!("Phone: {}\n", profile.phone.as_deref().unwrap_or(not_found)));
    output.push_str(&format!(
        "Profile: {}\n",
        profile.professional_link.as_deref().unwrap_or(not_found)
    ));
    output.push('\n');

    if profile.skills.is_empty() {
        output.push_str("Skills: none recognized\n");
    } else {
        output.push_str(&format!("Skills ({}):\n", profile.skills.len()));
        output.push_str(&format!("  {}\n", profile.skills.join(", ")));
    }
    output.push('\n');

    output.push_str("Experience:\n");
    output.push_str(&format!("  {}\n", profile.experience_summary));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            ..Profile::default()
        }
    }

    #[test]
    fn test_format_csv() {
        let csv = format_csv(&profile()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("name,email,phone,professional_link,skills,experience_summary")
        );
        assert_eq!(
            lines.next(),
            Some("Jane Doe,jane@example.com,,,Python; SQL,Experience details not clearly extracted")
        );
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&profile());
        assert!(text.contains("Name: Jane Doe\n"));
        assert!(text.contains("Phone: Not found\n"));
        assert!(text.contains("  Python, SQL\n"));
    }
}
