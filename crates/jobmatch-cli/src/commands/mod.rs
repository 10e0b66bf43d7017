//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod matches;
pub mod profile;
pub mod run;

use std::fs;
use std::path::Path;

use jobmatch_core::document::{extract_text, DocumentFormat};
use jobmatch_core::models::config::JobmatchConfig;

/// Load the configuration file given with `--config`, or the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<JobmatchConfig> {
    match config_path {
        Some(path) => Ok(JobmatchConfig::from_file(Path::new(path))?),
        None => Ok(JobmatchConfig::default()),
    }
}

/// Read a resume and fail loudly if it yields no text.
pub fn read_resume(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let format = DocumentFormat::from_path(path)?;
    let data = fs::read(path)?;
    let text = extract_text(&data, format)?;

    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from {}", path.display());
    }

    Ok(text)
}
