//! Config command - manage the jobmatch configuration file.
//!
//! Keys are dotted paths into [`JobmatchConfig`], e.g. `search.default_location`
//! or `drafting.signature`. Only keys that exist in the configuration are
//! accepted; `config show --flat` lists them.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use jobmatch_core::models::config::JobmatchConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show {
        /// One `key = value` line per setting instead of JSON
        #[arg(long)]
        flat: bool,
    },

    /// Create a configuration file with default settings
    Init(InitArgs),

    /// Print one setting (e.g. "matching.max_results")
    Get { key: String },

    /// Change one setting; bare words are stored as strings
    Set { key: String, value: String },

    /// Restore one setting to its default
    Reset { key: String },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,

    /// Search location to store instead of the default
    #[arg(long)]
    location: Option<String>,

    /// Sign-off used in drafted emails
    #[arg(long)]
    signature: Option<String>,
}

/// `config_path` is the global `--config` flag and replaces the default location.
pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show { flat } => show_config(&path, flat),
        ConfigCommand::Init(init_args) => init_config(init_args, &path),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, parse_value(&value)),
        ConfigCommand::Reset { key } => reset_config(&path, &key),
        ConfigCommand::Path => show_path(&path),
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jobmatch")
        .join("config.json")
}

fn load_or_default(config_path: &Path) -> anyhow::Result<JobmatchConfig> {
    if config_path.exists() {
        Ok(JobmatchConfig::from_file(config_path)?)
    } else {
        Ok(JobmatchConfig::default())
    }
}

fn save(config: &JobmatchConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

/// JSON if it parses, otherwise the raw text as a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Every leaf setting as `(dotted key, value)`, sorted by key.
fn settings(config: &JobmatchConfig) -> anyhow::Result<Vec<(String, Value)>> {
    fn walk(prefix: &str, value: &Value, out: &mut Vec<(String, Value)>) {
        match value {
            Value::Object(map) => {
                for (name, child) in map {
                    let key = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    walk(&key, child, out);
                }
            }
            leaf => out.push((prefix.to_string(), leaf.clone())),
        }
    }

    let mut out = Vec::new();
    walk("", &serde_json::to_value(config)?, &mut out);
    Ok(out)
}

fn lookup(config: &JobmatchConfig, key: &str) -> anyhow::Result<Value> {
    settings(config)?
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
}

/// Replace one setting, re-validating the whole configuration.
fn with_setting(config: &JobmatchConfig, key: &str, value: Value) -> anyhow::Result<JobmatchConfig> {
    lookup(config, key)?;

    let mut json = serde_json::to_value(config)?;
    let (section, field) = key
        .split_once('.')
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    json.get_mut(section)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?
        .insert(field.to_string(), value);

    serde_json::from_value(json).map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))
}

fn show_config(config_path: &Path, flat: bool) -> anyhow::Result<()> {
    if !config_path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let config = load_or_default(config_path)?;
    if flat {
        for (key, value) in settings(&config)? {
            println!("{} = {}", key, value);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}

fn init_config(args: InitArgs, config_path: &Path) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(|| config_path.to_path_buf());

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let mut config = JobmatchConfig::default();
    if let Some(location) = args.location {
        config.search.default_location = location;
    }
    config.drafting.signature = args.signature;

    save(&config, &output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );
    println!("  Search location: {}", config.search.default_location);
    println!("  Drafts file: {}", config.export.drafts_path.display());

    Ok(())
}

fn get_config(config_path: &Path, key: &str) -> anyhow::Result<()> {
    let config = load_or_default(config_path)?;
    println!("{}", serde_json::to_string_pretty(&lookup(&config, key)?)?);
    Ok(())
}

fn set_config(config_path: &Path, key: &str, value: Value) -> anyhow::Result<()> {
    let config = with_setting(&load_or_default(config_path)?, key, value.clone())?;
    save(&config, config_path)?;

    println!("{} Set {} = {}", style("✓").green(), key, value);
    Ok(())
}

fn reset_config(config_path: &Path, key: &str) -> anyhow::Result<()> {
    let default = lookup(&JobmatchConfig::default(), key)?;
    let config = with_setting(&load_or_default(config_path)?, key, default.clone())?;
    save(&config, config_path)?;

    println!("{} Reset {} = {}", style("✓").green(), key, default);
    Ok(())
}

fn show_path(config_path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", config_path.display());

    if config_path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'jobmatch config init' to create a configuration file.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_lists_leaf_keys() {
        let keys: Vec<String> = settings(&JobmatchConfig::default())
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        assert!(keys.contains(&"search.default_location".to_string()));
        assert!(keys.contains(&"drafting.signature".to_string()));
        assert!(keys.contains(&"extraction.experience_markers".to_string()));
        assert!(!keys.contains(&"search".to_string()));
    }

    #[test]
    fn test_with_setting() {
        let config = JobmatchConfig::default();

        let updated = with_setting(&config, "matching.max_results", parse_value("3")).unwrap();
        assert_eq!(updated.matching.max_results, 3);

        let updated = with_setting(&config, "drafting.signature", parse_value("Jane Doe")).unwrap();
        assert_eq!(updated.drafting.signature.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_with_setting_rejects_unknown_and_mistyped() {
        let config = JobmatchConfig::default();

        assert!(with_setting(&config, "search.radius", parse_value("5")).is_err());
        assert!(with_setting(&config, "search", parse_value("5")).is_err());
        assert!(with_setting(&config, "matching.max_results", parse_value("many")).is_err());
    }
}
