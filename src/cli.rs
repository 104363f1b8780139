//! CLI interface for skillfit

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillfit")]
#[command(about = "Skill match and fit scoring for resumes and job descriptions")]
#[command(
    long_about = "Compare an extracted resume skill list against a job's required and preferred \
                  skills to produce a weighted fit score and improvement recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match resume skills against a job profile
    Match {
        /// Path to the resume skill list (JSON, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job profile (JSON with required/preferred skills)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show every matched pair, not just the counts
        #[arg(short, long)]
        detailed: bool,

        /// Skip the recommendation report
        #[arg(long)]
        no_recommendations: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("skills.json"), &["json", "txt"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("skills.pdf"), &["json", "txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("skills"), &["json"]).is_err());
    }
}
