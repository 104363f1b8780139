//! Skillfit: skill match and fit scoring for resumes and job descriptions

mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, SkillFitError};
use log::{error, info};
use matching::SkillMatcher;
use output::ReportGenerator;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            output,
            save,
            detailed,
            no_recommendations,
        } => {
            info!("Starting skill match analysis");

            cli::validate_file_extension(&resume, &["json", "txt", "md"])
                .map_err(|e| SkillFitError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["json"])
                .map_err(|e| SkillFitError::InvalidInput(format!("Job profile: {}", e)))?;

            let output_format = cli::parse_output_format(&output)
                .map_err(SkillFitError::InvalidInput)?;

            let resume_skills = input::load_skill_list(&resume)?;
            let job_profile = input::load_job_profile(&job)?;
            info!(
                "Loaded {} resume skills, {} required, {} preferred",
                resume_skills.len(),
                job_profile.required_skills.len(),
                job_profile.preferred_skills.len()
            );

            let matcher = SkillMatcher::new(config.clone());
            let report = matcher.analyze(
                &resume_skills,
                &job_profile.required_skills,
                &job_profile.preferred_skills,
            );
            let recommendations = if no_recommendations {
                None
            } else {
                Some(matcher.recommend(&report))
            };

            let generator = ReportGenerator::new(config.output.color_output, detailed);
            let rendered =
                generator.generate(output_format, &report, recommendations.as_ref())?;

            print!("{}", rendered);

            if let Some(path) = save {
                generator.save(&path, &rendered)?;
                info!("Report saved to {}", path.display());
            }

            info!(
                "Analysis complete. Overall match: {:.1}%",
                report.overall_match_percentage
            );
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!(
                    "Scoring weights: required {:.0}% / preferred {:.0}%",
                    config.scoring.required_weight * 100.0,
                    config.scoring.preferred_weight * 100.0
                );
                println!(
                    "Recommendation limits: {} priority, {} nice-to-have",
                    config.recommendations.max_priority_skills,
                    config.recommendations.max_nice_to_have_skills
                );
                println!(
                    "Encouragement threshold: {:.0}%",
                    config.recommendations.encouragement_threshold
                );
                println!(
                    "Demo profile: {} required, {} preferred skills",
                    config.demo.required_skills.len(),
                    config.demo.preferred_skills.len()
                );
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
