//! Configuration management for skillfit

use crate::error::{Result, SkillFitError};
use crate::matching::demo::DemoProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub recommendations: RecommendationConfig,
    pub demo: DemoProfile,
    pub output: OutputConfig,
}

/// Weights for blending the per-category percentages into the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub required_weight: f64,
    pub preferred_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            required_weight: 0.7,
            preferred_weight: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub max_priority_skills: usize,
    pub max_nice_to_have_skills: usize,
    /// Overall percentage at or above which an encouragement action item is
    /// appended.
    pub encouragement_threshold: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_priority_skills: 5,
            max_nice_to_have_skills: 5,
            encouragement_threshold: 70.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_recommendations: bool,
    pub color_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            include_recommendations: true,
            color_output: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                SkillFitError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillFitError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillfit")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let scoring = ScoringConfig::default();
        assert!((scoring.required_weight + scoring.preferred_weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.scoring.required_weight, config.scoring.required_weight);
        assert_eq!(parsed.demo.required_skills, config.demo.required_skills);
        assert_eq!(
            parsed.recommendations.max_priority_skills,
            config.recommendations.max_priority_skills
        );
    }

    #[test]
    fn test_load_from_missing_path_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/skillfit/config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.recommendations.max_priority_skills, 5);
    }
}
