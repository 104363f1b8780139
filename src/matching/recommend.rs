//! Recommendation derivation from a match report
//!
//! A pure function of a `MatchReport`: a banded overall assessment, the top
//! missing skills to prioritize, and conditional narrative action items.

use crate::config::RecommendationConfig;
use crate::matching::score::{MatchBand, MatchReport};
use serde::{Deserialize, Serialize};

/// Skill-gap summary and action items derived from a match report.
/// Stateless, recomputable at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub overall_assessment: String,
    pub priority_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub action_items: Vec<String>,
}

/// Build recommendations from a match report.
pub fn recommend(report: &MatchReport, config: &RecommendationConfig) -> RecommendationReport {
    let missing_required = &report.required_skills.missing;
    let missing_preferred = &report.preferred_skills.missing;

    let overall_assessment = match report.band() {
        MatchBand::Strong => {
            "Excellent match! You have most of the required skills for this position."
        }
        MatchBand::Good => {
            "Good match! You meet many requirements but could strengthen a few areas."
        }
        MatchBand::Fair => "Fair match. Consider developing additional skills before applying.",
        MatchBand::Weak => "Limited match. Significant skill development needed for this role.",
    }
    .to_string();

    let priority_skills: Vec<String> = missing_required
        .iter()
        .take(config.max_priority_skills)
        .cloned()
        .collect();

    let nice_to_have_skills: Vec<String> = missing_preferred
        .iter()
        .take(config.max_nice_to_have_skills)
        .cloned()
        .collect();

    let mut action_items = Vec::new();
    if !missing_required.is_empty() {
        action_items.push(format!(
            "Focus on learning {} missing required skills",
            missing_required.len()
        ));
    }
    if !missing_preferred.is_empty() {
        action_items.push(format!(
            "Consider learning {} preferred skills to stand out",
            missing_preferred.len()
        ));
    }
    if report.overall_match_percentage >= config.encouragement_threshold {
        action_items.push("You're a strong candidate - consider applying!".to_string());
    }

    RecommendationReport {
        overall_assessment,
        priority_skills,
        nice_to_have_skills,
        action_items,
    }
}
