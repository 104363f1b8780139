//! Score aggregation and fit classification
//!
//! Combines the per-category match results into a weighted overall percentage
//! and classifies it into one of four qualitative bands.

use crate::config::ScoringConfig;
use crate::matching::matcher::CategoryResult;
use serde::{Deserialize, Serialize};

/// Round to one decimal place, the precision all percentages are reported at.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of matched skills in a category; 0 when the category is empty.
pub fn percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(matched as f64 / total as f64 * 100.0)
    }
}

/// Weighted overall match percentage.
///
/// When the job defines no preferred skills the required percentage stands
/// alone rather than being diluted by an empty category.
pub fn overall_percentage(
    required: &CategoryResult,
    preferred: &CategoryResult,
    scoring: &ScoringConfig,
) -> f64 {
    if preferred.total > 0 {
        round1(
            required.match_percentage * scoring.required_weight
                + preferred.match_percentage * scoring.preferred_weight,
        )
    } else {
        required.match_percentage
    }
}

/// Qualitative fit band for an overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBand {
    Strong,
    Good,
    Fair,
    Weak,
}

impl MatchBand {
    /// Classify an overall percentage. Bands are half-open except the top:
    /// strong >= 80, good [60, 80), fair [40, 60), weak < 40.
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 80.0 {
            MatchBand::Strong
        } else if overall >= 60.0 {
            MatchBand::Good
        } else if overall >= 40.0 {
            MatchBand::Fair
        } else {
            MatchBand::Weak
        }
    }
}

/// Four mutually exclusive fit flags. Exactly one is true for any overall
/// percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub strong_match: bool,
    pub good_match: bool,
    pub fair_match: bool,
    pub weak_match: bool,
}

impl AnalysisSummary {
    pub fn from_overall(overall: f64) -> Self {
        let band = MatchBand::from_overall(overall);
        Self {
            strong_match: band == MatchBand::Strong,
            good_match: band == MatchBand::Good,
            fair_match: band == MatchBand::Fair,
            weak_match: band == MatchBand::Weak,
        }
    }
}

/// Full result of one matching invocation. Built fresh on every call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub overall_match_percentage: f64,
    pub required_skills: CategoryResult,
    pub preferred_skills: CategoryResult,
    pub resume_skills: Vec<String>,
    pub analysis_summary: AnalysisSummary,
    pub demo_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_note: Option<String>,
}

impl MatchReport {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_overall(self.overall_match_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333333), 33.3);
        assert_eq!(round1(66.666666), 66.7);
        assert_eq!(round1(50.0), 50.0);
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(1, 2), 50.0);
    }

    fn category(matched: usize, total: usize) -> CategoryResult {
        CategoryResult {
            total,
            matched,
            match_percentage: percentage(matched, total),
            exact_matches: Vec::new(),
            partial_matches: Vec::new(),
            missing: Vec::new(),
        }
    }

    #[test]
    fn test_overall_weights_required_70_preferred_30() {
        let scoring = ScoringConfig::default();
        let required = category(1, 2); // 50.0
        let preferred = category(1, 1); // 100.0

        // 50 * 0.7 + 100 * 0.3 = 65.0
        assert_eq!(overall_percentage(&required, &preferred, &scoring), 65.0);
    }

    #[test]
    fn test_overall_equals_required_when_no_preferred_defined() {
        let scoring = ScoringConfig::default();
        let required = category(1, 2); // 50.0
        let preferred = category(0, 0);

        assert_eq!(overall_percentage(&required, &preferred, &scoring), 50.0);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(MatchBand::from_overall(100.0), MatchBand::Strong);
        assert_eq!(MatchBand::from_overall(80.0), MatchBand::Strong);
        assert_eq!(MatchBand::from_overall(79.9), MatchBand::Good);
        assert_eq!(MatchBand::from_overall(60.0), MatchBand::Good);
        assert_eq!(MatchBand::from_overall(59.9), MatchBand::Fair);
        assert_eq!(MatchBand::from_overall(40.0), MatchBand::Fair);
        assert_eq!(MatchBand::from_overall(39.9), MatchBand::Weak);
        assert_eq!(MatchBand::from_overall(0.0), MatchBand::Weak);
    }

    #[test]
    fn test_exactly_one_summary_flag_is_true() {
        for overall in [0.0, 39.9, 40.0, 59.9, 60.0, 79.9, 80.0, 100.0] {
            let summary = AnalysisSummary::from_overall(overall);
            let set = [
                summary.strong_match,
                summary.good_match,
                summary.fair_match,
                summary.weak_match,
            ]
            .iter()
            .filter(|&&flag| flag)
            .count();
            assert_eq!(set, 1, "overall = {}", overall);
        }
    }

    #[test]
    fn test_demo_note_omitted_from_json_when_absent() {
        let report = MatchReport {
            overall_match_percentage: 0.0,
            required_skills: category(0, 0),
            preferred_skills: category(0, 0),
            resume_skills: Vec::new(),
            analysis_summary: AnalysisSummary::from_overall(0.0),
            demo_mode: false,
            demo_note: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("demo_note").is_none());
        assert_eq!(json["demo_mode"], false);
    }
}
