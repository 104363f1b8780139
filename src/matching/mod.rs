//! Skill match and fit scoring engine
//!
//! The pipeline: clean and normalize the incoming skill lists, run the
//! exact/partial matcher once per job category (required, then preferred),
//! aggregate the weighted overall score, and classify the fit. A demo
//! reference profile is substituted when the job supplies no skills at all.
//! Everything here is a synchronous pure computation over caller-supplied
//! sequences; a `SkillMatcher` can be shared freely across threads.

pub mod demo;
pub mod matcher;
pub mod normalize;
pub mod recommend;
pub mod score;

pub use demo::DemoProfile;
pub use matcher::{CategoryResult, MatchRecord, MatchType};
pub use normalize::{normalize, SkillToken};
pub use recommend::RecommendationReport;
pub use score::{AnalysisSummary, MatchBand, MatchReport};

use crate::config::Config;
use crate::matching::normalize::clean_skill_list;
use log::{debug, info};

/// Stateless engine facade bundling the scoring weights, recommendation
/// limits, and demo profile. Every call allocates and returns its own report.
#[derive(Debug, Clone, Default)]
pub struct SkillMatcher {
    config: Config,
}

impl SkillMatcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Match a resume skill list against a job's required and preferred
    /// skill lists and score the fit.
    ///
    /// When both job lists are empty after cleaning, the demo reference
    /// profile is matched instead and the report is flagged as synthetic.
    pub fn analyze(
        &self,
        resume_skills: &[String],
        job_required_skills: &[String],
        job_preferred_skills: &[String],
    ) -> MatchReport {
        let resume = clean_skill_list(resume_skills);
        let required = clean_skill_list(job_required_skills);
        let preferred = clean_skill_list(job_preferred_skills);

        if required.is_empty() && preferred.is_empty() {
            info!("no job skills found, matching against the demo reference profile");
            return self.analyze_against_demo_profile(&resume);
        }

        self.run_pipeline(&resume, &required, &preferred, false, None)
    }

    /// Derive a recommendation report from a match report.
    pub fn recommend(&self, report: &MatchReport) -> RecommendationReport {
        recommend::recommend(report, &self.config.recommendations)
    }

    fn analyze_against_demo_profile(&self, resume: &[SkillToken]) -> MatchReport {
        let demo = &self.config.demo;
        let required = clean_skill_list(&demo.required_skills);
        let preferred = clean_skill_list(&demo.preferred_skills);

        self.run_pipeline(resume, &required, &preferred, true, Some(demo.note.clone()))
    }

    fn run_pipeline(
        &self,
        resume: &[SkillToken],
        required: &[SkillToken],
        preferred: &[SkillToken],
        demo_mode: bool,
        demo_note: Option<String>,
    ) -> MatchReport {
        let required_skills = matcher::match_category(resume, required);
        let preferred_skills = matcher::match_category(resume, preferred);

        let overall = score::overall_percentage(
            &required_skills,
            &preferred_skills,
            &self.config.scoring,
        );
        debug!(
            "overall match {}% (required {}%, preferred {}%)",
            overall, required_skills.match_percentage, preferred_skills.match_percentage
        );

        MatchReport {
            overall_match_percentage: overall,
            required_skills,
            preferred_skills,
            resume_skills: resume.iter().map(|t| t.raw.clone()).collect(),
            analysis_summary: AnalysisSummary::from_overall(overall),
            demo_mode,
            demo_note,
        }
    }
}
