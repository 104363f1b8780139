//! Two-tier skill matching for a single job category
//!
//! Runs an exact pass (normalized equality) followed by a partial pass
//! (substring containment either direction) over every resume/job skill pair,
//! then derives the missing job skills. Invoked once for required skills and
//! once for preferred skills.

use crate::matching::normalize::SkillToken;
use crate::matching::score;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a resume skill lined up with a job skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
}

/// One matched resume/job skill pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub resume_skill: String,
    pub job_skill: String,
    pub match_type: MatchType,
}

/// Match outcome for one job skill category (required or preferred).
///
/// Invariant: `matched == exact_matches.len() + partial_matches.len()`, and
/// `missing` holds every job skill whose normalized form never appeared as
/// the `job_skill` of a recorded match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub total: usize,
    pub matched: usize,
    pub match_percentage: f64,
    pub exact_matches: Vec<MatchRecord>,
    pub partial_matches: Vec<MatchRecord>,
    pub missing: Vec<String>,
}

impl CategoryResult {
    /// Result for a category the job does not define (total = 0).
    pub fn empty() -> Self {
        Self {
            total: 0,
            matched: 0,
            match_percentage: 0.0,
            exact_matches: Vec::new(),
            partial_matches: Vec::new(),
            missing: Vec::new(),
        }
    }
}

/// Match resume skills against one category of job skills.
///
/// Matches are reported in resume iteration order, then job iteration order;
/// no additional sorting is applied.
pub fn match_category(resume: &[SkillToken], job: &[SkillToken]) -> CategoryResult {
    if job.is_empty() {
        return CategoryResult::empty();
    }

    // Normalized job-skill names that appeared in any match record, for the
    // missing computation.
    let mut matched_job_names: HashSet<&str> = HashSet::new();

    // Exact pass: every resume/job pair with equal normalized forms.
    let mut exact_matches = Vec::new();
    for resume_skill in resume {
        for job_skill in job {
            if resume_skill.normalized == job_skill.normalized {
                matched_job_names.insert(job_skill.normalized.as_str());
                exact_matches.push(MatchRecord {
                    resume_skill: resume_skill.raw.clone(),
                    job_skill: job_skill.raw.clone(),
                    match_type: MatchType::Exact,
                });
            }
        }
    }

    // Resume skills consumed by the exact pass. The exclusion is keyed by
    // resume-skill identity alone: once a resume skill exact-matched any job
    // skill in this category it is skipped against all of them, so it cannot
    // also be counted as a partial match elsewhere.
    let exact_resume_names: HashSet<&str> = exact_matches
        .iter()
        .map(|m| m.resume_skill.as_str())
        .collect();

    // Partial pass: substring containment in either direction.
    let mut partial_matches = Vec::new();
    for resume_skill in resume {
        if exact_resume_names.contains(resume_skill.raw.as_str()) {
            continue;
        }
        for job_skill in job {
            if resume_skill.normalized.contains(&job_skill.normalized)
                || job_skill.normalized.contains(&resume_skill.normalized)
            {
                matched_job_names.insert(job_skill.normalized.as_str());
                partial_matches.push(MatchRecord {
                    resume_skill: resume_skill.raw.clone(),
                    job_skill: job_skill.raw.clone(),
                    match_type: MatchType::Partial,
                });
            }
        }
    }

    let missing: Vec<String> = job
        .iter()
        .filter(|j| !matched_job_names.contains(j.normalized.as_str()))
        .map(|j| j.raw.clone())
        .collect();

    let total = job.len();
    let matched = exact_matches.len() + partial_matches.len();

    debug!(
        "category matched {}/{} ({} exact, {} partial, {} missing)",
        matched,
        total,
        exact_matches.len(),
        partial_matches.len(),
        missing.len()
    );

    CategoryResult {
        total,
        matched,
        match_percentage: score::percentage(matched, total),
        exact_matches,
        partial_matches,
        missing,
    }
}
