//! Input loading for the CLI driver
//!
//! The engine expects flat sequences of skill strings on entry; producing
//! those from real documents is an upstream collaborator's job. These loaders
//! cover the simple file shapes the CLI accepts: JSON skill lists (bare array
//! or `{"skills": [...]}`), plain-text lists, and JSON job profiles whose
//! skill fields may legitimately be empty or missing.

use crate::error::{Result, SkillFitError};
use serde::Deserialize;
use std::path::Path;

/// Job-side input: required and preferred skill lists as extracted by an
/// upstream job-description parser. Both default to empty, which downstream
/// triggers the demo fallback rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobProfile {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SkillListDocument {
    Flat(Vec<String>),
    Wrapped { skills: Vec<String> },
}

/// Load a flat resume skill list from a `.json`, `.txt`, or `.md` file.
///
/// Text files take one skill per line; lines may also be comma-separated.
/// Blank lines are skipped here, and finer cleaning (trimming, deduping)
/// happens inside the engine.
pub fn load_skill_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;

    match file_extension(path)?.as_str() {
        "json" => {
            let doc: SkillListDocument = serde_json::from_str(&content)?;
            Ok(match doc {
                SkillListDocument::Flat(skills) => skills,
                SkillListDocument::Wrapped { skills } => skills,
            })
        }
        "txt" | "md" => Ok(parse_text_skill_list(&content)),
        other => Err(SkillFitError::UnsupportedFormat(format!(
            "{} (skill lists support json, txt, md)",
            other
        ))),
    }
}

/// Load a job profile from a `.json` file.
pub fn load_job_profile(path: &Path) -> Result<JobProfile> {
    let content = std::fs::read_to_string(path)?;

    match file_extension(path)?.as_str() {
        "json" => Ok(serde_json::from_str(&content)?),
        other => Err(SkillFitError::UnsupportedFormat(format!(
            "{} (job profiles support json)",
            other
        ))),
    }
}

fn parse_text_skill_list(content: &str) -> Vec<String> {
    content
        .lines()
        .flat_map(|line| line.split(','))
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}

fn file_extension(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .ok_or_else(|| {
            SkillFitError::InvalidInput(format!("{} has no file extension", path.display()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_skill_list_lines_and_commas() {
        let content = "Python\nReact, Node.js\n\n  Docker  \n";
        let skills = parse_text_skill_list(content);
        assert_eq!(skills, vec!["Python", "React", "Node.js", "Docker"]);
    }

    #[test]
    fn test_job_profile_fields_default_to_empty() {
        let profile: JobProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.required_skills.is_empty());
        assert!(profile.preferred_skills.is_empty());

        let profile: JobProfile =
            serde_json::from_str(r#"{"required_skills": ["SQL"]}"#).unwrap();
        assert_eq!(profile.required_skills, vec!["SQL"]);
        assert!(profile.preferred_skills.is_empty());
    }

    #[test]
    fn test_skill_list_document_accepts_both_shapes() {
        let flat: SkillListDocument = serde_json::from_str(r#"["Python", "Go"]"#).unwrap();
        let wrapped: SkillListDocument =
            serde_json::from_str(r#"{"skills": ["Python", "Go"]}"#).unwrap();

        for doc in [flat, wrapped] {
            let skills = match doc {
                SkillListDocument::Flat(s) | SkillListDocument::Wrapped { skills: s } => s,
            };
            assert_eq!(skills, vec!["Python", "Go"]);
        }
    }
}
