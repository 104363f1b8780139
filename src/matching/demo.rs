//! Demo fallback reference profile
//!
//! When upstream job parsing yields no skill data at all, the engine matches
//! against this canonical profile instead of returning all-zero scores. The
//! substitution is a designed fallback, never an error path, and results
//! built from it carry `demo_mode = true`.

use serde::{Deserialize, Serialize};

/// Reference job profile used when both real job skill lists are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoProfile {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    /// Human-readable note attached to demo-mode reports.
    pub note: String,
}

impl Default for DemoProfile {
    fn default() -> Self {
        Self {
            required_skills: vec![
                "JavaScript".to_string(),
                "Python".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
            ],
            preferred_skills: vec![
                "Docker".to_string(),
                "AWS".to_string(),
                "TypeScript".to_string(),
                "Git".to_string(),
            ],
            note: "This is a demo analysis using sample job requirements. \
                   For accurate matching, supply a job profile with extracted skill data."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_non_degenerate() {
        let profile = DemoProfile::default();
        assert!(!profile.required_skills.is_empty());
        assert!(!profile.preferred_skills.is_empty());
        assert!(!profile.note.is_empty());
    }
}
