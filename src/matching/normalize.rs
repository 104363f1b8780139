//! Skill token normalization
//!
//! Skills are compared on a trimmed, lowercased form while the original
//! casing is kept for display. Tokens exist only as comparison keys inside a
//! single matching invocation; they are never persisted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A skill name paired with its comparison form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillToken {
    /// Skill name as supplied by the caller.
    pub raw: String,
    /// Trimmed, lowercased form used for all comparisons.
    pub normalized: String,
}

impl SkillToken {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }
}

/// Produce the comparison form of a skill string.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Turn a raw skill list into comparison tokens.
///
/// Empty and whitespace-only entries are dropped, and duplicates (by
/// normalized form) are collapsed to their first occurrence. Input order is
/// otherwise preserved so missing-skill reporting stays stable.
pub fn clean_skill_list(skills: &[String]) -> Vec<SkillToken> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::with_capacity(skills.len());

    for raw in skills {
        let token = SkillToken::new(raw.clone());
        if token.normalized.is_empty() {
            continue;
        }
        if seen.insert(token.normalized.clone()) {
            tokens.push(token);
        }
    }

    tokens
}
