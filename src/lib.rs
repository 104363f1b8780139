//! Skillfit library: skill match and fit scoring engine

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{Result, SkillFitError};
pub use matching::SkillMatcher;
