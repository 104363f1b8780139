//! Error handling for the skillfit application
//!
//! The matching engine itself is total over its inputs and never fails; the
//! variants here cover the crate's edges only (file loading, configuration,
//! output formatting).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillFitError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillFitError {
    fn from(err: anyhow::Error) -> Self {
        SkillFitError::InvalidInput(err.to_string())
    }
}
