use std::path::PathBuf;

use shared_models::error::AppError;
use thiserror::Error;

/// Failures while building a rule set. Classification itself never fails.
#[derive(Error, Debug)]
pub enum ChatbotError {
    #[error("Rule {index} is invalid: {reason}")]
    InvalidRule { index: usize, reason: String },

    #[error("Rule {index} produced an invalid pattern: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("Fallback response must not be blank")]
    BlankFallback,

    #[error("Could not read rules file {path}: {source}")]
    RulesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rules file is not a valid rules document: {0}")]
    RulesFormat(#[from] serde_json::Error),
}

impl From<ChatbotError> for AppError {
    fn from(err: ChatbotError) -> Self {
        match err {
            ChatbotError::RulesFile { .. } => AppError::Internal(err.to_string()),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}
