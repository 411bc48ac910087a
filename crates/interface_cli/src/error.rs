//! CLI error handling

use domain_rating::RatingError;
use serde::Serialize;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// Error body written to stdout in JSON output mode
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl CliError {
    /// Short machine-readable error kind
    pub fn error_type(&self) -> &'static str {
        match self {
            CliError::Io(_) => "io_error",
            CliError::Json(_) => "invalid_json",
            CliError::Config(_) => "config_error",
            CliError::Rating(RatingError::MalformedStatement { .. }) => "malformed_statement",
            CliError::Rating(_) => "validation_error",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
        }
    }
}
