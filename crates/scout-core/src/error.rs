//! Error Types

use thiserror::Error;

/// Result type alias for scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Pipeline error types
#[derive(Error, Debug)]
pub enum ScoutError {
    /// AI gateway returned a failure response
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// AI gateway unreachable or not responding
    #[error("Gateway unavailable: {0}")]
    GatewayUnavailable(String),

    /// Rate limited or quota exhausted
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl ScoutError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            ScoutError::Gateway(_) | ScoutError::GatewayUnavailable(_) => {
                "Error connecting to AI services.".into()
            }
            ScoutError::RateLimited(_) => {
                "You've made too many requests. Please wait a moment.".into()
            }
            ScoutError::Auth(_) | ScoutError::Config(_) => {
                "The AI service is not configured correctly.".into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for ScoutError {
    fn from(err: anyhow::Error) -> Self {
        ScoutError::Other(err.to_string())
    }
}
