//! Error types for prediction requests.

use thiserror::Error;

/// Why a prediction request produced no structure. All variants are terminal.
#[derive(Error, Debug)]
pub enum PredictionError {
    /// The service answered with a status other than 200
    #[error("Error: {status} - {body}")]
    Service { status: u16, body: String },

    /// No complete response within the configured bound
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection, TLS, or body-read failure
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid predictor configuration: {0}")]
    Config(#[from] validator::ValidationErrors),
}

impl PredictionError {
    /// HTTP status of a service error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
