//! Driver errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    /// The inbound request body (or its `payload` field) is not valid JSON.
    #[error("Malformed request payload: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),
}
