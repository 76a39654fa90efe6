//! API request and response types.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Slack's one-time endpoint verification request.
#[derive(Debug, Deserialize)]
pub struct UrlVerification {
    #[serde(rename = "type")]
    pub kind: String,
    pub challenge: String,
}

/// Response echoing the verification challenge.
#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub challenge: String,
}
