//! Error types for the webhook service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chat_driver::DriverError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Malformed payload: {0}")]
    BadPayload(String),

    #[error("Slack API error: {0}")]
    SlackApi(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            WebhookError::BadPayload(_) => (StatusCode::BAD_REQUEST, "BAD_PAYLOAD"),
            WebhookError::SlackApi(_) => (StatusCode::BAD_GATEWAY, "SLACK_API_ERROR"),
            WebhookError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DriverError> for WebhookError {
    fn from(e: DriverError) -> Self {
        match e {
            DriverError::Parse(e) => WebhookError::BadPayload(e.to_string()),
            DriverError::Http(e) => WebhookError::SlackApi(e.to_string()),
            DriverError::Api(msg) => WebhookError::SlackApi(msg),
            DriverError::Json(e) => WebhookError::Internal(e.to_string()),
        }
    }
}
