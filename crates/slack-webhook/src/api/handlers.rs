//! HTTP request handlers.

use super::types::{ChallengeResponse, HealthResponse, UrlVerification};
use super::AppState;
use crate::error::WebhookError;
use crate::responder::respond;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chat_driver::{
    Driver, IncomingRequest, ReplyParameters, SlackDriver, WebhookRequest,
};
use tracing::{debug, info};

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Slack Events API and interactivity endpoint.
///
/// Requests the driver does not recognise, and bot-authored events, are
/// acknowledged with an empty 200 so Slack does not redeliver them.
pub async fn slack_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, WebhookError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let request = WebhookRequest::from_parts(content_type, body.to_vec());

    if let Some(challenge) = url_verification_challenge(&request) {
        info!("Answering Slack URL verification");
        return Ok(Json(ChallengeResponse { challenge }).into_response());
    }

    let driver = SlackDriver::new(&request, state.driver_config.clone(), state.http.clone())?;

    if !driver.matches_request() {
        debug!("Request is not a Slack user event");
        return Ok(StatusCode::OK.into_response());
    }

    if driver.is_bot() {
        debug!("Ignoring bot event");
        return Ok(StatusCode::OK.into_response());
    }

    if let Some((reply, origin)) = respond(&driver) {
        info!(
            user = %origin.user_id(),
            channel = %origin.channel_id(),
            "Replying to Slack message"
        );
        driver
            .reply(reply, &origin, ReplyParameters::new())
            .await?;
    }

    Ok(StatusCode::OK.into_response())
}

fn url_verification_challenge(request: &WebhookRequest) -> Option<String> {
    let verification: UrlVerification = serde_json::from_slice(request.content()).ok()?;
    (verification.kind == "url_verification").then_some(verification.challenge)
}
