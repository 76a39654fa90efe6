//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, warn};

/// Header Slack sets when it redelivers an event it considers unacknowledged.
pub const SLACK_RETRY_HEADER: &str = "x-slack-retry-num";

/// Log each request with its latency, flagging Slack redeliveries.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let retry = request
        .headers()
        .get(SLACK_RETRY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    if let Some(retry) = &retry {
        warn!(%method, %path, %retry, "Slack redelivered a request");
    }

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed();
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, %path, %status, ?elapsed, "Request failed");
    } else {
        debug!(%method, %path, %status, ?elapsed, "Request handled");
    }

    response
}
