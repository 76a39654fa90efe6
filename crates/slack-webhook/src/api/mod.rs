//! HTTP API for the webhook service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use chat_driver::{DriverConfig, HttpClient};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Drivers are not shared: each request builds its own from this state.
#[derive(Clone)]
pub struct AppState {
    /// Settings handed to every driver
    pub driver_config: DriverConfig,
    /// Outbound HTTP capability used for replies
    pub http: Arc<dyn HttpClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(driver_config: DriverConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            driver_config,
            http,
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/slack/events", post(handlers::slack_events))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
