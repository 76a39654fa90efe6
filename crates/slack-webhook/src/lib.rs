//! Slack webhook service.
//!
//! Receives Slack Events API and interactivity requests, normalizes each one
//! through a per-request [`chat_driver::SlackDriver`], and replies via the
//! Slack Web API.

pub mod api;
pub mod config;
pub mod error;
pub mod responder;

pub use config::Config;
pub use error::WebhookError;
