//! Chat platform drivers.
//!
//! A [`Driver`] adapts one inbound webhook request from a chat platform into
//! platform-agnostic [`Message`]s and [`Answer`]s, and turns replies (plain text
//! or a [`Question`] with buttons) back into the platform's outbound call.

mod config;
mod driver;
mod error;
mod http;
mod question;
mod request;
mod types;

pub mod slack;

pub use config::{DriverConfig, SLACK_TOKEN_KEY};
pub use driver::{Driver, Reply, ReplyParameters};
pub use error::DriverError;
pub use http::{FormBody, Headers, HttpClient, ReqwestHttpClient};
pub use question::{Button, Question, DEFAULT_BUTTON_NAME};
pub use request::{IncomingRequest, WebhookRequest};
pub use slack::SlackDriver;
pub use types::{Answer, Message};
