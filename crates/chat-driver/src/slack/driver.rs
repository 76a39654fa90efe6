//! Slack driver.

use super::payload::SlackPayload;
use crate::config::{DriverConfig, SLACK_TOKEN_KEY};
use crate::driver::{Driver, Reply, ReplyParameters};
use crate::error::DriverError;
use crate::http::{FormBody, Headers, HttpClient};
use crate::request::IncomingRequest;
use crate::types::{Answer, Message};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Web API method used for every reply.
pub const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Driver for Slack Events API and interactive message requests.
///
/// Built per inbound request; the request is decoded once in [`SlackDriver::new`].
pub struct SlackDriver {
    payload: SlackPayload,
    config: DriverConfig,
    http: Arc<dyn HttpClient>,
}

impl SlackDriver {
    pub const NAME: &'static str = "Slack";

    /// Decode `request` and bind it to this driver.
    ///
    /// Fails only when the body (or its `payload` field) is not valid JSON.
    pub fn new<R>(
        request: &R,
        config: DriverConfig,
        http: Arc<dyn HttpClient>,
    ) -> Result<Self, DriverError>
    where
        R: IncomingRequest + ?Sized,
    {
        let payload = SlackPayload::parse(request)?;
        Ok(Self {
            payload,
            config,
            http,
        })
    }

    pub fn payload(&self) -> &SlackPayload {
        &self.payload
    }

    fn build_body(
        &self,
        content: Reply,
        origin: &Message,
        extra: ReplyParameters,
    ) -> Result<FormBody, DriverError> {
        let mut body = FormBody::new();
        body.insert(
            "token".into(),
            self.config.get(SLACK_TOKEN_KEY).unwrap_or_default().into(),
        );
        body.insert("channel".into(), origin.channel_id().into());

        match content {
            Reply::Text(text) => {
                body.insert("text".into(), text);
            }
            Reply::Question(question) => {
                body.insert("text".into(), String::new());
                body.insert("attachments".into(), question.to_attachments()?);
            }
        }

        body.extend(extra);
        Ok(body)
    }
}

#[async_trait]
impl Driver for SlackDriver {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn matches_request(&self) -> bool {
        self.payload.user_id().is_some()
    }

    fn messages(&self) -> Vec<Message> {
        self.payload.messages()
    }

    fn is_bot(&self) -> bool {
        self.payload.is_bot()
    }

    fn conversation_answer(&self) -> Answer {
        self.payload.answer()
    }

    #[instrument(skip(self, content, origin, extra), fields(channel = %origin.channel_id()))]
    async fn reply(
        &self,
        content: Reply,
        origin: &Message,
        extra: ReplyParameters,
    ) -> Result<(), DriverError> {
        let body = self.build_body(content, origin, extra)?;
        self.http.post(POST_MESSAGE_URL, &Headers::new(), &body).await?;
        debug!("Reply posted");
        Ok(())
    }
}
