//! The driver contract every chat platform implements.

use crate::error::DriverError;
use crate::question::Question;
use crate::types::{Answer, Message};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Extra fields merged over a reply's outbound body, last writer wins.
pub type ReplyParameters = BTreeMap<String, String>;

/// Outgoing reply content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Question(Question),
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Reply::Text(text)
    }
}

impl From<Question> for Reply {
    fn from(question: Question) -> Self {
        Reply::Question(question)
    }
}

/// A platform adapter bound to one inbound request.
///
/// Everything except [`Driver::reply`] is a pure read of the request parsed at
/// construction, so the accessors can be called in any order, any number of times.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Platform name, e.g. "Slack".
    fn name(&self) -> &str;

    /// Whether the request belongs to this platform and names a user.
    fn matches_request(&self) -> bool;

    /// Messages carried by the request, empty if there are none.
    fn messages(&self) -> Vec<Message>;

    /// Whether the request was sent by an automated agent.
    fn is_bot(&self) -> bool;

    /// The user's response to a previously posted prompt.
    fn conversation_answer(&self) -> Answer;

    /// Send `content` back to the channel `origin` came from.
    async fn reply(
        &self,
        content: Reply,
        origin: &Message,
        extra: ReplyParameters,
    ) -> Result<(), DriverError>;
}
