//! Slack inbound payload shapes.

use crate::error::DriverError;
use crate::request::IncomingRequest;
use crate::types::{Answer, Message};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Form field carrying the JSON of an interactive (button click) payload.
pub const INTERACTIVE_PAYLOAD_FIELD: &str = "payload";

#[derive(Debug, Clone, Deserialize)]
struct EventEnvelope {
    event: Event,
}

/// An Events API event, the `event` object of the request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    pub user: Option<String>,
    pub text: Option<String>,
    pub channel: Option<String>,
    pub bot_id: Option<String>,
}

/// A button click on a previously posted message.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractivePayload {
    pub user: IdRef,
    pub channel: Option<IdRef>,
    #[serde(default)]
    pub actions: Vec<Action>,
    pub text: Option<String>,
    pub bot_id: Option<String>,
    pub callback_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    pub name: Option<String>,
    pub value: Option<String>,
    pub text: Option<ActionText>,
}

/// Action labels are plain strings on attachment buttons and
/// `{"type": "plain_text", "text": ...}` objects on block elements.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ActionText {
    Plain(String),
    Rich { text: String },
}

impl Action {
    pub fn label(&self) -> Option<&str> {
        match self.text.as_ref()? {
            ActionText::Plain(text) => Some(text.as_str()),
            ActionText::Rich { text } => Some(text.as_str()),
        }
    }
}

/// A request body decoded once into the shape it turned out to be.
#[derive(Debug, Clone)]
pub enum SlackPayload {
    Event(Event),
    Interactive(InteractivePayload),
    Unrecognized,
}

impl SlackPayload {
    /// Decode the `payload` form field if present, otherwise the raw body.
    ///
    /// An empty body is `Unrecognized`; invalid JSON is an error.
    pub fn parse<R>(request: &R) -> Result<Self, DriverError>
    where
        R: IncomingRequest + ?Sized,
    {
        let raw = match request.get(INTERACTIVE_PAYLOAD_FIELD) {
            Some(payload) => payload.as_bytes(),
            None => request.content(),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            debug!("Empty request body");
            return Ok(SlackPayload::Unrecognized);
        }

        let value: Value = serde_json::from_slice(raw).map_err(DriverError::Parse)?;
        Ok(Self::from_value(&value))
    }

    /// Try the event envelope first, then the interactive shape.
    ///
    /// Both shapes must be JSON objects. Derived struct decoding also accepts
    /// sequences, so the object check comes first.
    pub fn from_value(value: &Value) -> Self {
        if is_object_with(value, "event") {
            if let Ok(envelope) = EventEnvelope::deserialize(value) {
                debug!("Decoded event payload");
                return SlackPayload::Event(envelope.event);
            }
        }

        if is_object_with(value, "user") {
            if let Ok(payload) = InteractivePayload::deserialize(value) {
                debug!(callback_id = ?payload.callback_id, "Decoded interactive payload");
                return SlackPayload::Interactive(payload);
            }
        }

        debug!("Payload matches no known Slack shape");
        SlackPayload::Unrecognized
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            SlackPayload::Event(event) => event.user.as_deref(),
            SlackPayload::Interactive(payload) => Some(payload.user.id.as_str()),
            SlackPayload::Unrecognized => None,
        }
    }

    pub fn channel_id(&self) -> Option<&str> {
        match self {
            SlackPayload::Event(event) => event.channel.as_deref(),
            SlackPayload::Interactive(payload) => {
                payload.channel.as_ref().map(|c| c.id.as_str())
            }
            SlackPayload::Unrecognized => None,
        }
    }

    pub fn is_bot(&self) -> bool {
        match self {
            SlackPayload::Event(event) => event.bot_id.is_some(),
            SlackPayload::Interactive(payload) => payload.bot_id.is_some(),
            SlackPayload::Unrecognized => false,
        }
    }

    fn raw_text(&self) -> Option<&str> {
        match self {
            SlackPayload::Event(event) => event.text.as_deref(),
            SlackPayload::Interactive(payload) => payload.text.as_deref(),
            SlackPayload::Unrecognized => None,
        }
    }

    /// Message text with bot-authored text suppressed.
    pub fn text(&self) -> &str {
        if self.is_bot() {
            return "";
        }
        self.raw_text().unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<Message> {
        if let SlackPayload::Unrecognized = self {
            return Vec::new();
        }

        vec![Message::new(
            self.text(),
            self.user_id().unwrap_or_default(),
            self.channel_id().unwrap_or_default(),
        )]
    }

    pub fn answer(&self) -> Answer {
        match self {
            SlackPayload::Interactive(payload) => interactive_answer(payload),
            _ => Answer::new(self.raw_text().unwrap_or_default()),
        }
    }
}

fn is_object_with(value: &Value, key: &str) -> bool {
    value.get(key).is_some_and(Value::is_object)
}

// First action wins when several are present.
fn interactive_answer(payload: &InteractivePayload) -> Answer {
    let action = payload.actions.first();
    let value = action.and_then(|a| a.value.as_deref());

    let text = payload
        .text
        .as_deref()
        .or_else(|| action.and_then(Action::label))
        .or(value)
        .unwrap_or_default();

    let mut answer = Answer::new(text)
        .with_value(value.unwrap_or(text))
        .interactive();

    if let Some(callback_id) = &payload.callback_id {
        answer = answer.with_callback_id(callback_id.as_str());
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::WebhookRequest;
    use serde_json::json;

    fn parse(value: Value) -> SlackPayload {
        SlackPayload::from_value(&value)
    }

    #[test]
    fn test_event_without_user_is_still_an_event() {
        let payload = parse(json!({"event": {"text": "bar", "bot_id": "B1"}}));
        assert!(matches!(payload, SlackPayload::Event(_)));
        assert!(payload.user_id().is_none());
        assert!(payload.is_bot());
        assert_eq!(payload.text(), "");
    }

    #[test]
    fn test_unknown_shape_is_unrecognized() {
        let payload = parse(json!({"type": "url_verification", "challenge": "abc"}));
        assert!(matches!(payload, SlackPayload::Unrecognized));
        assert!(payload.messages().is_empty());
        assert!(!payload.is_bot());
    }

    #[test]
    fn test_non_object_event_falls_through() {
        let payload = parse(json!({"event": "message"}));
        assert!(matches!(payload, SlackPayload::Unrecognized));
    }

    #[test]
    fn test_interactive_requires_user_id() {
        let payload = parse(json!({"user": {"name": "brautigan"}, "actions": []}));
        assert!(matches!(payload, SlackPayload::Unrecognized));
    }

    #[test]
    fn test_block_action_label() {
        let payload = parse(json!({
            "user": {"id": "U1"},
            "channel": {"id": "C1"},
            "actions": [{
                "action_id": "approve",
                "text": {"type": "plain_text", "text": "Approve"},
                "value": "approve_42"
            }]
        }));

        let answer = payload.answer();
        assert_eq!(answer.text(), "Approve");
        assert_eq!(answer.value(), "approve_42");
        assert!(answer.is_interactive_reply());
        assert!(answer.callback_id().is_none());
    }

    #[test]
    fn test_first_action_wins() {
        let payload = parse(json!({
            "user": {"id": "U1"},
            "actions": [
                {"name": "answer", "value": "first"},
                {"name": "answer", "value": "second"}
            ]
        }));

        assert_eq!(payload.answer().value(), "first");
    }

    #[test]
    fn test_top_level_text_beats_action_label() {
        let payload = parse(json!({
            "user": {"id": "U1"},
            "text": "Sure thing",
            "actions": [{"text": "Yes", "value": "yes"}]
        }));

        let answer = payload.answer();
        assert_eq!(answer.text(), "Sure thing");
        assert_eq!(answer.value(), "yes");
    }

    #[test]
    fn test_action_without_value_uses_text() {
        let payload = parse(json!({
            "user": {"id": "U1"},
            "actions": [{"text": "Maybe"}]
        }));

        let answer = payload.answer();
        assert_eq!(answer.text(), "Maybe");
        assert_eq!(answer.value(), "Maybe");
    }

    #[test]
    fn test_interactive_without_actions() {
        let payload = parse(json!({"user": {"id": "U1"}, "channel": {"id": "C1"}}));

        let answer = payload.answer();
        assert_eq!(answer.text(), "");
        assert_eq!(answer.value(), "");
        assert_eq!(payload.messages()[0].channel_id(), "C1");
    }

    #[test]
    fn test_array_body_is_unrecognized() {
        let request = WebhookRequest::from_json(r#"[["U1","hi","C1",null]]"#);
        let payload = SlackPayload::parse(&request).unwrap();
        assert!(matches!(payload, SlackPayload::Unrecognized));
        assert!(payload.user_id().is_none());
        assert!(payload.messages().is_empty());
    }

    #[test]
    fn test_array_fields_do_not_match() {
        let payload = parse(json!({"event": ["U1", "hi", "C1", null]}));
        assert!(matches!(payload, SlackPayload::Unrecognized));

        let payload = parse(json!({"user": ["U1"], "actions": []}));
        assert!(matches!(payload, SlackPayload::Unrecognized));
    }

    #[test]
    fn test_interactive_bot_suppresses_text() {
        let request = WebhookRequest::default().with_field(
            "payload",
            json!({
                "user": {"id": "U1"},
                "channel": {"id": "C1"},
                "bot_id": "B1",
                "text": "automated"
            })
            .to_string(),
        );
        let payload = SlackPayload::parse(&request).unwrap();

        assert!(matches!(payload, SlackPayload::Interactive(_)));
        assert!(payload.is_bot());
        assert_eq!(payload.text(), "");
        assert_eq!(payload.messages()[0].text(), "");
        assert_eq!(payload.messages()[0].user_id(), "U1");
    }

    #[test]
    fn test_empty_body_is_unrecognized() {
        let request = WebhookRequest::from_json("  \n");
        let payload = SlackPayload::parse(&request).unwrap();
        assert!(matches!(payload, SlackPayload::Unrecognized));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let request = WebhookRequest::from_json("{not json");
        let result = SlackPayload::parse(&request);
        assert!(matches!(result, Err(DriverError::Parse(_))));
    }

    #[test]
    fn test_malformed_payload_field_is_parse_error() {
        let request = WebhookRequest::default().with_field("payload", "{");
        let result = SlackPayload::parse(&request);
        assert!(matches!(result, Err(DriverError::Parse(_))));
    }

    #[test]
    fn test_payload_field_takes_precedence_over_body() {
        let request = WebhookRequest::from_json(r#"{"event":{"user":"U_BODY"}}"#)
            .with_field("payload", r#"{"user":{"id":"U_FIELD"}}"#);

        let payload = SlackPayload::parse(&request).unwrap();
        assert_eq!(payload.user_id(), Some("U_FIELD"));
    }
}
