//! Platform-agnostic message types.

/// A normalized inbound message.
///
/// Built by a driver from one inbound event. `text` is empty when the sender
/// is an automated agent or the event carried no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    user_id: String,
    channel_id: String,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        user_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            user_id: user_id.into(),
            channel_id: channel_id.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }
}

/// A user's response to a previously posted prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answer {
    text: String,
    value: String,
    callback_id: Option<String>,
    interactive: bool,
}

impl Answer {
    /// Create an answer whose value is its text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            text,
            callback_id: None,
            interactive: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }

    /// Mark the answer as coming from a button click.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Human-readable label of the choice, or the raw reply text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Machine value of the chosen option.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Callback id of the prompt this answer responds to, if any.
    pub fn callback_id(&self) -> Option<&str> {
        self.callback_id.as_deref()
    }

    pub fn is_interactive_reply(&self) -> bool {
        self.interactive
    }
}
