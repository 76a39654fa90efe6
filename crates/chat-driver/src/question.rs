//! Structured prompts with selectable buttons.

use serde::Serialize;

/// Field name a button reports its value under when none is given.
pub const DEFAULT_BUTTON_NAME: &str = "answer";

/// A selectable option of a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    name: String,
    text: String,
    #[serde(rename = "type")]
    kind: String,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
}

impl Button {
    /// Create a button labelled `text`; its value defaults to the label.
    pub fn create(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            name: DEFAULT_BUTTON_NAME.to_string(),
            value: text.clone(),
            text,
            kind: "button".to_string(),
            style: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Visual style hint, e.g. `primary` or `danger`.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A prompt offering a list of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_id: Option<String>,
    #[serde(rename = "actions")]
    buttons: Vec<Button>,
}

impl Question {
    pub fn create(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fallback: None,
            callback_id: None,
            buttons: Vec::new(),
        }
    }

    pub fn add_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn add_buttons(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.buttons.extend(buttons);
        self
    }

    /// Plain-text summary shown by clients that cannot render buttons.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Identifier echoed back by the platform when a button is clicked.
    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn callback_id(&self) -> Option<&str> {
        self.callback_id.as_deref()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Encode as the JSON list `[question]` carried in an `attachments` field.
    pub fn to_attachments(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&[self])
    }
}
