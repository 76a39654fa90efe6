//! Inbound webhook requests.

use std::collections::HashMap;
use url::form_urlencoded;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// What a driver needs from the web framework's request object.
pub trait IncomingRequest {
    /// Raw request body.
    fn content(&self) -> &[u8];

    /// A decoded form field.
    fn get(&self, key: &str) -> Option<&str>;
}

/// A buffered webhook request: raw body plus any decoded form fields.
#[derive(Debug, Clone, Default)]
pub struct WebhookRequest {
    body: Vec<u8>,
    form: HashMap<String, String>,
}

impl WebhookRequest {
    /// Request carrying a raw (typically JSON) body and no form fields.
    pub fn from_json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            form: HashMap::new(),
        }
    }

    /// Request with an `application/x-www-form-urlencoded` body.
    ///
    /// Invalid percent-escapes decode lossily; later duplicate keys win.
    pub fn from_form(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let form = form_urlencoded::parse(&body).into_owned().collect();
        Self { body, form }
    }

    /// Pick the decoding from the request's `Content-Type`.
    ///
    /// The media type is compared case-insensitively; parameters are ignored.
    pub fn from_parts(content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        let is_form = content_type
            .and_then(|ct| ct.split(';').next())
            .is_some_and(|media| media.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE));

        if is_form {
            Self::from_form(body)
        } else {
            Self::from_json(body)
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }
}

impl IncomingRequest for WebhookRequest {
    fn content(&self) -> &[u8] {
        &self.body
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.form.get(key).map(String::as_str)
    }
}
