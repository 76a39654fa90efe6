//! Slack Events API and interactive message support.

mod driver;
mod payload;

pub use driver::{SlackDriver, POST_MESSAGE_URL};
pub use payload::{
    Action, ActionText, Event, IdRef, InteractivePayload, SlackPayload,
    INTERACTIVE_PAYLOAD_FIELD,
};
