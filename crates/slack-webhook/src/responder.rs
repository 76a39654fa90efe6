//! Demo conversation run on top of a driver.

use chat_driver::{Button, Driver, Message, Question, Reply};

/// Callback id of the demo prompt.
pub const HOW_ARE_YOU: &str = "how_are_you";

/// The prompt sent when a user types `question`.
pub fn how_are_you() -> Question {
    Question::create("How are you doing?")
        .with_fallback("Unable to show buttons")
        .with_callback_id(HOW_ARE_YOU)
        .add_button(Button::create("Great").with_value("great"))
        .add_button(Button::create("Good").with_value("good"))
}

/// Decide what to send back for the request behind `driver`, if anything.
///
/// Returns the reply together with the message it answers.
pub fn respond(driver: &dyn Driver) -> Option<(Reply, Message)> {
    if !driver.matches_request() || driver.is_bot() {
        return None;
    }

    let origin = driver.messages().into_iter().next()?;

    let answer = driver.conversation_answer();
    if answer.is_interactive_reply() {
        return Some((format!("You picked {}", answer.text()).into(), origin));
    }

    let text = origin.text().trim();
    if text.is_empty() {
        return None;
    }

    let reply = if text.eq_ignore_ascii_case("question") {
        how_are_you().into()
    } else {
        text.into()
    };

    Some((reply, origin))
}
