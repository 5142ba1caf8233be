//! Assistant conversation history.
//!
//! Lives in app context so the transcript survives navigating away from the
//! chat page and back.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::gateway::ApiError;
use crate::net::types::ChatReply;

pub const EMPTY_MESSAGE_ERROR: &str = "Message cannot be empty";
pub const BOT_FALLBACK_REPLY: &str = "Sorry, I couldn't process that message.";
pub const BOT_ERROR_REPLY: &str = "There was an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    fn new(text: String, sender: Sender) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), text, sender }
    }
}

/// State for the chat page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl ChatState {
    /// Append the user's message and mark a reply as outstanding.
    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage::new(text.to_owned(), Sender::User));
        self.pending = true;
    }

    /// Append the assistant's reply, or the generic error text on failure.
    pub fn push_reply(&mut self, reply: Result<ChatReply, ApiError>) {
        let text = match reply {
            Ok(reply) => reply_text(&reply),
            Err(_) => BOT_ERROR_REPLY.to_owned(),
        };
        self.messages.push(ChatMessage::new(text, Sender::Bot));
        self.pending = false;
    }
}

/// Trim the input and reject empty messages.
///
/// # Errors
///
/// Returns [`EMPTY_MESSAGE_ERROR`] when nothing but whitespace was typed.
pub fn validate_message(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_MESSAGE_ERROR);
    }
    Ok(trimmed.to_owned())
}

/// Text to show for a successful reply; blank replies fall back to an apology.
pub fn reply_text(reply: &ChatReply) -> String {
    reply
        .response
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(BOT_FALLBACK_REPLY)
        .to_owned()
}
