//! Transient chat message model.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    /// Typed locally and sent to the endpoint.
    User,
    /// Received from the endpoint.
    Bot,
}

impl Sender {
    /// Role class applied to the rendered node next to `message`.
    #[must_use]
    pub fn role_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single chat turn. Consumed once by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot }
    }
}

/// Normalize raw input for sending: trimmed, `None` when nothing is left.
#[must_use]
pub fn outbound_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
