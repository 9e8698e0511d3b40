//! Chat history and connection state.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::{RwSignal, Update};
use messages::copy::{CopyControl, CopyHost};
use messages::message::outbound_text;
use messages::{ChatMessage, MessageLog};

/// Websocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    /// Header text for the status indicator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Offline",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
        }
    }
}

/// State for the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub log: MessageLog,
    pub connection: ConnectionStatus,
}

impl ChatState {
    /// Append one inbound frame as a bot message. A frame arriving proves
    /// the socket is open.
    pub fn receive(&mut self, text: impl Into<String>) -> usize {
        self.mark_open();
        self.log.push(ChatMessage::bot(text))
    }

    /// Promote `Connecting` to `Connected` once the socket has carried traffic.
    pub fn mark_open(&mut self) {
        if self.connection == ConnectionStatus::Connecting {
            self.connection = ConnectionStatus::Connected;
        }
    }

    /// Turn raw input into an outbound message: trims, records it locally and
    /// returns the text to send. Blank input yields `None` and records nothing.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let text = outbound_text(raw)?;
        self.record_sent(text.as_str());
        Some(text)
    }

    /// Append a message the user just sent.
    pub fn record_sent(&mut self, text: impl Into<String>) -> usize {
        self.log.push(ChatMessage::user(text))
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionStatus::Connected
    }
}

/// Copy control of message `index`, reached through the chat signal.
#[derive(Clone, Copy, Debug)]
pub struct LogCopyHost {
    chat: RwSignal<ChatState>,
    index: usize,
}

impl LogCopyHost {
    pub fn new(chat: RwSignal<ChatState>, index: usize) -> Self {
        Self { chat, index }
    }
}

impl CopyHost for LogCopyHost {
    fn update<R>(&self, f: impl FnOnce(&mut CopyControl) -> R) -> Option<R> {
        self.chat
            .try_update(|c| c.log.copy_control_mut(self.index).map(f))
            .flatten()
    }
}
