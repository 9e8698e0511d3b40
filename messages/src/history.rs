//! Chat history container.
//!
//! Owns rendered nodes in arrival order. Appending always moves the scroll
//! anchor to the newest node; shells mirror the anchor into their own scroll
//! position (the widget sets `scrollTop = scrollHeight`).

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::copy::CopyControl;
use crate::message::ChatMessage;
use crate::render::{self, RenderedMessage};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<RenderedMessage>,
    scroll_anchor: Option<usize>,
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `message` and append it. Returns the new node's index.
    pub fn push(&mut self, message: ChatMessage) -> usize {
        self.append(render::render(message))
    }

    /// Append an already-rendered node and scroll to it.
    pub fn append(&mut self, node: RenderedMessage) -> usize {
        self.messages.push(node);
        let index = self.messages.len() - 1;
        self.scroll_anchor = Some(index);
        index
    }

    #[must_use]
    pub fn messages(&self) -> &[RenderedMessage] {
        &self.messages
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RenderedMessage> {
        self.messages.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Index the view should be scrolled to: always the newest node.
    #[must_use]
    pub fn scroll_anchor(&self) -> Option<usize> {
        self.scroll_anchor
    }

    /// Mutable access to the copy control of node `index`, if it has one.
    pub fn copy_control_mut(&mut self, index: usize) -> Option<&mut CopyControl> {
        self.messages.get_mut(index).and_then(|node| node.copy.as_mut())
    }

    /// Index of the newest node carrying a copy control.
    #[must_use]
    pub fn latest_copyable(&self) -> Option<usize> {
        self.messages.iter().rposition(|node| node.copy.is_some())
    }
}
