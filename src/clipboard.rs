//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! Most modern terminal emulators (and tmux with `set-clipboard on`) copy the
//! base64 payload of `ESC ] 52 ; c ; <data> BEL` into the system clipboard.
//! Terminals without support silently ignore it, so a successful write only
//! means the sequence reached the terminal.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use messages::copy::{Clipboard, ClipboardError};

use crate::terminal::SharedWriter;

#[derive(Clone)]
pub struct Osc52Clipboard {
    sink: SharedWriter,
}

impl Osc52Clipboard {
    pub fn new(sink: SharedWriter) -> Self {
        Self { sink }
    }
}

/// The OSC 52 "set clipboard" sequence for `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl Clipboard for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.sink
            .write_str(&osc52_sequence(text))
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}
