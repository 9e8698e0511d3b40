//! Terminal rendering of chat messages.
//!
//! Bot messages print from their normalized markdown: prose lines as-is,
//! fenced blocks highlighted with ANSI colors (or raw with `--no-color`).
//! A copy hint follows any message that carries a copy control.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use messages::copy::CopyState;
use messages::detect::FENCE;
use messages::highlight::{fence_tag, highlight_terminal};
use messages::{RenderedMessage, Sender};

/// Whether code blocks get ANSI highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Ansi,
    Plain,
}

/// Output sink shared by the session loop and copy tasks.
#[derive(Clone)]
pub struct SharedWriter(Arc<Mutex<Box<dyn Write + Send>>>);

impl SharedWriter {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Write `text` and flush.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut writer = self
            .0
            .lock()
            .map_err(|_| io::Error::other("terminal output lock poisoned"))?;
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

/// Full terminal text for one rendered node.
#[must_use]
pub fn format_message(node: &RenderedMessage, mode: ColorMode) -> String {
    let mut out = String::new();
    match node.sender {
        Sender::User => {
            out.push_str("you> ");
            out.push_str(&node.source);
            out.push('\n');
        }
        Sender::Bot => {
            out.push_str("bot>\n");
            push_markdown(&mut out, &node.source, mode);
        }
    }
    if let Some(copy) = &node.copy {
        out.push_str(&format_copy_state(copy.state()));
        out.push_str(" (/copy)\n");
    }
    out
}

/// Bracketed copy-control label, e.g. `[✅ Copied!]`.
#[must_use]
pub fn format_copy_state(state: CopyState) -> String {
    format!("[{}]", state.label())
}

fn push_markdown(out: &mut String, markdown: &str, mode: ColorMode) {
    let mut fence: Option<(Option<String>, String)> = None;

    for line in markdown.lines() {
        if let Some(info) = line.trim_start().strip_prefix(FENCE) {
            match fence.take() {
                Some((tag, code)) => push_code(out, &code, tag.as_deref(), mode),
                None => fence = Some((fence_tag(info).map(str::to_owned), String::new())),
            }
            continue;
        }
        let target = match fence.as_mut() {
            Some((_, code)) => code,
            None => &mut *out,
        };
        target.push_str(line);
        target.push('\n');
    }

    // Unterminated fence: print what we have.
    if let Some((tag, code)) = fence {
        push_code(out, &code, tag.as_deref(), mode);
    }
}

fn push_code(out: &mut String, code: &str, tag: Option<&str>, mode: ColorMode) {
    match mode {
        ColorMode::Plain => out.push_str(code),
        ColorMode::Ansi => match highlight_terminal(code, tag) {
            Ok(highlighted) => out.push_str(&highlighted),
            Err(e) => {
                tracing::warn!(error = %e, ?tag, "terminal highlighting failed, printing raw block");
                out.push_str(code);
            }
        },
    }
}
