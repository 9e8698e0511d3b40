//! Terminal chat session: one websocket, stdin in, rendered messages out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the browser widget. Each inbound text frame is one bot message,
//! each non-empty input line is one user message. Messages go through the
//! shared `MessageLog`, so detection, normalization and copy controls behave
//! exactly as they do in the widget.
//!
//! The connection is opened once and never re-established; when it closes the
//! session ends.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard};

use futures_util::{SinkExt, StreamExt};
use messages::copy::{CopyControl, CopyHost, copy_with_feedback};
use messages::message::outbound_text;
use messages::{ChatMessage, MessageLog};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::clipboard::Osc52Clipboard;
use crate::error::ClientError;
use crate::terminal::{ColorMode, SharedWriter, format_copy_state, format_message};

/// One line of user input, interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputCommand {
    /// Send this (trimmed) text.
    Send(String),
    /// Copy the newest copyable payload.
    Copy,
    Quit,
    /// Blank line; nothing to do.
    Empty,
}

/// Interpret one input line.
#[must_use]
pub fn parse_input(line: &str) -> InputCommand {
    match outbound_text(line) {
        None => InputCommand::Empty,
        Some(text) => match text.as_str() {
            "/copy" => InputCommand::Copy,
            "/quit" | "/exit" => InputCommand::Quit,
            _ => InputCommand::Send(text),
        },
    }
}

/// Session state shared with spawned copy tasks.
#[derive(Clone)]
pub struct Session {
    log: Arc<Mutex<MessageLog>>,
    out: SharedWriter,
    clipboard: Osc52Clipboard,
    mode: ColorMode,
}

impl Session {
    pub fn new(out: SharedWriter, clipboard: Osc52Clipboard, mode: ColorMode) -> Self {
        Self { log: Arc::new(Mutex::new(MessageLog::new())), out, clipboard, mode }
    }

    fn lock_log(&self) -> Result<MutexGuard<'_, MessageLog>, ClientError> {
        self.log.lock().map_err(|_| ClientError::LogPoisoned)
    }

    /// Snapshot of the message log.
    pub fn log(&self) -> Result<MessageLog, ClientError> {
        Ok(self.lock_log()?.clone())
    }

    /// Render, record and print one message.
    pub fn append(&self, message: ChatMessage) -> Result<usize, ClientError> {
        let (index, text) = {
            let mut log = self.lock_log()?;
            let index = log.push(message);
            let text = log
                .get(index)
                .map(|node| format_message(node, self.mode))
                .unwrap_or_default();
            (index, text)
        };
        self.out.write_str(&text)?;
        Ok(index)
    }

    /// Start copying the newest copyable payload in the background.
    ///
    /// The outcome label prints as soon as the write settles; the control
    /// returns to idle after the reset delay without further output.
    pub fn copy_latest(&self) -> Result<(), ClientError> {
        let Some(index) = self.lock_log()?.latest_copyable() else {
            self.out.write_str("nothing to copy yet\n")?;
            return Ok(());
        };

        let slot = LogSlot { log: Arc::clone(&self.log), index };
        let clipboard = self.clipboard.clone();
        let out = self.out.clone();
        tokio::spawn(async move {
            copy_with_feedback(&slot, &clipboard, |delay| {
                if let Some(state) = slot.update(|control| control.state()) {
                    if let Err(e) = out.write_str(&format!("{}\n", format_copy_state(state))) {
                        tracing::warn!(error = %e, "failed to print copy state");
                    }
                }
                tokio::time::sleep(delay)
            })
            .await;
            tracing::debug!(index, "copy control reset");
        });
        Ok(())
    }
}

/// Copy control of node `index` inside the shared log.
struct LogSlot {
    log: Arc<Mutex<MessageLog>>,
    index: usize,
}

impl CopyHost for LogSlot {
    fn update<R>(&self, f: impl FnOnce(&mut CopyControl) -> R) -> Option<R> {
        let mut log = self.log.lock().ok()?;
        log.copy_control_mut(self.index).map(f)
    }
}

/// Connect to `url` and run the session until the socket closes, input
/// ends, or the user quits.
pub async fn run<I>(url: &str, input: I, session: &Session) -> Result<(), ClientError>
where
    I: AsyncBufRead + Unpin,
{
    let (ws, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::WsConnect(Box::new(e)))?;
    tracing::info!(%url, "connected");

    let (mut ws_write, mut ws_read) = ws.split();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            frame = ws_read.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    session.append(ChatMessage::bot(text.as_str()))?;
                }
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("connection closed by server");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "websocket receive failed");
                    break;
                }
            },
            line = lines.next_line() => match line? {
                None => break,
                Some(line) => match parse_input(&line) {
                    InputCommand::Empty => {}
                    InputCommand::Quit => break,
                    InputCommand::Copy => session.copy_latest()?,
                    InputCommand::Send(text) => {
                        session.append(ChatMessage::user(text.as_str()))?;
                        ws_write
                            .send(Message::text(text))
                            .await
                            .map_err(|e| ClientError::WsSend(Box::new(e)))?;
                    }
                },
            },
        }
    }

    if let Err(e) = ws_write.close().await {
        tracing::debug!(error = %e, "websocket close failed");
    }
    Ok(())
}
