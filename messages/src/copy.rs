//! Copy-to-clipboard control attached to rendered bot messages.
//!
//! DESIGN
//! ======
//! Each control runs `Idle -> Copying -> {Success, Failure} -> Idle`. Every
//! activation bumps a generation counter; completions and timed resets carry
//! the generation they were issued for and are ignored once a newer activation
//! exists. That leaves at most one effective pending reset per control.
//!
//! The clipboard and the timer are injected so the same driver runs against
//! `navigator.clipboard` + `gloo-timers` in the browser and against the
//! terminal clipboard + `tokio::time` natively.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

/// How long the success/failure label stays before reverting to idle.
pub const RESET_DELAY: Duration = Duration::from_secs(2);

/// Error returned by a [`Clipboard`] write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard API on this platform/context.
    #[error("clipboard is not available")]
    Unavailable,
    /// The platform refused the write (permissions, focus, I/O).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Asynchronous system clipboard writer.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Visible state of a copy control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copying,
    Success,
    Failure,
}

impl CopyState {
    /// Button label for this state.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle | Self::Copying => "📋 Copy YAML",
            Self::Success => "✅ Copied!",
            Self::Failure => "❌ Failed",
        }
    }

    /// Button tooltip for this state.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Idle | Self::Copying => "Copy YAML to clipboard",
            Self::Success => "Copied!",
            Self::Failure => "Failed to copy",
        }
    }
}

/// Proof of a specific activation, handed back on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Pending auto-reset issued when an activation completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Copy control bound at creation to a fixed payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyControl {
    payload: String,
    state: CopyState,
    generation: u64,
}

impl CopyControl {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into(), state: CopyState::Idle, generation: 0 }
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    #[must_use]
    pub fn state(&self) -> CopyState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a write attempt. Allowed from any state; the newest activation wins.
    pub fn begin(&mut self) -> CopyTicket {
        self.generation += 1;
        self.state = CopyState::Copying;
        CopyTicket(self.generation)
    }

    /// Record the outcome of the write started with `ticket`.
    ///
    /// Returns the reset to schedule, or `None` when a newer activation has
    /// superseded this one.
    pub fn finish(&mut self, ticket: CopyTicket, result: &Result<(), ClipboardError>) -> Option<ResetTicket> {
        if ticket.0 != self.generation {
            return None;
        }
        self.state = if result.is_ok() { CopyState::Success } else { CopyState::Failure };
        Some(ResetTicket(self.generation))
    }

    /// Return to idle if `ticket` is still the latest pending reset.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        let settled = matches!(self.state, CopyState::Success | CopyState::Failure);
        if ticket.0 != self.generation || !settled {
            return false;
        }
        self.state = CopyState::Idle;
        true
    }
}

/// Somewhere a [`CopyControl`] lives and can be mutated in place.
///
/// `update` returns `None` when the control is gone (e.g. its view was
/// disposed), which ends the driver quietly.
pub trait CopyHost {
    fn update<R>(&self, f: impl FnOnce(&mut CopyControl) -> R) -> Option<R>;
}

impl CopyHost for RefCell<CopyControl> {
    fn update<R>(&self, f: impl FnOnce(&mut CopyControl) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one activation: write the payload, show the outcome, reset after
/// [`RESET_DELAY`]. Failures are logged and reflected in the state; nothing
/// escapes to the caller.
pub async fn copy_with_feedback<H, C, S, F>(host: &H, clipboard: &C, sleep: S)
where
    H: CopyHost,
    C: Clipboard,
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let Some((ticket, payload)) = host.update(|control| (control.begin(), control.payload().to_owned())) else {
        return;
    };

    let result = clipboard.write_text(&payload).await;
    if let Err(e) = &result {
        log::error!("failed to copy: {e}");
    }

    let Some(reset) = host.update(|control| control.finish(ticket, &result)).flatten() else {
        return;
    };

    sleep(RESET_DELAY).await;
    host.update(|control| control.expire(reset));
}
