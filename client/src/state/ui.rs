//! Widget chrome state (visibility, fullscreen).
//!
//! Kept apart from `chat` so toggling the widget never touches message data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::CHAT_CONTAINER_ID;

/// Class the container carries while expanded.
pub const FULL_SCREEN_CLASS: &str = "full-screen";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub visible: bool,
    pub fullscreen: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { visible: true, fullscreen: false }
    }
}

impl UiState {
    #[must_use]
    pub fn with_visible(visible: bool) -> Self {
        Self { visible, ..Self::default() }
    }

    /// State read back from host markup: its inline `display` value and
    /// whether it already carries the full-screen class.
    #[must_use]
    pub fn from_page(display: &str, fullscreen: bool) -> Self {
        Self { visible: display.trim() != "none", fullscreen }
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Value of the container's `display` property.
    #[must_use]
    pub fn display(&self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }

    /// Inline `display` style for the container.
    #[must_use]
    pub fn container_style(&self) -> &'static str {
        if self.visible { "display: block" } else { "display: none" }
    }

    /// Class list for the container; `full-screen` while expanded.
    #[must_use]
    pub fn container_class(&self) -> String {
        if self.fullscreen {
            format!("{CHAT_CONTAINER_ID} {FULL_SCREEN_CLASS}")
        } else {
            CHAT_CONTAINER_ID.to_owned()
        }
    }
}
