//! Widget configuration and the fixed element ids it binds to.
//!
//! Host pages ship markup with these ids and the widget attaches to it; the
//! self-rendered fallback reuses the same ids so page styles still apply.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use messages::endpoint::DEFAULT_ENDPOINT_PATH;

pub const CHAT_CONTAINER_ID: &str = "chat-container";
pub const CHAT_BOX_ID: &str = "chat-box";
pub const USER_INPUT_ID: &str = "user-input";
pub const SEND_BUTTON_ID: &str = "send-btn";
pub const CHAT_TOGGLE_ID: &str = "chat-toggle";
pub const FULLSCREEN_TOGGLE_ID: &str = "fullscreen-toggle";

/// Every element the widget needs from the host page.
pub const HOST_ELEMENT_IDS: [&str; 6] = [
    CHAT_CONTAINER_ID,
    CHAT_BOX_ID,
    USER_INPUT_ID,
    SEND_BUTTON_ID,
    CHAT_TOGGLE_ID,
    FULLSCREEN_TOGGLE_ID,
];

/// Ids from [`HOST_ELEMENT_IDS`] the page does not provide.
pub fn missing_host_ids(is_present: impl Fn(&str) -> bool) -> Vec<&'static str> {
    HOST_ELEMENT_IDS.into_iter().filter(|id| !is_present(id)).collect()
}

/// Runtime options for the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Endpoint path on the hosting origin.
    pub endpoint_path: String,
    /// Whether the chat container starts shown.
    pub start_visible: bool,
    pub input_placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_owned(),
            start_visible: true,
            input_placeholder: "Describe the rule you need...".to_owned(),
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn with_endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = path.into();
        self
    }
}
