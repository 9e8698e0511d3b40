//! Root widget component and context providers.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;
use crate::net::chat_socket::ChatSender;
use crate::state::{chat::ChatState, ui::UiState};

/// Signals shared with every widget component through context.
#[derive(Clone, Copy)]
pub struct WidgetSignals {
    pub chat: RwSignal<ChatState>,
    pub ui: RwSignal<UiState>,
    pub sender: RwSignal<ChatSender>,
}

/// Create and provide the widget contexts, then open the chat connection.
///
/// Must run inside a reactive owner (a component body or a mount closure).
pub fn provide_widget_state(config: &WidgetConfig, ui: UiState) -> WidgetSignals {
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(ui);
    let sender = RwSignal::new(ChatSender::default());

    provide_context(chat);
    provide_context(ui);
    provide_context(sender);

    #[cfg(feature = "csr")]
    {
        let url = crate::net::chat_socket::page_endpoint_url(&config.endpoint_path);
        leptos::logging::log!("chat endpoint: {url}");
        sender.set(crate::net::chat_socket::spawn_chat_socket(url, chat));
    }
    #[cfg(not(feature = "csr"))]
    let _ = config;

    WidgetSignals { chat, ui, sender }
}

/// Self-rendered root, used when the host page has no widget markup.
#[component]
pub fn App(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    provide_widget_state(&config, UiState::with_visible(config.start_visible));

    view! { <ChatWidget placeholder=config.input_placeholder/> }
}
