//! Chat container: toggles, message list, and input row.

use leptos::prelude::*;

use crate::components::message_list::{MessageList, message_count};
use crate::config::{
    CHAT_BOX_ID, CHAT_CONTAINER_ID, CHAT_TOGGLE_ID, FULLSCREEN_TOGGLE_ID, SEND_BUTTON_ID, USER_INPUT_ID,
};
use crate::net::chat_socket::ChatSender;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;

/// Self-rendered chat widget, used when the host page lacks the widget markup.
/// Sends trimmed, non-empty input on Enter or the send button.
#[component]
pub fn ChatWidget(#[prop(into)] placeholder: String) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<ChatSender>>();

    let input = RwSignal::new(String::new());
    let box_ref = NodeRef::<leptos::html::Div>::new();
    let message_count = message_count();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = message_count.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = box_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let raw = input.get_untracked();
        if let Some(text) = chat.try_update(|c| c.submit(&raw)).flatten() {
            send_or_warn(sender, &text);
            input.set(String::new());
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <button
            id=CHAT_TOGGLE_ID
            class="chat-toggle"
            title="Toggle chat"
            on:click=move |_| ui.update(UiState::toggle_visible)
        >
            "💬"
        </button>
        <div
            id=CHAT_CONTAINER_ID
            class=move || ui.with(UiState::container_class)
            style=move || ui.with(UiState::container_style)
        >
            <div class="chat-header">
                <span class="chat-header__status">
                    {move || chat.with(|c| c.connection.label())}
                </span>
                <button
                    id=FULLSCREEN_TOGGLE_ID
                    class="fullscreen-toggle"
                    title="Toggle full screen"
                    on:click=move |_| ui.update(UiState::toggle_fullscreen)
                >
                    "⛶"
                </button>
            </div>
            <div id=CHAT_BOX_ID class="chat-box" node_ref=box_ref>
                <MessageList count=message_count/>
            </div>
            <div class="chat-input-row">
                <input
                    id=USER_INPUT_ID
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id=SEND_BUTTON_ID class="btn btn--primary" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Hand `text` to the connection, logging when there is none.
pub fn send_or_warn(sender: RwSignal<ChatSender>, text: &str) {
    if !sender.get_untracked().send(text) {
        leptos::logging::warn!("chat message not sent: no connection");
    }
}
