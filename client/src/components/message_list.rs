//! The chat history, one `MessageView` per log entry.

use leptos::prelude::*;

use crate::components::message_view::MessageView;
use crate::state::chat::ChatState;

/// Number of nodes in the chat log, tracked for list rendering and scrolling.
pub fn message_count() -> Memo<usize> {
    let chat = expect_context::<RwSignal<ChatState>>();
    Memo::new(move |_| chat.with(|c| c.log.len()))
}

/// Renders every logged message in arrival order. Nodes are append-only, so
/// the log index is a stable key.
#[component]
pub fn MessageList(count: Memo<usize>) -> impl IntoView {
    view! {
        <For
            each=move || 0..count.get()
            key=|index| *index
            children=move |index| view! { <MessageView index/> }
        />
    }
}
