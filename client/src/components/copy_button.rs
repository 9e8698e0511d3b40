//! Copy-YAML button for a bot message.

use leptos::prelude::*;
use messages::copy::{CopyControl, CopyState};

use crate::state::chat::ChatState;

/// Button bound to the copy control of message `index`.
///
/// Each click starts a fresh write; the label follows the control's state
/// and drops back to idle two seconds after the write settles.
#[component]
pub fn CopyButton(index: usize) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let state = move || {
        chat.with(|c| {
            c.log
                .get(index)
                .and_then(|node| node.copy.as_ref())
                .map_or(CopyState::Idle, CopyControl::state)
        })
    };

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let host = crate::state::chat::LogCopyHost::new(chat, index);
            messages::copy::copy_with_feedback(
                &host,
                &crate::util::clipboard::BrowserClipboard,
                gloo_timers::future::sleep,
            )
            .await;
        });
    };

    view! {
        <button class="copy-yaml-btn" title=move || state().title() on:click=on_click>
            {move || state().label()}
        </button>
    }
}
