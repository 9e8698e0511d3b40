//! One rendered chat message.

use leptos::prelude::*;
use messages::MessageBody;

use crate::components::copy_button::CopyButton;
use crate::state::chat::ChatState;

/// Message node at `index` of the chat log.
///
/// User text is inserted as a text node; bot HTML comes from the `messages`
/// renderer, which already dropped raw HTML from the source.
#[component]
pub fn MessageView(index: usize) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let node = chat.with_untracked(|c| c.log.get(index).cloned());

    node.map(|node| {
        let class = node.class_name();
        let copyable = node.copy.is_some();
        let body = match node.body {
            MessageBody::Text(text) => view! { <span class="message-text">{text}</span> }.into_any(),
            MessageBody::Html(html) => view! { <div class="message-body" inner_html=html></div> }.into_any(),
        };

        view! {
            <div class=class>
                {body}
                {copyable.then(|| view! { <CopyButton index/> })}
            </div>
        }
    })
}
