//! Binding to widget markup already present on the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns the layout: a container, the message box, the input,
//! the send button and both toggles, each with a fixed id from `config`.
//! The widget mounts only the message list into `#chat-box` and attaches
//! listeners to the existing controls. Toggles go through `UiState`; an
//! effect writes each change back onto the container.
//!
//! TRADE-OFFS
//! ==========
//! Listener closures are leaked with `Closure::forget`. The widget lives as
//! long as the page, so there is nothing to detach them from.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::app::{WidgetSignals, provide_widget_state};
use crate::components::chat_widget::send_or_warn;
use crate::components::message_list::{MessageList, message_count};
use crate::config::{
    CHAT_BOX_ID, CHAT_CONTAINER_ID, CHAT_TOGGLE_ID, FULLSCREEN_TOGGLE_ID, SEND_BUTTON_ID, USER_INPUT_ID,
    WidgetConfig, missing_host_ids,
};
use crate::state::ui::{FULL_SCREEN_CLASS, UiState};

/// The host page's widget elements.
pub struct HostElements {
    container: HtmlElement,
    chat_box: HtmlElement,
    input: HtmlInputElement,
    send: HtmlElement,
    toggle: HtmlElement,
    fullscreen: HtmlElement,
}

impl HostElements {
    /// Look up every widget element. `None` when any is missing or has the
    /// wrong element type.
    pub fn find() -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let missing = missing_host_ids(|id| document.get_element_by_id(id).is_some());
        if !missing.is_empty() {
            log::info!("host page lacks widget elements {missing:?}");
            return None;
        }

        let found = Self {
            container: by_id(&document, CHAT_CONTAINER_ID)?,
            chat_box: by_id(&document, CHAT_BOX_ID)?,
            input: by_id(&document, USER_INPUT_ID)?,
            send: by_id(&document, SEND_BUTTON_ID)?,
            toggle: by_id(&document, CHAT_TOGGLE_ID)?,
            fullscreen: by_id(&document, FULLSCREEN_TOGGLE_ID)?,
        };
        Some(found)
    }

    fn page_ui_state(&self) -> UiState {
        let display = self.container.style().get_property_value("display").unwrap_or_default();
        UiState::from_page(&display, self.container.class_list().contains(FULL_SCREEN_CLASS))
    }
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(_) => {
            log::warn!("#{id} has an unexpected element type");
            None
        }
    }
}

/// Mount the message list into the existing `#chat-box` and wire the page's
/// controls.
pub fn mount(elements: HostElements, config: WidgetConfig) {
    let initial_ui = elements.page_ui_state();
    let HostElements { container, chat_box, input, send, toggle, fullscreen } = elements;
    let target = chat_box.clone();

    leptos::mount::mount_to(target, move || {
        let WidgetSignals { chat, ui, sender } = provide_widget_state(&config, initial_ui);
        let count = message_count();

        // Page markup already reflects the initial state; only write changes.
        Effect::watch(move || ui.get(), move |state, _, _| apply_ui(&container, state), false);

        Effect::new(move || {
            let _ = count.get();
            chat_box.set_scroll_top(chat_box.scroll_height());
        });

        let send_input = {
            let input = input.clone();
            move || {
                let raw = input.value();
                if let Some(text) = chat.try_update(|c| c.submit(&raw)).flatten() {
                    send_or_warn(sender, &text);
                    input.set_value("");
                }
            }
        };

        listen(&send, "click", {
            let send_input = send_input.clone();
            move |_| send_input()
        });
        listen(&input, "keydown", move |ev: Event| {
            if ev.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Enter") {
                ev.prevent_default();
                send_input();
            }
        });
        listen(&toggle, "click", move |_| ui.update(UiState::toggle_visible));
        listen(&fullscreen, "click", move |_| ui.update(UiState::toggle_fullscreen));

        view! { <MessageList count/> }
    })
    .forget();
}

fn apply_ui(container: &HtmlElement, state: &UiState) {
    if let Err(e) = container.style().set_property("display", state.display()) {
        log::warn!("failed to set container display: {e:?}");
    }
    if let Err(e) = container.class_list().toggle_with_force(FULL_SCREEN_CLASS, state.fullscreen) {
        log::warn!("failed to toggle {FULL_SCREEN_CLASS}: {e:?}");
    }
}

fn listen(target: &HtmlElement, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {event}: {e:?}");
    }
    callback.forget();
}
