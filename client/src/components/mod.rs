//! Widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers set
//! up in `app`; rendering decisions live in the `messages` crate.

pub mod chat_widget;
pub mod copy_button;
pub mod message_list;
pub mod message_view;
