//! Reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! `chat` holds the message log and connection status; `ui` holds widget
//! chrome (visibility, fullscreen). Both are plain structs wrapped in
//! `RwSignal`s by the app root.

pub mod chat;
pub mod ui;
