//! Message pipeline shared by the browser widget and the terminal client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inbound bot text flows through [`detect`] (is there a YAML rule in here?),
//! [`render`] (markdown + highlighting + copy control) and lands in a
//! [`history::MessageLog`]. Nothing in this crate touches the DOM or a socket;
//! the shells own those and call in here.

pub mod copy;
pub mod detect;
pub mod endpoint;
pub mod highlight;
pub mod history;
pub mod message;
pub mod render;

pub use copy::{Clipboard, ClipboardError, CopyControl, CopyState};
pub use detect::detect;
pub use history::MessageLog;
pub use message::{ChatMessage, Sender};
pub use render::{MessageBody, RenderedMessage, render};
