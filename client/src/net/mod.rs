//! Networking for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_socket` owns the single websocket to the chat endpoint: outbound
//! user text goes through [`chat_socket::ChatSender`], inbound frames land in
//! `ChatState` as bot messages.

pub mod chat_socket;
