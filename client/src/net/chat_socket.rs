//! Websocket client for the chat endpoint.
//!
//! One connection is opened at load time. Each inbound text frame is one bot
//! message; binary frames are ignored. The status stays `Connecting` until
//! the socket carries a frame in either direction, since `WebSocket::open`
//! returns before the handshake completes. There is no reconnect: when the
//! socket closes the status flips to `Disconnected` and stays there.
//!
//! All websocket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are logged through `leptos::logging` and end the
//! connection task; they are never surfaced as UI errors.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod chat_socket_test;

#[cfg(feature = "csr")]
use crate::state::chat::{ChatState, ConnectionStatus};
#[cfg(feature = "csr")]
use leptos::prelude::{RwSignal, Update};

/// Handle for sending user text over the active connection.
///
/// The default handle has no connection and rejects every send.
#[derive(Clone, Debug, Default)]
pub struct ChatSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChatSender {
    /// Queue `text` for sending. Returns `false` if there is no open channel.
    pub fn send(&self, text: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(text.to_owned()).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            false
        }
    }
}

/// Websocket URL for `path` on the page's own origin.
#[cfg(feature = "csr")]
pub fn page_endpoint_url(path: &str) -> String {
    let location = web_sys::window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_default();
    let host = location
        .as_ref()
        .and_then(|l| l.host().ok())
        .unwrap_or_default();
    messages::endpoint::endpoint_url(&protocol, &host, path)
}

/// Open the connection as a local async task and return its sender.
#[cfg(feature = "csr")]
pub fn spawn_chat_socket(url: String, chat: RwSignal<ChatState>) -> ChatSender {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();

    leptos::task::spawn_local(async move {
        chat.update(|c| c.connection = ConnectionStatus::Connecting);
        match connect_and_run(&url, chat, rx).await {
            Ok(()) => leptos::logging::log!("chat socket closed"),
            Err(e) => leptos::logging::warn!("chat socket error: {e}"),
        }
        chat.update(|c| c.connection = ConnectionStatus::Disconnected);
    });

    ChatSender { tx: Some(tx) }
}

/// Connect and pump messages until either direction finishes.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    chat: RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
            chat.update(ChatState::mark_open);
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    chat.update(|c| {
                        c.receive(text);
                    });
                }
                Ok(Message::Bytes(_)) => chat.update(ChatState::mark_open),
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}
