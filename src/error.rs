//! Error type for the terminal client.

use messages::endpoint::EndpointError;
use tokio_tungstenite::tungstenite;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tungstenite::Error>),
    #[error("websocket send failed: {0}")]
    WsSend(Box<tungstenite::Error>),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("message log lock poisoned")]
    LogPoisoned,
}
