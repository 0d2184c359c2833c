//! Client error types.

use thiserror::Error;

/// Errors that end a client session
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{0}': expected http:// or https://")]
    InvalidServerUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status} for {action}")]
    UnexpectedStatus {
        action: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("room '{0}' does not exist")]
    RoomNotFound(String),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] Box<tokio_tungstenite::tungstenite::Error>),

    #[error("terminal input failed: {0}")]
    Input(#[from] rustyline::error::ReadlineError),
}

impl From<tokio_tungstenite::tungstenite::Error> for ClientError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(e))
    }
}
