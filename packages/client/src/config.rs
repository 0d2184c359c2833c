//! Client configuration.

use clap::Parser;
use roomchat_shared::{WireFormat, name::parse_display_name};

use crate::error::ClientError;

/// Command line arguments of the client binary
#[derive(Debug, Parser)]
#[command(name = "roomchat-client", version, about = "Room chat CLI client")]
pub struct ClientArgs {
    /// Base URL of the chat server
    #[arg(short, long, env = "ROOMCHAT_SERVER", default_value = "http://localhost:8080")]
    pub server: String,

    /// Display name announced on join
    #[arg(short, long, value_parser = parse_display_name)]
    pub name: String,

    /// Room to join; a new room is created when omitted
    #[arg(short, long)]
    pub room: Option<String>,

    /// Encoding of WebSocket frames, must match the server
    #[arg(long, env = "WIRE_FORMAT", default_value = "json")]
    pub wire_format: WireFormat,

    /// Log verbosity when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl ClientArgs {
    /// Server base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.server.trim_end_matches('/')
    }

    /// WebSocket endpoint of a room, derived from the HTTP base URL
    pub fn ws_url(&self, room_id: &str) -> Result<String, ClientError> {
        let base = self.base_url();
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            return Err(ClientError::InvalidServerUrl(self.server.clone()));
        };
        Ok(format!("{ws_base}/ws/{room_id}"))
    }
}
