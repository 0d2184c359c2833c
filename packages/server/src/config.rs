//! Server configuration.
//!
//! Every option can be given on the command line or through the matching
//! environment variable.

use std::time::Duration;

use clap::Parser;
use roomchat_shared::WireFormat;

/// Default port, overridable with `PORT`
pub const DEFAULT_PORT: u16 = 8080;

/// How long an empty room survives before it is removed
pub const DEFAULT_EMPTY_ROOM_TIMEOUT: Duration = Duration::from_secs(60);

/// Command line arguments of the server binary
#[derive(Debug, Parser)]
#[command(name = "roomchat-server", version, about = "Room chat server")]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Allowed CORS origin; `*` allows every origin
    #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,

    /// Encoding of WebSocket frames (`json` or `compact`)
    #[arg(long, env = "WIRE_FORMAT", default_value = "json")]
    pub wire_format: WireFormat,

    /// Seconds an empty room is kept before removal
    #[arg(long, env = "EMPTY_ROOM_TIMEOUT_SECS", default_value_t = DEFAULT_EMPTY_ROOM_TIMEOUT.as_secs())]
    pub empty_room_timeout_secs: u64,

    /// Maximum number of participants per room
    #[arg(long, env = "ROOM_CAPACITY", default_value_t = crate::domain::entity::DEFAULT_PARTICIPANT_CAPACITY)]
    pub room_capacity: usize,

    /// Log verbosity when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Runtime configuration of the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub wire_format: WireFormat,
    pub empty_room_timeout: Duration,
    pub room_capacity: usize,
}

impl ServerConfig {
    /// Socket address to bind, `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether every origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origin == "*"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_origin: "*".to_string(),
            wire_format: WireFormat::default(),
            empty_room_timeout: DEFAULT_EMPTY_ROOM_TIMEOUT,
            room_capacity: crate::domain::entity::DEFAULT_PARTICIPANT_CAPACITY,
        }
    }
}

impl From<&ServerArgs> for ServerConfig {
    fn from(args: &ServerArgs) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            cors_origin: args.cors_origin.clone(),
            wire_format: args.wire_format,
            empty_room_timeout: Duration::from_secs(args.empty_room_timeout_secs),
            room_capacity: args.room_capacity,
        }
    }
}
