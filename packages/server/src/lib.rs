//! Room chat server.
//!
//! Participants create rooms over HTTP and join them over WebSocket. Every
//! envelope a participant sends is re-authored with their display name and
//! relayed to the other participants of the same room.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::{ServerArgs, ServerConfig};
pub use error::ServerError;
pub use ui::{build_router, run};
