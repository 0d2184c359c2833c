//! Command line client for the room chat server.
//!
//! Creates or joins a room, announces a display name, and renders the
//! envelopes the other participants send.

pub mod api;
pub mod config;
pub mod error;
pub mod runner;
pub mod session;

pub use config::ClientArgs;
pub use error::ClientError;
pub use runner::run;
