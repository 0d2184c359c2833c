//! Shared building blocks for the roomchat server and client.
//!
//! The centre of this crate is the message envelope protocol: the closed set of
//! [`MessageKind`] tags and the [`MessageEnvelope`] value that every chat event
//! travels in, together with its JSON and compact text encodings.

pub mod logger;
pub mod name;
pub mod protocol;
pub mod route;
pub mod time;

pub use name::{NameError, normalize_display_name};
pub use protocol::{EnvelopeError, MessageEnvelope, MessageKind, WireFormat};
pub use route::{Route, RouteError};
