//! Message envelope protocol.
//!
//! Every unit of chat traffic is a [`MessageEnvelope`] tagged with exactly one
//! [`MessageKind`]. Envelopes are plain values: building, encoding and decoding
//! them never performs I/O, so any number of tasks can do it concurrently.
//!
//! Two encodings exist:
//!
//! - JSON objects `{"msgType": 1, "content": "hi", "author": "alice"}`
//! - compact text frames (`1hi` from a client, `1alice|hi` from the server),
//!   see [`frame`].
//!
//! [`WireFormat`] picks one of them at runtime.

mod codec;
mod envelope;
mod error;
pub mod frame;
mod kind;

pub use codec::WireFormat;
pub use envelope::MessageEnvelope;
pub use error::EnvelopeError;
pub use kind::MessageKind;
