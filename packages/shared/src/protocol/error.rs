//! Envelope decoding errors.

use thiserror::Error;

/// Errors raised while decoding a single envelope.
///
/// A failure only concerns the envelope being decoded; callers drop it and
/// keep processing the rest of the stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// A required field is missing or has the wrong shape
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The discriminator is an integer outside the closed set of message kinds.
    /// Wide enough to hold any JSON integer tag unchanged.
    #[error("unknown message kind: {0}")]
    UnknownMessageKind(i128),
}
