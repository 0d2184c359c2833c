use std::{fmt, str::FromStr};

use super::{envelope::MessageEnvelope, error::EnvelopeError, frame};

/// Encoding used on a connection.
///
/// Traffic is asymmetric: clients send requests, the server relays
/// envelopes that carry the author it assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// JSON objects in both directions
    #[default]
    Json,
    /// Compact text frames, see [`frame`]
    Compact,
}

impl WireFormat {
    /// Encode an envelope sent by a client.
    pub fn encode_request(self, envelope: &MessageEnvelope) -> String {
        match self {
            WireFormat::Json => envelope.to_json(),
            WireFormat::Compact => frame::encode_client_frame(envelope),
        }
    }

    /// Decode an envelope received from a client.
    pub fn decode_request(self, text: &str) -> Result<MessageEnvelope, EnvelopeError> {
        match self {
            WireFormat::Json => MessageEnvelope::from_json(text),
            WireFormat::Compact => frame::decode_client_frame(text),
        }
    }

    /// Encode an envelope relayed by the server.
    pub fn encode_relay(self, envelope: &MessageEnvelope) -> String {
        match self {
            WireFormat::Json => envelope.to_json(),
            WireFormat::Compact => frame::encode_server_frame(envelope),
        }
    }

    /// Decode an envelope relayed by the server.
    pub fn decode_relay(self, text: &str) -> Result<MessageEnvelope, EnvelopeError> {
        match self {
            WireFormat::Json => MessageEnvelope::from_json(text),
            WireFormat::Compact => frame::decode_server_frame(text),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WireFormat::Json => "json",
            WireFormat::Compact => "compact",
        }
    }
}

impl FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(WireFormat::Json),
            "compact" => Ok(WireFormat::Compact),
            other => Err(format!(
                "unknown wire format '{other}' (expected 'json' or 'compact')"
            )),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
