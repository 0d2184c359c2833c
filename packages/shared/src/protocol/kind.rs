use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::EnvelopeError;

/// Discriminator of a chat envelope.
///
/// The integer values are part of the wire format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
#[repr(u8)]
pub enum MessageKind {
    /// A chat message body authored by a participant
    Text = 1,
    /// A participant announcing or changing their display name
    Name = 2,
    /// A participant leaving the room
    Leave = 3,
    /// A participant started typing
    Typing = 4,
    /// A participant stopped typing
    StopTyping = 5,
}

impl MessageKind {
    /// All kinds in tag order.
    pub const ALL: [MessageKind; 5] = [
        MessageKind::Text,
        MessageKind::Name,
        MessageKind::Leave,
        MessageKind::Typing,
        MessageKind::StopTyping,
    ];

    /// Wire value of this kind.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Symbolic name, as used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Text => "TEXT",
            MessageKind::Name => "NAME",
            MessageKind::Leave => "LEAVE",
            MessageKind::Typing => "TYPING",
            MessageKind::StopTyping => "STOP_TYPING",
        }
    }
}

impl TryFrom<i128> for MessageKind {
    type Error = EnvelopeError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MessageKind::Text),
            2 => Ok(MessageKind::Name),
            3 => Ok(MessageKind::Leave),
            4 => Ok(MessageKind::Typing),
            5 => Ok(MessageKind::StopTyping),
            other => Err(EnvelopeError::UnknownMessageKind(other)),
        }
    }
}

impl TryFrom<i64> for MessageKind {
    type Error = EnvelopeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MessageKind::try_from(i128::from(value))
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = EnvelopeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MessageKind::try_from(i128::from(value))
    }
}

impl From<MessageKind> for u8 {
    fn from(kind: MessageKind) -> Self {
        kind.value()
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
