//! The message envelope value object.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{error::EnvelopeError, kind::MessageKind};

/// One unit of chat traffic.
///
/// The meaning of `content` and `author` depends on the kind: a NAME envelope
/// carries the new display name in `content`, TYPING and STOP_TYPING usually
/// carry nothing. `author` is `None` for events without a known participant;
/// an empty string is never used for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEnvelope {
    msg_type: MessageKind,
    content: String,
    author: Option<String>,
}

/// Loose shape used at the decode boundary.
///
/// `msgType` is read as a plain JSON number so that out of range tags, even
/// ones past `i64`, can be told apart from missing or non-integer ones.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    msg_type: serde_json::Number,
    content: String,
    #[serde(default)]
    author: Option<String>,
}

impl MessageEnvelope {
    /// Create an envelope of any kind.
    pub fn new(kind: MessageKind, content: impl Into<String>, author: Option<String>) -> Self {
        Self {
            msg_type: kind,
            content: content.into(),
            author,
        }
    }

    /// A chat message body.
    pub fn text(author: Option<String>, content: impl Into<String>) -> Self {
        Self::new(MessageKind::Text, content, author)
    }

    /// A display name announcement; `new_name` travels in `content`.
    pub fn name(author: Option<String>, new_name: impl Into<String>) -> Self {
        Self::new(MessageKind::Name, new_name, author)
    }

    pub fn leave(author: Option<String>) -> Self {
        Self::new(MessageKind::Leave, "", author)
    }

    pub fn typing(author: Option<String>) -> Self {
        Self::new(MessageKind::Typing, "", author)
    }

    pub fn stop_typing(author: Option<String>) -> Self {
        Self::new(MessageKind::StopTyping, "", author)
    }

    pub fn kind(&self) -> MessageKind {
        self.msg_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Same envelope with a different author.
    pub fn with_author(self, author: Option<String>) -> Self {
        Self { author, ..self }
    }

    /// Decode an envelope from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// * `MalformedEnvelope` - not an object, `content` missing or not a
    ///   string, `msgType` missing or not an integer, `author` neither a
    ///   string nor null
    /// * `UnknownMessageKind` - `msgType` is an integer outside 1..=5
    pub fn from_value(value: serde_json::Value) -> Result<Self, EnvelopeError> {
        // serde would otherwise accept a positional array for the struct
        if !value.is_object() {
            return Err(EnvelopeError::MalformedEnvelope(
                "envelope must be a JSON object".to_string(),
            ));
        }
        let raw: RawEnvelope = serde_json::from_value(value)
            .map_err(|e| EnvelopeError::MalformedEnvelope(e.to_string()))?;
        let tag = raw
            .msg_type
            .as_i64()
            .map(i128::from)
            .or_else(|| raw.msg_type.as_u64().map(i128::from))
            .ok_or_else(|| {
                EnvelopeError::MalformedEnvelope(format!(
                    "msgType must be an integer, got {}",
                    raw.msg_type
                ))
            })?;
        let kind = MessageKind::try_from(tag)?;
        Ok(Self::new(kind, raw.content, raw.author))
    }

    /// Decode an envelope from JSON text.
    ///
    /// Text that is not JSON at all is reported as `MalformedEnvelope`.
    pub fn from_json(text: &str) -> Result<Self, EnvelopeError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| EnvelopeError::MalformedEnvelope(e.to_string()))?;
        Self::from_value(value)
    }

    /// Encode as a JSON value; a missing author is written as `null`.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "msgType": self.msg_type.value(),
            "content": self.content,
            "author": self.author,
        })
    }

    /// Encode as JSON text.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl FromStr for MessageEnvelope {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
