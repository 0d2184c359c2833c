//! Compact text frames.
//!
//! Frames start with the tag digit. Client frames carry the content right
//! after it (`1hello`, `2alice`); the sender is implied by the connection.
//! Server frames add the author and a `|` separator (`1alice|hello`) and only
//! TEXT frames keep their content. Every other kind is announced by the tag
//! and a name alone (`2alice|`, `3alice|`).

use super::{envelope::MessageEnvelope, error::EnvelopeError, kind::MessageKind};

const AUTHOR_SEPARATOR: char = '|';

/// Split a frame into its kind and the remaining text.
fn split_tag(frame: &str) -> Result<(MessageKind, &str), EnvelopeError> {
    let mut chars = frame.chars();
    let first = chars
        .next()
        .ok_or_else(|| EnvelopeError::MalformedEnvelope("empty frame".to_string()))?;
    let digit = first.to_digit(10).ok_or_else(|| {
        EnvelopeError::MalformedEnvelope(format!("frame tag '{first}' is not a digit"))
    })?;
    let kind = MessageKind::try_from(i64::from(digit))?;
    Ok((kind, chars.as_str()))
}

/// Encode the client to server frame; the author is not transmitted.
pub fn encode_client_frame(envelope: &MessageEnvelope) -> String {
    format!("{}{}", envelope.kind().value(), envelope.content())
}

/// Decode a client to server frame; the result has no author.
pub fn decode_client_frame(frame: &str) -> Result<MessageEnvelope, EnvelopeError> {
    let (kind, content) = split_tag(frame)?;
    Ok(MessageEnvelope::new(kind, content, None))
}

/// Encode the server to client frame.
///
/// A NAME frame names the participant by the name they just took, since the
/// frame cannot carry both names. A missing author is written as an empty name.
pub fn encode_server_frame(envelope: &MessageEnvelope) -> String {
    let (author, content) = match envelope.kind() {
        MessageKind::Text => (envelope.author().unwrap_or_default(), envelope.content()),
        MessageKind::Name => (envelope.content(), ""),
        _ => (envelope.author().unwrap_or_default(), ""),
    };
    format!(
        "{}{}{}{}",
        envelope.kind().value(),
        author,
        AUTHOR_SEPARATOR,
        content
    )
}

/// Decode a server to client frame.
///
/// The author runs up to the first `|`; an empty author decodes to `None`.
/// A NAME frame decodes like a first announcement: the new name in `content`
/// and no author, because the frame does not say who was renamed.
pub fn decode_server_frame(frame: &str) -> Result<MessageEnvelope, EnvelopeError> {
    let (kind, rest) = split_tag(frame)?;
    let (author, content) = rest.split_once(AUTHOR_SEPARATOR).ok_or_else(|| {
        EnvelopeError::MalformedEnvelope("server frame has no author separator".to_string())
    })?;
    let author = (!author.is_empty()).then(|| author.to_string());

    // The name slot of a NAME frame is the new name; the previous one is not sent
    if kind == MessageKind::Name {
        return Ok(MessageEnvelope::name(None, author.unwrap_or_default()));
    }
    Ok(MessageEnvelope::new(kind, content, author))
}
