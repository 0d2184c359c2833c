//! Consumer-side room state built from relayed envelopes.
//!
//! The server only relays events; who is in the room, who is typing and
//! who used to be called what are all reconstructed here.

use std::collections::BTreeSet;

use roomchat_shared::{MessageEnvelope, MessageKind, WireFormat, time::timestamp_to_clock};

/// A display name change seen in the room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameChange {
    /// `None` when the participant announced a name for the first time
    pub previous: Option<String>,
    pub current: String,
    /// Unix time in milliseconds
    pub at: i64,
}

/// What the local user knows about the room
#[derive(Debug, Clone, Default)]
pub struct RoomView {
    own_name: String,
    participants: BTreeSet<String>,
    typing: BTreeSet<String>,
    name_history: Vec<NameChange>,
    /// Typing status last handed out by [`RoomView::receive`]
    shown_status: Option<String>,
}

impl RoomView {
    pub fn new(own_name: impl Into<String>) -> Self {
        Self {
            own_name: own_name.into(),
            ..Self::default()
        }
    }

    pub fn own_name(&self) -> &str {
        &self.own_name
    }

    /// Record a rename made by the local user; the server never echoes it back.
    pub fn rename_self(&mut self, new_name: impl Into<String>, at: i64) {
        let new_name = new_name.into();
        let previous = std::mem::replace(&mut self.own_name, new_name.clone());
        self.name_history.push(NameChange {
            previous: Some(previous),
            current: new_name,
            at,
        });
    }

    /// Decode a frame from the server and fold it into the view.
    ///
    /// Returns the lines to print, including a typing status line when the
    /// status changed. A frame that cannot be decoded is logged and skipped
    /// so the session keeps going.
    pub fn receive(
        &mut self,
        wire_format: WireFormat,
        frame: &str,
        received_at: i64,
    ) -> Vec<String> {
        let envelope = match wire_format.decode_relay(frame) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("Skipping undecodable frame {:?}: {}", frame, e);
                return Vec::new();
            }
        };

        let mut lines: Vec<String> = self.apply(&envelope, received_at).into_iter().collect();
        let status = self.typing_status();
        if status != self.shown_status {
            if let Some(status) = &status {
                lines.push(format!("  ({status})"));
            }
            self.shown_status = status;
        }
        lines
    }

    /// Fold a relayed envelope into the view.
    ///
    /// Returns the line to print, or `None` for events that only change the
    /// typing indicator.
    pub fn apply(&mut self, envelope: &MessageEnvelope, received_at: i64) -> Option<String> {
        let clock = timestamp_to_clock(received_at);
        let author = envelope.author();

        match envelope.kind() {
            MessageKind::Text => {
                let author = author.unwrap_or("(unknown)");
                self.typing.remove(author);
                self.participants.insert(author.to_string());
                Some(format!("[{clock}] {author}: {}", envelope.content()))
            }
            MessageKind::Name => {
                let current = envelope.content().to_string();
                let line = match author {
                    Some(previous) => {
                        self.participants.remove(previous);
                        if self.typing.remove(previous) {
                            self.typing.insert(current.clone());
                        }
                        format!("[{clock}] * {previous} is now known as {current}")
                    }
                    None => format!("[{clock}] * {current} joined"),
                };
                self.participants.insert(current.clone());
                self.name_history.push(NameChange {
                    previous: author.map(str::to_string),
                    current,
                    at: received_at,
                });
                Some(line)
            }
            MessageKind::Leave => {
                let author = author?;
                self.participants.remove(author);
                self.typing.remove(author);
                Some(format!("[{clock}] * {author} left"))
            }
            MessageKind::Typing => {
                if let Some(author) = author {
                    self.typing.insert(author.to_string());
                }
                None
            }
            MessageKind::StopTyping => {
                if let Some(author) = author {
                    self.typing.remove(author);
                }
                None
            }
        }
    }

    /// Participants seen so far, excluding the local user
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(String::as_str)
    }

    pub fn typing(&self) -> impl Iterator<Item = &str> {
        self.typing.iter().map(String::as_str)
    }

    pub fn name_history(&self) -> &[NameChange] {
        &self.name_history
    }

    /// Status line for the typing indicator
    pub fn typing_status(&self) -> Option<String> {
        let names: Vec<&str> = self.typing().collect();
        match names.as_slice() {
            [] => None,
            [one] => Some(format!("{one} is typing...")),
            [first, second] => Some(format!("{first} and {second} are typing...")),
            [first, rest @ ..] => Some(format!(
                "{first} and {} others are typing...",
                rest.len()
            )),
        }
    }
}
