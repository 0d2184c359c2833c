//! Parsing of lines typed at the prompt.

use roomchat_shared::{MessageEnvelope, normalize_display_name};

/// What a line of input asks the client to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the line as a chat message
    Say(String),
    /// `/name NEW`, holding a name that passed display name validation
    Rename(String),
    /// `/quit`
    Quit,
    /// Blank line or unusable command; nothing is sent
    Ignore(Option<String>),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Self::Ignore(None);
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Self::Say(line.to_string());
        };
        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        match name {
            "quit" | "exit" => Self::Quit,
            "name" if argument.is_empty() => Self::Ignore(Some("usage: /name NEW_NAME".to_string())),
            "name" => match normalize_display_name(argument) {
                Ok(name) => Self::Rename(name.to_string()),
                Err(e) => Self::Ignore(Some(format!("invalid name: {e}"))),
            },
            other => Self::Ignore(Some(format!("unknown command: /{other}"))),
        }
    }

    /// Envelope to send for this command, if any
    pub fn to_envelope(&self) -> Option<MessageEnvelope> {
        match self {
            Self::Say(text) => Some(MessageEnvelope::text(None, text.as_str())),
            Self::Rename(name) => Some(MessageEnvelope::name(None, name.as_str())),
            Self::Quit | Self::Ignore(_) => None,
        }
    }
}
