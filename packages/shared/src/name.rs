//! Display name rules.
//!
//! The server enforces them on NAME envelopes and the client checks them
//! before sending, so a name the server would ignore is never announced.

use thiserror::Error;

/// Maximum number of characters in a display name
pub const DISPLAY_NAME_MAX_CHARS: usize = 50;

/// Reasons a display name is refused
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("display name cannot be empty")]
    Empty,

    #[error("display name cannot exceed {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// `|` terminates the author in compact frames
    #[error("display name cannot contain {0:?}")]
    InvalidCharacter(char),
}

/// Validate a display name and return it without surrounding whitespace.
///
/// Length is counted in characters, not bytes.
pub fn normalize_display_name(raw: &str) -> Result<&str, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    let chars = name.chars().count();
    if chars > DISPLAY_NAME_MAX_CHARS {
        return Err(NameError::TooLong {
            max: DISPLAY_NAME_MAX_CHARS,
            actual: chars,
        });
    }
    if let Some(c) = name.chars().find(|c| *c == '|' || c.is_control()) {
        return Err(NameError::InvalidCharacter(c));
    }
    Ok(name)
}

/// Owned variant of [`normalize_display_name`], usable as a clap value parser.
pub fn parse_display_name(raw: &str) -> Result<String, NameError> {
    normalize_display_name(raw).map(str::to_string)
}
