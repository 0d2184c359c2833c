//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use roomchat_shared::normalize_display_name;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Client identifier value object.
///
/// Identifies one WebSocket connection. The server assigns it from a UUID,
/// participants never see it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    /// Build a ClientId from a UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room identifier value object.
///
/// Room ids are UUID strings handed out by the server; they appear as the
/// opaque `{roomId}` segment of room paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if the string is empty or
    /// not a UUID
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        let uuid =
            uuid::Uuid::parse_str(&id).map_err(|_| ValueObjectError::RoomIdInvalidFormat(id))?;
        Ok(Self::from_uuid(uuid))
    }

    /// Build a RoomId from a UUID, in its hyphenated lowercase form.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name value object.
///
/// The name a participant announces with a NAME envelope. It is shown to
/// the other participants and used as the author of everything they relay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new DisplayName.
    ///
    /// Surrounding whitespace is trimmed. `|` is rejected because compact
    /// frames use it to terminate the author.
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let name = normalize_display_name(&name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(roomchat_shared::time::now_millis())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use roomchat_shared::NameError;

    #[test]
    fn test_client_id_from_uuid() {
        // テスト項目: UUID からクライアント ID を作成できる
        let uuid = uuid::Uuid::parse_str("7c1e5b0a-1d2f-4c3b-9a8e-0f1e2d3c4b5a").unwrap();

        let id = ClientId::from_uuid(uuid);

        assert_eq!(id.as_str(), "7c1e5b0a-1d2f-4c3b-9a8e-0f1e2d3c4b5a");
    }

    #[test]
    fn test_room_id_new_success() {
        // テスト項目: UUID 形式のルーム ID を作成できる
        // given (前提条件):
        let id = "7c1e5b0a-1d2f-4c3b-9a8e-0f1e2d3c4b5a".to_string();

        // when (操作):
        let result = RoomId::new(id.clone());

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), id);
    }

    #[test]
    fn test_room_id_new_normalizes_case() {
        // テスト項目: 大文字の UUID は小文字に正規化される
        let result = RoomId::new("7C1E5B0A-1D2F-4C3B-9A8E-0F1E2D3C4B5A".to_string());

        assert_eq!(
            result.unwrap().as_str(),
            "7c1e5b0a-1d2f-4c3b-9a8e-0f1e2d3c4b5a"
        );
    }

    #[test]
    fn test_room_id_new_empty_fails() {
        // テスト項目: 空のルーム ID は作成できない
        let result = RoomId::new("".to_string());

        assert_eq!(result.unwrap_err(), ValueObjectError::RoomIdEmpty);
    }

    #[test]
    fn test_room_id_new_invalid_format_fails() {
        // テスト項目: UUID 形式でないルーム ID は作成できない
        let result = RoomId::new("123".to_string());

        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomIdInvalidFormat("123".to_string())
        );
    }

    #[test]
    fn test_display_name_new_success() {
        // テスト項目: 前後の空白を除いた表示名を作成できる
        let result = DisplayName::new("  alice ".to_string());

        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_display_name_new_empty_fails() {
        // テスト項目: 空白のみの表示名は作成できない
        let result = DisplayName::new("   ".to_string());

        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::DisplayName(NameError::Empty)
        );
    }

    #[test]
    fn test_display_name_new_too_long_fails() {
        // テスト項目: 51 文字以上の表示名は作成できない（文字数で数える）
        let result = DisplayName::new("あ".repeat(51));

        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::DisplayName(NameError::TooLong {
                max: 50,
                actual: 51
            })
        );
    }

    #[test]
    fn test_display_name_new_separator_fails() {
        // テスト項目: '|' を含む表示名は作成できない
        let result = DisplayName::new("a|b".to_string());

        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::DisplayName(NameError::InvalidCharacter('|'))
        );
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        assert!(ts1 < ts2);
        assert_eq!(ts2.value(), 2000);
    }
}
