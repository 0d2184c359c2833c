//! Domain factories for creating identifiers.

use super::{ClientId, RoomId};

/// Factory for generating RoomId instances.
///
/// Keeps id generation apart from the parsing rules in `RoomId::new`.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    pub fn generate() -> RoomId {
        RoomId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for generating ClientId instances, one per connection.
pub struct ClientIdFactory;

impl ClientIdFactory {
    /// Generate a new ClientId with a random UUID v4.
    pub fn generate() -> ClientId {
        ClientId::from_uuid(uuid::Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_factory_generate() {
        // テスト項目: RoomIdFactory::generate() で UUID v4 形式の RoomId を生成できる
        // when (操作):
        let room_id = RoomIdFactory::generate();

        // then (期待する結果):
        assert_eq!(room_id.as_str().len(), 36); // UUID v4 の標準長（ハイフン含む）
        assert_eq!(RoomId::new(room_id.as_str().to_string()), Ok(room_id));
    }

    #[test]
    fn test_room_id_factory_generate_uniqueness() {
        // テスト項目: RoomIdFactory::generate() は毎回異なる ID を生成する
        assert_ne!(RoomIdFactory::generate(), RoomIdFactory::generate());
    }

    #[test]
    fn test_client_id_factory_generate_uniqueness() {
        // テスト項目: ClientIdFactory::generate() は毎回異なる ID を生成する
        assert_ne!(ClientIdFactory::generate(), ClientIdFactory::generate());
    }
}
