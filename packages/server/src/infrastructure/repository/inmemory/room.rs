//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ロックの取得順序は常に `rooms` → `connected_clients` です。

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ClientId, ClientSender, DisplayName, Participant, RepositoryError, Room, RoomError, RoomId,
    RoomRepository, Timestamp,
};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    /// Room ドメインモデル（ルーム ID ごと）
    rooms: Mutex<HashMap<RoomId, Room>>,
    /// 接続中のクライアントの送信チャンネル
    connected_clients: Mutex<HashMap<ClientId, ClientSender>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(&room.id) {
            return Err(RepositoryError::RoomAlreadyExists(room.id.to_string()));
        }
        rooms.insert(room.id.clone(), room);
        Ok(())
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        let mut list: Vec<Room> = rooms.values().cloned().collect();
        list.sort_by_key(|room| room.created_at);
        list
    }

    async fn remove_room_if_expired(
        &self,
        room_id: &RoomId,
        now: Timestamp,
        timeout: Duration,
    ) -> Result<bool, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;
        if !room.is_expired(now, timeout) {
            return Ok(false);
        }
        rooms.remove(room_id);
        Ok(true)
    }

    async fn add_participant(
        &self,
        room_id: &RoomId,
        participant: Participant,
        sender: ClientSender,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;

        let client_id = participant.id.clone();
        room.add_participant(participant)?;

        // Only if room addition succeeds, remember the sender
        let mut clients = self.connected_clients.lock().await;
        clients.insert(client_id, sender);
        Ok(())
    }

    async fn remove_participant(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
    ) -> Result<Participant, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;
        let participant = room
            .remove_participant(client_id, Timestamp::now())
            .ok_or_else(|| RoomError::ParticipantNotFound(client_id.to_string()))?;

        let mut clients = self.connected_clients.lock().await;
        clients.remove(client_id);
        Ok(participant)
    }

    async fn rename_participant(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        name: DisplayName,
    ) -> Result<Option<DisplayName>, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;
        Ok(room.rename_participant(client_id, name)?)
    }

    async fn get_client_sender(&self, client_id: &ClientId) -> Option<ClientSender> {
        let clients = self.connected_clients.lock().await;
        clients.get(client_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientIdFactory, RoomIdFactory};
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - ルームの作成・取得・空ルームの削除
    // - 参加者の追加・削除が rooms と connected_clients の両方に反映されること
    // - エラーハンドリング（存在しないルーム、容量超過など）
    // ========================================

    async fn create_repository_with_room() -> (InMemoryRoomRepository, RoomId) {
        let repo = InMemoryRoomRepository::new();
        let room_id = RoomIdFactory::generate();
        repo.create_room(Room::new(room_id.clone(), Timestamp::new(0)))
            .await
            .unwrap();
        (repo, room_id)
    }

    #[tokio::test]
    async fn test_create_and_get_room() {
        // テスト項目: 作成したルームを取得できる
        // given (前提条件):
        let (repo, room_id) = create_repository_with_room().await;

        // when (操作):
        let room = repo.get_room(&room_id).await;

        // then (期待する結果):
        assert_eq!(room.unwrap().id, room_id);
        assert_eq!(repo.list_rooms().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_room_fails() {
        // テスト項目: 同じ ID のルームは二重に作成できない
        let (repo, room_id) = create_repository_with_room().await;

        let result = repo
            .create_room(Room::new(room_id.clone(), Timestamp::new(1)))
            .await;

        assert_eq!(
            result,
            Err(RepositoryError::RoomAlreadyExists(room_id.to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_unknown_room_fails() {
        // テスト項目: 存在しないルームの取得は RoomNotFound になる
        let repo = InMemoryRoomRepository::new();
        let room_id = RoomIdFactory::generate();

        let result = repo.get_room(&room_id).await;

        assert_eq!(
            result.unwrap_err(),
            RepositoryError::RoomNotFound(room_id.to_string())
        );
    }

    #[tokio::test]
    async fn test_add_participant_success() {
        // テスト項目: 参加者を追加すると rooms と connected_clients の両方に反映される
        // given (前提条件):
        let (repo, room_id) = create_repository_with_room().await;
        let (sender, _receiver) = mpsc::unbounded_channel();
        let client_id = ClientIdFactory::generate();

        // when (操作):
        let result = repo
            .add_participant(
                &room_id,
                Participant::new(client_id.clone(), Timestamp::new(10)),
                sender,
            )
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(repo.get_client_sender(&client_id).await.is_some());
        let room = repo.get_room(&room_id).await.unwrap();
        assert_eq!(room.participants.len(), 1);
        assert_eq!(room.participants[0].id, client_id);
    }

    #[tokio::test]
    async fn test_add_participant_over_capacity_fails() {
        // テスト項目: 容量を超える参加者は追加されず、送信チャンネルも登録されない
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room_id = RoomIdFactory::generate();
        repo.create_room(Room::with_capacity(room_id.clone(), Timestamp::new(0), 1))
            .await
            .unwrap();
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        let first = ClientIdFactory::generate();
        let second = ClientIdFactory::generate();
        repo.add_participant(&room_id, Participant::new(first, Timestamp::new(1)), tx1)
            .await
            .unwrap();

        // when (操作):
        let result = repo
            .add_participant(
                &room_id,
                Participant::new(second.clone(), Timestamp::new(2)),
                tx2,
            )
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::Room(RoomError::CapacityExceeded {
                capacity: 1,
                current: 1
            }))
        );
        assert!(repo.get_client_sender(&second).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_participant_success() {
        // テスト項目: 参加者を削除すると rooms と connected_clients の両方から削除される
        // given (前提条件):
        let (repo, room_id) = create_repository_with_room().await;
        let (sender, _receiver) = mpsc::unbounded_channel();
        let client_id = ClientIdFactory::generate();
        repo.add_participant(
            &room_id,
            Participant::new(client_id.clone(), Timestamp::new(10)),
            sender,
        )
        .await
        .unwrap();

        // when (操作):
        let removed = repo.remove_participant(&room_id, &client_id).await;

        // then (期待する結果):
        assert_eq!(removed.unwrap().id, client_id);
        assert!(repo.get_client_sender(&client_id).await.is_none());
        assert!(repo.get_room(&room_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_nonexistent_participant() {
        // テスト項目: 存在しない参加者を削除しようとするとエラーが返される
        let (repo, room_id) = create_repository_with_room().await;
        let client_id = ClientIdFactory::generate();

        let result = repo.remove_participant(&room_id, &client_id).await;

        assert_eq!(
            result.unwrap_err(),
            RepositoryError::Room(RoomError::ParticipantNotFound(client_id.to_string()))
        );
    }

    #[tokio::test]
    async fn test_rename_participant() {
        // テスト項目: 参加者の名前を変更すると以前の名前が返される
        let (repo, room_id) = create_repository_with_room().await;
        let (sender, _receiver) = mpsc::unbounded_channel();
        let client_id = ClientIdFactory::generate();
        repo.add_participant(
            &room_id,
            Participant::new(client_id.clone(), Timestamp::new(10)),
            sender,
        )
        .await
        .unwrap();
        let bob = DisplayName::new("bob".to_string()).unwrap();
        let bob2 = DisplayName::new("bob2".to_string()).unwrap();

        let first = repo
            .rename_participant(&room_id, &client_id, bob.clone())
            .await;
        let second = repo.rename_participant(&room_id, &client_id, bob2).await;

        assert_eq!(first, Ok(None));
        assert_eq!(second, Ok(Some(bob)));
    }

    #[tokio::test]
    async fn test_remove_room_if_expired() {
        // テスト項目: 空の状態が期限を過ぎたルームのみ削除される
        // given (前提条件):
        let (repo, room_id) = create_repository_with_room().await;
        let (sender, _receiver) = mpsc::unbounded_channel();
        let client_id = ClientIdFactory::generate();
        repo.add_participant(
            &room_id,
            Participant::new(client_id.clone(), Timestamp::new(10)),
            sender,
        )
        .await
        .unwrap();

        // when (操作): 参加者がいる間は削除されない
        let while_occupied = repo
            .remove_room_if_expired(&room_id, Timestamp::now(), Duration::ZERO)
            .await;
        repo.remove_participant(&room_id, &client_id).await.unwrap();
        let once_empty = repo
            .remove_room_if_expired(&room_id, Timestamp::now(), Duration::ZERO)
            .await;

        // then (期待する結果):
        assert_eq!(while_occupied, Ok(false));
        assert_eq!(once_empty, Ok(true));
        assert!(repo.list_rooms().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_room_if_expired_keeps_recently_emptied_room() {
        // テスト項目: 最近空になったルームは作成時刻から期限を過ぎていても削除されない
        // given (前提条件): 作成時刻の古いルームに参加して退出する
        let repo = InMemoryRoomRepository::new();
        let room_id = RoomIdFactory::generate();
        repo.create_room(Room::new(room_id.clone(), Timestamp::new(0)))
            .await
            .unwrap();
        let (sender, _receiver) = mpsc::unbounded_channel();
        let client_id = ClientIdFactory::generate();
        repo.add_participant(
            &room_id,
            Participant::new(client_id.clone(), Timestamp::now()),
            sender,
        )
        .await
        .unwrap();
        repo.remove_participant(&room_id, &client_id).await.unwrap();

        // when (操作):
        let result = repo
            .remove_room_if_expired(&room_id, Timestamp::now(), Duration::from_secs(60))
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(false));
        assert_eq!(repo.list_rooms().await.len(), 1);
    }
}
