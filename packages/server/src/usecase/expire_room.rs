//! UseCase: 空ルームの期限切れ処理

use std::{sync::Arc, time::Duration};

use crate::domain::{RepositoryError, RoomId, RoomRepository, Timestamp};

/// 空ルーム削除のユースケース
pub struct ExpireRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// ルームが空のまま残れる時間
    timeout: Duration,
}

impl ExpireRoomUseCase {
    /// 新しい ExpireRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    /// ルームが `timeout` 以上空のままなら削除する
    ///
    /// 空になった時刻はルーム自身が持つため、古いタイマーが発火しても
    /// 最近空になったルームは削除されない。
    ///
    /// # Returns
    ///
    /// ルームを削除した場合は `true`。参加者がいる、空になってから期限前、
    /// または既に削除済みの場合は `false`。
    pub async fn execute(&self, room_id: &RoomId) -> bool {
        match self
            .repository
            .remove_room_if_expired(room_id, Timestamp::now(), self.timeout)
            .await
        {
            Ok(removed) => removed,
            Err(RepositoryError::RoomNotFound(_)) => false,
            Err(e) => {
                tracing::warn!("Failed to expire room '{}': {}", room_id, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockRoomRepository, RoomIdFactory};

    const TIMEOUT: Duration = Duration::from_millis(1000);

    #[tokio::test]
    async fn test_expire_empty_room() {
        // テスト項目: 期限を過ぎた空のルームは削除される
        let mut mock = MockRoomRepository::new();
        mock.expect_remove_room_if_expired()
            .withf(|_, _, timeout| *timeout == TIMEOUT)
            .times(1)
            .returning(|_, _, _| Ok(true));
        let usecase = ExpireRoomUseCase::new(Arc::new(mock), TIMEOUT);

        assert!(usecase.execute(&RoomIdFactory::generate()).await);
    }

    #[tokio::test]
    async fn test_expire_occupied_room() {
        // テスト項目: 参加者のいる、または最近空になったルームは削除されない
        let mut mock = MockRoomRepository::new();
        mock.expect_remove_room_if_expired()
            .times(1)
            .returning(|_, _, _| Ok(false));
        let usecase = ExpireRoomUseCase::new(Arc::new(mock), TIMEOUT);

        assert!(!usecase.execute(&RoomIdFactory::generate()).await);
    }

    #[tokio::test]
    async fn test_expire_already_removed_room() {
        // テスト項目: 既に削除済みのルームは false を返す
        let mut mock = MockRoomRepository::new();
        mock.expect_remove_room_if_expired()
            .times(1)
            .returning(|room_id, _, _| Err(RepositoryError::RoomNotFound(room_id.to_string())));
        let usecase = ExpireRoomUseCase::new(Arc::new(mock), TIMEOUT);

        assert!(!usecase.execute(&RoomIdFactory::generate()).await);
    }
}
