//! UseCase: ルーム作成処理

use std::sync::Arc;

use crate::domain::{RepositoryError, Room, RoomId, RoomIdFactory, RoomRepository, Timestamp};

use super::error::CreateRoomError;

/// ID 衝突時の再試行回数
const MAX_ATTEMPTS: usize = 8;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// 作成するルームの参加者上限
    participant_capacity: usize,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, participant_capacity: usize) -> Self {
        Self {
            repository,
            participant_capacity,
        }
    }

    /// ルーム作成を実行
    ///
    /// 既存のルームと衝突しない ID が得られるまで生成し直します。
    ///
    /// # Returns
    ///
    /// * `Ok(RoomId)` - 作成されたルームの ID
    /// * `Err(CreateRoomError)` - 一意な ID を確保できなかった
    pub async fn execute(&self) -> Result<RoomId, CreateRoomError> {
        for _ in 0..MAX_ATTEMPTS {
            let room_id = RoomIdFactory::generate();
            let room = Room::with_capacity(
                room_id.clone(),
                Timestamp::now(),
                self.participant_capacity,
            );
            match self.repository.create_room(room).await {
                Ok(()) => return Ok(room_id),
                Err(RepositoryError::RoomAlreadyExists(id)) => {
                    tracing::warn!("Room id collision on '{}', regenerating", id);
                }
                Err(e) => {
                    tracing::warn!("Failed to create room: {}", e);
                }
            }
        }
        Err(CreateRoomError::IdExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
