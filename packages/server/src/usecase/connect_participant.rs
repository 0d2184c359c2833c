//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - 参加者の接続処理（ルームの存在確認、容量チェック）
//!
//! ### どのような状況を想定しているか
//! - 正常系：名前のない参加者としてルームに追加される
//! - 異常系：存在しないルームへの接続、容量超過

use std::sync::Arc;

use crate::domain::{
    ClientId, ClientIdFactory, ClientSender, Participant, RepositoryError, RoomError, RoomId,
    RoomRepository, Timestamp,
};

use super::error::ConnectError;

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 参加者接続を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 接続先のルーム ID
    /// * `sender` - このクライアント宛てのメッセージ送信チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(ClientId)` - 発行されたクライアント ID
    /// * `Err(ConnectError)` - 接続失敗
    pub async fn execute(
        &self,
        room_id: &RoomId,
        sender: ClientSender,
    ) -> Result<ClientId, ConnectError> {
        let client_id = ClientIdFactory::generate();
        let participant = Participant::new(client_id.clone(), Timestamp::now());

        self.repository
            .add_participant(room_id, participant, sender)
            .await
            .map_err(|e| match e {
                RepositoryError::Room(RoomError::CapacityExceeded { .. }) => {
                    ConnectError::RoomCapacityExceeded
                }
                _ => ConnectError::RoomNotFound(room_id.to_string()),
            })?;

        Ok(client_id)
    }

    /// 接続前の事前チェック
    ///
    /// WebSocket のアップグレード前に、ルームが存在し空きがあることを確認します。
    pub async fn check_room(&self, room_id: &RoomId) -> Result<(), ConnectError> {
        let room = self
            .repository
            .get_room(room_id)
            .await
            .map_err(|_| ConnectError::RoomNotFound(room_id.to_string()))?;
        if room.is_full() {
            return Err(ConnectError::RoomCapacityExceeded);
        }
        Ok(())
    }
}
