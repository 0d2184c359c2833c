//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - 参加者の切断処理（参加者削除、LEAVE の発行、空ルームの検出）
//!
//! ### どのような状況を想定しているか
//! - 正常系：名前のある参加者の切断と LEAVE 通知
//! - エッジケース：名前のない参加者の切断（通知なし）、最後の参加者の切断
//! - 異常系：存在しない参加者の切断試行

use std::sync::Arc;

use roomchat_shared::MessageEnvelope;

use crate::domain::{ClientId, RoomId, RoomRepository};

use super::{error::DisconnectError, relay::Relay};

/// 切断処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectOutcome {
    /// 残りの参加者に送る LEAVE（名前のない参加者の場合は None）
    pub leave: Option<Relay>,
    /// 切断後にルームが空になったか
    pub room_empty: bool,
}

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 参加者切断を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 参加者のいるルーム
    /// * `client_id` - 切断するクライアントの ID
    pub async fn execute(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
    ) -> Result<DisconnectOutcome, DisconnectError> {
        let participant = self
            .repository
            .remove_participant(room_id, client_id)
            .await
            .map_err(|_| DisconnectError::ParticipantNotFound(client_id.to_string()))?;

        let (remaining, room_empty) = match self.repository.get_room(room_id).await {
            Ok(room) => (room.other_participant_ids(client_id), room.is_empty()),
            Err(_) => (Vec::new(), true),
        };

        let leave = participant.author().map(|author| Relay {
            envelope: MessageEnvelope::leave(Some(author)),
            targets: remaining,
        });

        Ok(DisconnectOutcome { leave, room_empty })
    }
}
