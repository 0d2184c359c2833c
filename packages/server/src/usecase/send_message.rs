//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 受信したエンベロープの解釈（NAME による名前設定、送信者名での再署名）と
//!   ブロードキャスト対象の選定
//!
//! ### なぜこのテストが必要か
//! - 送信者本人にはメッセージが返らないことを保証
//! - クライアントが author を偽装できないことを保証
//! - 名前を名乗る前のメッセージが拒否されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：TEXT / NAME / TYPING の中継
//! - 異常系：名前未設定、不正な名前
//! - エッジケース：クライアントから届いた LEAVE（中継しない）

use std::sync::Arc;

use roomchat_shared::{MessageEnvelope, MessageKind};

use crate::domain::{ClientId, DisplayName, RoomId, RoomRepository};

use super::{error::SendMessageError, relay::Relay};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 送信者のいるルーム
    /// * `from_client_id` - メッセージ送信者のクライアント ID
    /// * `envelope` - クライアントから届いたエンベロープ（author は無視される）
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Relay))` - 中継するエンベロープとブロードキャスト対象
    /// * `Ok(None)` - 中継しないエンベロープ
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        room_id: &RoomId,
        from_client_id: &ClientId,
        envelope: MessageEnvelope,
    ) -> Result<Option<Relay>, SendMessageError> {
        let relayed = match envelope.kind() {
            MessageKind::Name => {
                let name = DisplayName::new(envelope.content().to_string())?;
                let previous = self
                    .repository
                    .rename_participant(room_id, from_client_id, name.clone())
                    .await
                    .map_err(|_| SendMessageError::SenderNotFound(from_client_id.to_string()))?;
                tracing::info!(
                    "Client '{}' is now known as '{}' (was {:?})",
                    from_client_id,
                    name,
                    previous.as_ref().map(DisplayName::as_str)
                );
                MessageEnvelope::name(previous.map(DisplayName::into_string), name.into_string())
            }
            // LEAVE は切断時にサーバーが発行する
            MessageKind::Leave => {
                tracing::debug!("Ignoring LEAVE sent by client '{}'", from_client_id);
                return Ok(None);
            }
            kind @ (MessageKind::Text | MessageKind::Typing | MessageKind::StopTyping) => {
                let author = self.sender_name(room_id, from_client_id).await?;
                let content = match kind {
                    MessageKind::Text => envelope.content(),
                    _ => "",
                };
                MessageEnvelope::new(kind, content, Some(author))
            }
        };

        let targets = self.get_broadcast_targets(room_id, from_client_id).await?;
        Ok(Some(Relay {
            envelope: relayed,
            targets,
        }))
    }

    /// 送信者の表示名を取得
    async fn sender_name(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
    ) -> Result<String, SendMessageError> {
        let room = self
            .repository
            .get_room(room_id)
            .await
            .map_err(|_| SendMessageError::SenderNotFound(client_id.to_string()))?;
        let participant = room
            .get_participant(client_id)
            .ok_or_else(|| SendMessageError::SenderNotFound(client_id.to_string()))?;
        participant.author().ok_or(SendMessageError::NameNotSet)
    }

    /// ブロードキャスト対象のクライアント ID リストを取得
    ///
    /// 同じルームの送信者以外の全てのクライアント ID を返す
    async fn get_broadcast_targets(
        &self,
        room_id: &RoomId,
        exclude: &ClientId,
    ) -> Result<Vec<ClientId>, SendMessageError> {
        let room = self
            .repository
            .get_room(room_id)
            .await
            .map_err(|_| SendMessageError::SenderNotFound(exclude.to_string()))?;
        Ok(room.other_participant_ids(exclude))
    }
}
