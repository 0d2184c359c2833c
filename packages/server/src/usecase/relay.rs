//! ブロードキャスト指示

use roomchat_shared::MessageEnvelope;

use crate::domain::ClientId;

/// 送信するエンベロープと、その配送先のクライアント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    pub envelope: MessageEnvelope,
    pub targets: Vec<ClientId>,
}
