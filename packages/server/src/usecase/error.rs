//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::ValueObjectError;

/// ルーム作成のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// 一意なルーム ID を生成できなかった
    #[error("Could not allocate a unique room id after {attempts} attempts")]
    IdExhausted { attempts: usize },
}

/// 参加者接続のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    #[error("Room capacity exceeded")]
    RoomCapacityExceeded,
}

/// メッセージ送信のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// 名前を名乗る前に NAME 以外を送信した
    #[error("Client name not set")]
    NameNotSet,

    /// NAME の内容が表示名として不正
    #[error("Invalid display name: {0}")]
    InvalidName(#[from] ValueObjectError),

    /// 送信者がルームに存在しない
    #[error("Sender '{0}' is not in the room")]
    SenderNotFound(String),
}

/// 参加者切断のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisconnectError {
    #[error("Participant '{0}' is not connected")]
    ParticipantNotFound(String),
}
