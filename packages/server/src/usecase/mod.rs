//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod connect_participant;
pub mod create_room;
pub mod disconnect_participant;
pub mod error;
pub mod expire_room;
pub mod relay;
pub mod send_message;

pub use connect_participant::ConnectParticipantUseCase;
pub use create_room::CreateRoomUseCase;
pub use disconnect_participant::{DisconnectOutcome, DisconnectParticipantUseCase};
pub use error::{ConnectError, CreateRoomError, DisconnectError, SendMessageError};
pub use expire_room::ExpireRoomUseCase;
pub use relay::Relay;
pub use send_message::SendMessageUseCase;
