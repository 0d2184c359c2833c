//! Repository trait for rooms and connected clients.
//!
//! The domain owns the abstraction; implementations live in the
//! infrastructure layer and use cases only ever see `Arc<dyn RoomRepository>`.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{ClientId, DisplayName, Participant, RepositoryError, Room, RoomId, Timestamp};

/// Channel feeding encoded frames to one connection's writer task
pub type ClientSender = UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Register a new room. Fails if a room with the same id exists.
    async fn create_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// Snapshot of a room.
    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// Snapshots of every room.
    async fn list_rooms(&self) -> Vec<Room>;

    /// Delete the room if it has been empty for at least `timeout` at `now`.
    /// Returns whether it was deleted.
    async fn remove_room_if_expired(
        &self,
        room_id: &RoomId,
        now: Timestamp,
        timeout: Duration,
    ) -> Result<bool, RepositoryError>;

    /// Add a participant to a room and remember its sender.
    async fn add_participant(
        &self,
        room_id: &RoomId,
        participant: Participant,
        sender: ClientSender,
    ) -> Result<(), RepositoryError>;

    /// Remove a participant from a room and forget its sender.
    async fn remove_participant(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
    ) -> Result<Participant, RepositoryError>;

    /// Set a participant's display name, returning the previous one.
    async fn rename_participant(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        name: DisplayName,
    ) -> Result<Option<DisplayName>, RepositoryError>;

    /// Sender of a connected client.
    async fn get_client_sender(&self, client_id: &ClientId) -> Option<ClientSender>;
}
