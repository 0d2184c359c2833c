//! Domain layer for the chat server.
//!
//! This module contains business logic that is independent of
//! transport encodings and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{Participant, Room};
pub use error::{RepositoryError, RoomError, ValueObjectError};
pub use factory::{ClientIdFactory, RoomIdFactory};
pub use repository::{ClientSender, RoomRepository};
pub use value_object::{ClientId, DisplayName, RoomId, Timestamp};

#[cfg(test)]
pub use repository::MockRoomRepository;
