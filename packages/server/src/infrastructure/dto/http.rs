//! HTTP API response DTOs for the chat server.

use serde::{Deserialize, Serialize};

use crate::domain::Room;
use roomchat_shared::{Route, time::timestamp_to_rfc3339};

/// Room summary for list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    /// Browser path of the room
    pub path: String,
    /// Display names of named participants, in connection order
    pub participants: Vec<String>,
    pub participant_count: usize,
    pub created_at: String, // RFC 3339
}

impl From<&Room> for RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            path: Route::room(room.id.as_str()).to_string(),
            participants: room
                .participants
                .iter()
                .filter_map(|p| p.author())
                .collect(),
            participant_count: room.participants.len(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
