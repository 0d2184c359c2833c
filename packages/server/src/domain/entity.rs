//! Core domain models for the chat application.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{
    error::RoomError,
    value_object::{ClientId, DisplayName, RoomId, Timestamp},
};

/// Default maximum number of participants allowed in a room
pub const DEFAULT_PARTICIPANT_CAPACITY: usize = 50;

/// Represents a chat room and the participants currently connected to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Participants in connection order
    pub participants: Vec<Participant>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
    /// Maximum number of participants allowed
    pub participant_capacity: usize,
    /// Since when nobody has been in the room; `None` while occupied
    pub empty_since: Option<Timestamp>,
}

impl Room {
    /// Create a new empty room with the given ID and creation timestamp
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self::with_capacity(id, created_at, DEFAULT_PARTICIPANT_CAPACITY)
    }

    /// Create a new empty room with a custom participant capacity
    pub fn with_capacity(id: RoomId, created_at: Timestamp, participant_capacity: usize) -> Self {
        Self {
            id,
            participants: Vec::new(),
            created_at,
            participant_capacity,
            empty_since: Some(created_at),
        }
    }

    /// Add a participant to the room
    ///
    /// # Errors
    ///
    /// Returns `RoomError::CapacityExceeded` if the room is at full capacity
    pub fn add_participant(&mut self, participant: Participant) -> Result<(), RoomError> {
        if self.is_full() {
            return Err(RoomError::CapacityExceeded {
                capacity: self.participant_capacity,
                current: self.participants.len(),
            });
        }
        self.participants.push(participant);
        self.empty_since = None;
        Ok(())
    }

    /// Remove a participant from the room by ID, returning it
    ///
    /// When the last participant leaves, `at` starts the empty period.
    pub fn remove_participant(
        &mut self,
        participant_id: &ClientId,
        at: Timestamp,
    ) -> Option<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| &p.id == participant_id)?;
        let participant = self.participants.remove(index);
        if self.participants.is_empty() {
            self.empty_since = Some(at);
        }
        Some(participant)
    }

    /// Set the display name of a participant
    ///
    /// # Returns
    ///
    /// The previous name, if the participant had one
    ///
    /// # Errors
    ///
    /// Returns `RoomError::ParticipantNotFound` if the participant is not in the room
    pub fn rename_participant(
        &mut self,
        participant_id: &ClientId,
        name: DisplayName,
    ) -> Result<Option<DisplayName>, RoomError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| &p.id == participant_id)
            .ok_or_else(|| RoomError::ParticipantNotFound(participant_id.to_string()))?;
        Ok(participant.name.replace(name))
    }

    /// Get a participant by ID
    pub fn get_participant(&self, participant_id: &ClientId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == participant_id)
    }

    /// IDs of every participant except `exclude`
    pub fn other_participant_ids(&self, exclude: &ClientId) -> Vec<ClientId> {
        self.participants
            .iter()
            .filter(|p| &p.id != exclude)
            .map(|p| p.id.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.participant_capacity
    }

    /// Whether the room has stayed empty for at least `timeout` at `now`
    pub fn is_expired(&self, now: Timestamp, timeout: Duration) -> bool {
        let timeout_millis = i64::try_from(timeout.as_millis()).unwrap_or(i64::MAX);
        match self.empty_since {
            Some(since) if self.is_empty() => {
                now.value().saturating_sub(since.value()) >= timeout_millis
            }
            _ => false,
        }
    }
}

/// Represents a participant in a chat room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Connection identifier
    pub id: ClientId,
    /// Display name, unset until the participant announces one
    pub name: Option<DisplayName>,
    /// Timestamp when the participant connected
    pub connected_at: Timestamp,
}

impl Participant {
    /// Create a new participant without a name
    pub fn new(id: ClientId, connected_at: Timestamp) -> Self {
        Self {
            id,
            name: None,
            connected_at,
        }
    }

    /// Display name as a plain string, used as envelope author
    pub fn author(&self) -> Option<String> {
        self.name.as_ref().map(|n| n.as_str().to_string())
    }
}
