//! Domain models for meeting room data operations.

use chrono::{DateTime, Utc};

use crate::model::meeting_room::MeetingRoomDto;

/// Shared room that reservations are booked against.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRoom {
    /// Unique identifier for the room.
    pub id: i32,
    /// Display name, unique across rooms.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Timestamp when the room was created.
    pub created_at: DateTime<Utc>,
}

impl MeetingRoom {
    /// Converts an entity model to a room domain model at the repository boundary.
    pub fn from_entity(entity: entity::meeting_room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    /// Converts the room to its DTO for API responses.
    pub fn into_dto(self) -> MeetingRoomDto {
        MeetingRoomDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for creating a meeting room.
#[derive(Debug, Clone)]
pub struct CreateMeetingRoomParams {
    pub name: String,
    pub description: Option<String>,
}
