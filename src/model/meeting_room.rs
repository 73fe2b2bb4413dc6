//! Meeting room DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Meeting room as returned by listings and creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeetingRoomDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Request body for creating a meeting room.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateMeetingRoomDto {
    pub name: String,
    pub description: Option<String>,
}
