//! Reservation DTOs.
//!
//! Two response shapes exist on purpose: `ReservationDto` carries the owner id
//! (possibly null on legacy rows), while `MyReservationDto` omits the owner
//! field entirely; the self-listing endpoint never serializes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reservation as returned by create, update, delete, and privileged listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    /// Unique identifier of the reservation.
    pub id: i32,
    /// Room the reservation occupies.
    pub meeting_room_id: i32,
    /// Start of the reserved window.
    pub from_reserve: DateTime<Utc>,
    /// End of the reserved window.
    pub to_reserve: DateTime<Utc>,
    /// Owner of the reservation; null on rows created before owner tracking.
    pub user_id: Option<i32>,
}

/// Reservation as returned by the "my reservations" listing.
///
/// Identical to `ReservationDto` minus the owner field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MyReservationDto {
    /// Unique identifier of the reservation.
    pub id: i32,
    /// Room the reservation occupies.
    pub meeting_room_id: i32,
    /// Start of the reserved window.
    pub from_reserve: DateTime<Utc>,
    /// End of the reserved window.
    pub to_reserve: DateTime<Utc>,
}

/// Request body for creating a reservation.
///
/// The owner is taken from the session, never from the payload. Unknown
/// fields are rejected.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateReservationDto {
    /// Room to reserve.
    pub meeting_room_id: i32,
    /// Requested start of the window.
    pub from_reserve: DateTime<Utc>,
    /// Requested end of the window.
    pub to_reserve: DateTime<Utc>,
}

/// Request body for updating a reservation's window.
///
/// Room and owner are immutable; only the window can change.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateReservationDto {
    /// New start of the window.
    pub from_reserve: DateTime<Utc>,
    /// New end of the window.
    pub to_reserve: DateTime<Utc>,
}
