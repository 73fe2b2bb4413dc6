use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation and conflict errors for reservation create/update operations.
///
/// Validation order is fixed: interval order, then future start, then overlap.
/// A request that fails several checks reports the earliest-failing one.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReservationError {
    /// The submitted window has `from_reserve >= to_reserve`.
    ///
    /// Results in a 422 Unprocessable Entity response.
    #[error("Reservation start {from_reserve} must be before end {to_reserve}")]
    InvalidInterval {
        from_reserve: DateTime<Utc>,
        to_reserve: DateTime<Utc>,
    },

    /// The submitted window starts at or before the validation-time "now".
    ///
    /// Only raised on create and update of the interval; reservations read
    /// back from storage are never re-validated. Results in a 422
    /// Unprocessable Entity response.
    #[error("Reservation start {from_reserve} must be in the future")]
    StartNotInFuture { from_reserve: DateTime<Utc> },

    /// The submitted window overlaps an existing reservation for the room.
    ///
    /// Boundary-touching windows count as overlapping. Results in a 409
    /// Conflict response; the caller may retry with a different window.
    #[error("Meeting room {meeting_room_id} is already reserved in the requested window")]
    Overlap { meeting_room_id: i32 },
}

/// Converts reservation errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For overlapping windows
/// - 422 Unprocessable Entity - For malformed or past windows
impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidInterval { .. } | Self::StartNotInFuture { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Overlap { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
