//! Domain models for reservation data operations.
//!
//! `ReservationWindow` carries the overlap predicate, the single definition of
//! what it means for two reservations to collide. Boundary checks are
//! inclusive: a window that ends exactly when another begins counts as
//! overlapping, so back-to-back bookings are rejected.

use chrono::{DateTime, Utc};

use crate::model::reservation::{MyReservationDto, ReservationDto};

/// Time window of a reservation, `[from_reserve, to_reserve]`.
///
/// Ordering (`from_reserve < to_reserve`) is validated by the service before
/// a window reaches the store; the type itself does not enforce it so that
/// windows read back from storage never re-run validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationWindow {
    /// Start of the reserved window.
    pub from_reserve: DateTime<Utc>,
    /// End of the reserved window.
    pub to_reserve: DateTime<Utc>,
}

impl ReservationWindow {
    pub fn new(from_reserve: DateTime<Utc>, to_reserve: DateTime<Utc>) -> Self {
        Self {
            from_reserve,
            to_reserve,
        }
    }

    /// Whether the window is well-ordered (`from_reserve < to_reserve`).
    pub fn is_ordered(&self) -> bool {
        self.from_reserve < self.to_reserve
    }

    /// Whether two windows share at least one instant, boundaries included.
    ///
    /// True when either endpoint of `self` falls within `other` (inclusive),
    /// or when `self` fully contains `other`. Symmetric for well-ordered
    /// windows.
    pub fn overlaps(&self, other: &ReservationWindow) -> bool {
        let from_within = self.from_reserve >= other.from_reserve
            && self.from_reserve <= other.to_reserve;
        let to_within =
            self.to_reserve >= other.from_reserve && self.to_reserve <= other.to_reserve;
        let contains =
            self.from_reserve <= other.from_reserve && self.to_reserve >= other.to_reserve;

        from_within || to_within || contains
    }
}

/// Reservation of a meeting room for a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique identifier for the reservation.
    pub id: i32,
    /// Room the reservation occupies.
    pub meeting_room_id: i32,
    /// Reserved time window.
    pub window: ReservationWindow,
    /// Owner of the reservation; `None` on rows created before owner tracking.
    pub user_id: Option<i32>,
    /// Timestamp when the reservation was created.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            meeting_room_id: entity.meeting_room_id,
            window: ReservationWindow::new(entity.from_reserve, entity.to_reserve),
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the reservation to the full DTO, owner included.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            meeting_room_id: self.meeting_room_id,
            from_reserve: self.window.from_reserve,
            to_reserve: self.window.to_reserve,
            user_id: self.user_id,
        }
    }

    /// Converts the reservation to the owner-omitting DTO used by self-listing.
    pub fn into_my_dto(self) -> MyReservationDto {
        MyReservationDto {
            id: self.id,
            meeting_room_id: self.meeting_room_id,
            from_reserve: self.window.from_reserve,
            to_reserve: self.window.to_reserve,
        }
    }
}

/// Parameters for creating a new reservation.
///
/// Built explicitly at the controller from the request DTO and the session
/// identity; the owner is never client-supplied.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    /// Room to reserve.
    pub meeting_room_id: i32,
    /// Requested window.
    pub window: ReservationWindow,
    /// Owner taken from the authenticated session.
    pub user_id: i32,
}
