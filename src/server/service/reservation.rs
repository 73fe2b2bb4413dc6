use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::reservation::{
        CreateReservationDto, MyReservationDto, ReservationDto, UpdateReservationDto,
    },
    server::{
        data::{meeting_room::MeetingRoomRepository, reservation::ReservationRepository},
        error::{auth::AuthError, reservation::ReservationError, AppError},
        model::{
            reservation::{CreateReservationParams, Reservation, ReservationWindow},
            user::User,
        },
    },
};

/// Service handling reservation booking, listing, and lifecycle.
///
/// Every write validates the submitted window in a fixed order: interval
/// order first, then future start, then overlap against the room's existing
/// bookings. The overlap check and the write that depends on it share one
/// transaction; SQLite transactions are serializable, so two concurrent
/// requests for the same window cannot both commit.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks the stateless window rules.
    ///
    /// Interval order is checked before the future-start rule, so a window
    /// that fails both reports the ordering problem.
    ///
    /// # Arguments
    /// - `window` - Submitted reservation window
    /// - `now` - Validation-time clock, passed in by the caller
    ///
    /// # Returns
    /// - `Ok(())` - Window is well-formed and starts in the future
    /// - `Err(ReservationError)` - The earliest failing rule
    fn check_window(window: ReservationWindow, now: DateTime<Utc>) -> Result<(), ReservationError> {
        if !window.is_ordered() {
            return Err(ReservationError::InvalidInterval {
                from_reserve: window.from_reserve,
                to_reserve: window.to_reserve,
            });
        }

        if window.from_reserve <= now {
            return Err(ReservationError::StartNotInFuture {
                from_reserve: window.from_reserve,
            });
        }

        Ok(())
    }

    /// Checks the window against the room's existing bookings.
    ///
    /// # Arguments
    /// - `candidates` - Every reservation for the room, minus any excluded row
    /// - `window` - Submitted window
    /// - `meeting_room_id` - Room being booked, for the error
    fn check_overlap(
        candidates: &[Reservation],
        window: ReservationWindow,
        meeting_room_id: i32,
    ) -> Result<(), ReservationError> {
        if candidates.iter().any(|c| c.window.overlaps(&window)) {
            return Err(ReservationError::Overlap { meeting_room_id });
        }

        Ok(())
    }

    /// Checks that the acting user may modify the reservation.
    ///
    /// Owners and superusers pass. Ownerless legacy rows have no owner to
    /// match, so only superusers may touch them.
    fn check_access(user: &User, reservation: &Reservation) -> Result<(), AuthError> {
        if user.superuser || reservation.user_id == Some(user.id) {
            return Ok(());
        }

        Err(AuthError::AccessDenied {
            user_id: user.id,
            reason: format!("reservation {} belongs to another user", reservation.id),
        })
    }

    /// Books a room for the given user.
    ///
    /// Validates the window, checks the room exists, then runs the overlap
    /// check and the insert on one transaction.
    ///
    /// # Arguments
    /// - `user` - Authenticated user, recorded as the owner
    /// - `dto` - Requested room and window
    /// - `now` - Clock captured by the controller when the request arrived
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The created reservation
    /// - `Err(AppError)` - Validation failure, conflict, unknown room, or database error
    pub async fn create(
        &self,
        user: &User,
        dto: CreateReservationDto,
        now: DateTime<Utc>,
    ) -> Result<ReservationDto, AppError> {
        let window = ReservationWindow::new(dto.from_reserve, dto.to_reserve);
        Self::check_window(window, now)?;

        let room_repo = MeetingRoomRepository::new(self.db);
        if !room_repo.exists(dto.meeting_room_id).await? {
            return Err(AppError::NotFound("Meeting room not found".to_string()));
        }

        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let candidates = repo.get_overlap_candidates(dto.meeting_room_id, None).await?;
        Self::check_overlap(&candidates, window, dto.meeting_room_id)?;

        let created = repo
            .create(CreateReservationParams {
                meeting_room_id: dto.meeting_room_id,
                window,
                user_id: user.id,
            })
            .await?;
        txn.commit().await?;

        tracing::info!(
            reservation_id = created.id,
            meeting_room_id = created.meeting_room_id,
            user_id = user.id,
            "Reservation created"
        );

        Ok(created.into_dto())
    }

    /// Moves a reservation to a new window.
    ///
    /// The room and owner are immutable. The lookup, access check, overlap
    /// check (excluding the reservation itself), and update all run on one
    /// transaction.
    ///
    /// # Arguments
    /// - `user` - Authenticated user; must own the reservation or be a superuser
    /// - `id` - Reservation to move
    /// - `dto` - New window
    /// - `now` - Clock captured by the controller when the request arrived
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The updated reservation
    /// - `Err(AppError)` - Not found, forbidden, validation failure, conflict, or database error
    pub async fn update(
        &self,
        user: &User,
        id: i32,
        dto: UpdateReservationDto,
        now: DateTime<Utc>,
    ) -> Result<ReservationDto, AppError> {
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;
        Self::check_access(user, &existing)?;

        let window = ReservationWindow::new(dto.from_reserve, dto.to_reserve);
        Self::check_window(window, now)?;

        let candidates = repo
            .get_overlap_candidates(existing.meeting_room_id, Some(existing.id))
            .await?;
        Self::check_overlap(&candidates, window, existing.meeting_room_id)?;

        let updated = repo.update_window(&existing, window).await?;
        txn.commit().await?;

        tracing::info!(
            reservation_id = updated.id,
            user_id = user.id,
            "Reservation window updated"
        );

        Ok(updated.into_dto())
    }

    /// Cancels a reservation and echoes the removed record.
    ///
    /// # Arguments
    /// - `user` - Authenticated user; must own the reservation or be a superuser
    /// - `id` - Reservation to remove
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The removed reservation
    /// - `Err(AppError)` - Not found, forbidden, or database error
    pub async fn delete(&self, user: &User, id: i32) -> Result<ReservationDto, AppError> {
        let repo = ReservationRepository::new(self.db);

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;
        Self::check_access(user, &existing)?;

        let deleted = repo.delete(existing).await?;

        tracing::info!(
            reservation_id = deleted.id,
            user_id = user.id,
            "Reservation cancelled"
        );

        Ok(deleted.into_dto())
    }

    /// Lists every reservation. Superuser only.
    ///
    /// # Returns
    /// - `Ok(Vec<ReservationDto>)` - All reservations, owner included
    /// - `Err(AppError)` - Forbidden or database error
    pub async fn get_all(&self, user: &User) -> Result<Vec<ReservationDto>, AppError> {
        if !user.superuser {
            return Err(AuthError::AccessDenied {
                user_id: user.id,
                reason: "listing all reservations requires superuser".to_string(),
            }
            .into());
        }

        let repo = ReservationRepository::new(self.db);
        let reservations = repo.get_all().await?;

        Ok(reservations.into_iter().map(Reservation::into_dto).collect())
    }

    /// Lists the acting user's own reservations.
    ///
    /// The response shape omits the owner field; it is implied by the caller.
    pub async fn get_mine(&self, user: &User) -> Result<Vec<MyReservationDto>, AppError> {
        let repo = ReservationRepository::new(self.db);
        let reservations = repo.get_by_user(user.id).await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::into_my_dto)
            .collect())
    }

    /// Lists a room's upcoming reservations for display.
    ///
    /// # Arguments
    /// - `meeting_room_id` - Room to list
    /// - `now` - Clock captured by the controller when the request arrived
    ///
    /// # Returns
    /// - `Ok(Vec<ReservationDto>)` - Reservations ending after `now`, in start order
    /// - `Err(AppError)` - Unknown room or database error
    pub async fn get_future_for_room(
        &self,
        meeting_room_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<ReservationDto>, AppError> {
        let room_repo = MeetingRoomRepository::new(self.db);
        if !room_repo.exists(meeting_room_id).await? {
            return Err(AppError::NotFound("Meeting room not found".to_string()));
        }

        let repo = ReservationRepository::new(self.db);
        let reservations = repo.get_future_for_room(meeting_room_id, now).await?;

        Ok(reservations.into_iter().map(Reservation::into_dto).collect())
    }
}
