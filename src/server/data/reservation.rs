use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::reservation::{CreateReservationParams, Reservation, ReservationWindow};

/// Repository providing database operations for reservations.
///
/// Generic over the SeaORM connection: callers pass either the shared pool or
/// an open transaction. The overlap-candidate fetch and the write that follows
/// it must run on the same transaction, which the service layer owns.
pub struct ReservationRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new ReservationRepository over the given connection.
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new reservation and returns it with its assigned id.
    ///
    /// # Arguments
    /// - `params` - Room, window, and owner for the new reservation
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            meeting_room_id: ActiveValue::Set(params.meeting_room_id),
            from_reserve: ActiveValue::Set(params.window.from_reserve),
            to_reserve: ActiveValue::Set(params.window.to_reserve),
            user_id: ActiveValue::Set(Some(params.user_id)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Gets a reservation by id.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The reservation
    /// - `Ok(None)` - No reservation with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.conn)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Gets every reservation, ordered by window start.
    ///
    /// Unrestricted; the caller gates this to superusers.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::FromReserve)
            .all(self.conn)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets all reservations owned by the given user.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .all(self.conn)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets reservations for a room that end after `now`.
    ///
    /// Display query only; overlap validation uses `get_overlap_candidates`.
    ///
    /// # Arguments
    /// - `meeting_room_id` - Room to list
    /// - `now` - Explicit cutoff so the query stays deterministic in tests
    pub async fn get_future_for_room(
        &self,
        meeting_room_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::MeetingRoomId.eq(meeting_room_id))
            .filter(entity::reservation::Column::ToReserve.gt(now))
            .order_by_asc(entity::reservation::Column::FromReserve)
            .all(self.conn)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets the full overlap-candidate set for a room.
    ///
    /// Returns every reservation for the room, optionally excluding one id so
    /// an update does not conflict with itself. The service filters the
    /// candidates with the window overlap predicate.
    ///
    /// # Arguments
    /// - `meeting_room_id` - Room being booked
    /// - `excluding_id` - Reservation to leave out (the one being updated)
    pub async fn get_overlap_candidates(
        &self,
        meeting_room_id: i32,
        excluding_id: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::MeetingRoomId.eq(meeting_room_id));

        if let Some(excluding_id) = excluding_id {
            query = query.filter(entity::reservation::Column::Id.ne(excluding_id));
        }

        let entities = query.all(self.conn).await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Updates a reservation's window. Room and owner are immutable.
    ///
    /// # Arguments
    /// - `existing` - The reservation being updated
    /// - `window` - The new window
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(DbErr)` - Database error, including a vanished row
    pub async fn update_window(
        &self,
        existing: &Reservation,
        window: ReservationWindow,
    ) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            from_reserve: ActiveValue::Set(window.from_reserve),
            to_reserve: ActiveValue::Set(window.to_reserve),
            ..Default::default()
        }
        .update(self.conn)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Deletes a reservation and echoes the removed record.
    ///
    /// # Arguments
    /// - `existing` - The reservation to remove
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The removed reservation, for response echoing
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, existing: Reservation) -> Result<Reservation, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            ..Default::default()
        }
        .delete(self.conn)
        .await?;

        Ok(existing)
    }
}
