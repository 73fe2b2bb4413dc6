//! Reservation factory for creating test reservation entities.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{Duration, Utc};
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, room.id)
///     .owner(Some(user.id))
///     .window(Utc::now() + Duration::hours(2), Utc::now() + Duration::hours(3))
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    meeting_room_id: i32,
    user_id: Option<i32>,
    from_reserve: chrono::DateTime<Utc>,
    to_reserve: chrono::DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `None` (a legacy, ownerless row)
    /// - window: one hour long, starting one hour from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `meeting_room_id` - Room the reservation belongs to
    pub fn new(db: &'a DatabaseConnection, meeting_room_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            meeting_room_id,
            user_id: None,
            from_reserve: now + Duration::hours(1),
            to_reserve: now + Duration::hours(2),
        }
    }

    /// Sets the owning user.
    pub fn owner(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the reserved time window.
    pub fn window(
        mut self,
        from_reserve: chrono::DateTime<Utc>,
        to_reserve: chrono::DateTime<Utc>,
    ) -> Self {
        self.from_reserve = from_reserve;
        self.to_reserve = to_reserve;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            meeting_room_id: ActiveValue::Set(self.meeting_room_id),
            from_reserve: ActiveValue::Set(self.from_reserve),
            to_reserve: ActiveValue::Set(self.to_reserve),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default window, owned by the given user.
///
/// Shorthand for `ReservationFactory::new(db, room_id).owner(Some(user_id)).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    meeting_room_id: i32,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, meeting_room_id)
        .owner(Some(user_id))
        .build()
        .await
}
