use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::meeting_room::{CreateMeetingRoomParams, MeetingRoom};

/// Repository providing database operations for meeting rooms.
pub struct MeetingRoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingRoomRepository<'a> {
    /// Creates a new MeetingRoomRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new meeting room and returns it with its assigned id.
    pub async fn create(&self, params: CreateMeetingRoomParams) -> Result<MeetingRoom, DbErr> {
        let entity = entity::meeting_room::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MeetingRoom::from_entity(entity))
    }

    /// Gets a meeting room by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MeetingRoom>, DbErr> {
        let entity = entity::prelude::MeetingRoom::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MeetingRoom::from_entity))
    }

    /// Gets all meeting rooms ordered by name.
    pub async fn get_all(&self) -> Result<Vec<MeetingRoom>, DbErr> {
        let entities = entity::prelude::MeetingRoom::find()
            .order_by_asc(entity::meeting_room::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MeetingRoom::from_entity).collect())
    }

    /// Whether a room with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MeetingRoom::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether a room with the given name exists.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::MeetingRoom::find()
            .filter(entity::meeting_room::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
