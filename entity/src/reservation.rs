//! Reservation entity model.
//!
//! `user_id` is nullable: rows created before owner tracking was introduced
//! have no owner, and all read paths must tolerate that.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub meeting_room_id: i32,
    pub from_reserve: ChronoDateTimeUtc,
    pub to_reserve: ChronoDateTimeUtc,
    #[sea_orm(nullable)]
    pub user_id: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meeting_room::Entity",
        from = "Column::MeetingRoomId",
        to = "super::meeting_room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MeetingRoom,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::meeting_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingRoom.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
