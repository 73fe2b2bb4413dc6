use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000002_create_meeting_room_table::MeetingRoom;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::MeetingRoomId))
                    .col(timestamp(Reservation::FromReserve))
                    .col(timestamp(Reservation::ToReserve))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_meeting_room_id")
                            .from(Reservation::Table, Reservation::MeetingRoomId)
                            .to(MeetingRoom::Table, MeetingRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    #[sea_orm(iden = "reservations")]
    Table,
    Id,
    MeetingRoomId,
    FromReserve,
    ToReserve,
    UserId,
    CreatedAt,
}
