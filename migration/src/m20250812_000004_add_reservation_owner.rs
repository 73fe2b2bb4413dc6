use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000003_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Reservations created before this migration have no owner, so the column
// must stay nullable. SQLite cannot add a foreign key constraint through
// ALTER TABLE; the relation is declared on the entity instead.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Reservation::Table)
                    .add_column(integer_null(Reservation::UserId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Reservation::Table)
                    .drop_column(Reservation::UserId)
                    .to_owned(),
            )
            .await
    }
}
