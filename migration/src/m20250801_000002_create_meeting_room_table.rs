use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeetingRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(MeetingRoom::Id))
                    .col(string_uniq(MeetingRoom::Name))
                    .col(text_null(MeetingRoom::Description))
                    .col(
                        timestamp(MeetingRoom::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MeetingRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MeetingRoom {
    #[sea_orm(iden = "meeting_rooms")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
