pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_user_table;
mod m20250801_000002_create_meeting_room_table;
mod m20250801_000003_create_reservation_table;
mod m20250812_000004_add_reservation_owner;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_user_table::Migration),
            Box::new(m20250801_000002_create_meeting_room_table::Migration),
            Box::new(m20250801_000003_create_reservation_table::Migration),
            Box::new(m20250812_000004_add_reservation_owner::Migration),
        ]
    }
}
