//! SeaORM entity models for the roomboard database schema.

pub mod meeting_room;
pub mod reservation;
pub mod user;

pub mod prelude;
