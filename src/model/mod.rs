//! Wire-level DTOs shared by the API surface.

pub mod api;
pub mod meeting_room;
pub mod reservation;
pub mod user;
