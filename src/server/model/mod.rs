//! Domain models and operation-specific parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and to DTOs at the controller boundary; neither representation leaks
//! through the service layer.

pub mod meeting_room;
pub mod reservation;
pub mod user;
