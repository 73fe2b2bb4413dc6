//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They are responsible for:
//!
//! - **Business Logic**: Validation rules and the access policy
//! - **Orchestration**: Coordinating repository calls and transactions
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Reservation writes run their overlap check and the insert or update on a
//! single transaction so two concurrent requests cannot both pass validation.

pub mod auth;
pub mod meeting_room;
pub mod reservation;
