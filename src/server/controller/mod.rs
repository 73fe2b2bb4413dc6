//! HTTP request handlers.
//!
//! Controllers are thin: they resolve the session user through `AuthGuard`,
//! capture the request clock once, delegate to the service layer, and map the
//! result to a status code and JSON body. No business rules live here.

pub mod auth;
pub mod meeting_room;
pub mod reservation;
