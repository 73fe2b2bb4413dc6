//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations (CRUD) for each domain in the
//! application. They use SeaORM entity models internally and return domain
//! models to keep the data layer separated from the business logic layer.
//!
//! `ReservationRepository` is generic over the connection so the service layer
//! can run the overlap check and the subsequent write on one transaction.

pub mod meeting_room;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;
