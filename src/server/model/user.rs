//! Domain models for user data operations.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Application user resolved from the session.
///
/// Carries the role flag the access policy needs; the password hash stays in
/// the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Login email, unique across users.
    pub email: String,
    /// Whether the user may act on any reservation and list all of them.
    pub superuser: bool,
    /// Timestamp when the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            superuser: entity.superuser,
            created_at: entity.created_at,
        }
    }

    /// Converts the user to its DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            superuser: self.superuser,
        }
    }
}

/// Parameters for creating a user at registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    /// Argon2 hash of the submitted password.
    pub password_hash: String,
    pub superuser: bool,
}
