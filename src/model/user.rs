//! User DTOs for the session identity surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authenticated user as returned by `/api/auth/me`.
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub superuser: bool,
}

/// Request body for registration.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}
