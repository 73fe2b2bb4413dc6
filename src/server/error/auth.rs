use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session carries a user id that no longer resolves to a database row.
    ///
    /// Happens when a user is deleted while their session is still live.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The acting user is neither the owner of the resource nor a superuser.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} denied access: {reason}")]
    AccessDenied {
        /// Id of the user that attempted the operation.
        user_id: i32,
        /// What the user attempted, for server-side logging.
        reason: String,
    },

    /// Registration attempted with an email that is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Email '{0}' is already registered")]
    EmailTaken(String),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Results in a 401 Unauthorized response with a message that does not
    /// reveal which of the two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping
/// client-facing messages generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For duplicate registration
/// - 401 Unauthorized - For missing/stale sessions and bad credentials
/// - 403 Forbidden - For access to another user's reservation
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Not allowed".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Email is already registered".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
