use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/register - Create an account
///
/// Registers a new user and logs them in by storing their id in the
/// session.
///
/// # Returns
/// - `201 Created` - The registered user
/// - `400 Bad Request` - Email already registered
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);
    let user = service.register(payload).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/auth/login - Start a session
///
/// Verifies the credentials and stores the user's id in the session. Any
/// previous session state is dropped first.
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Invalid email or password
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);
    let user = service.login(payload).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.clear().await;
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// POST /api/auth/logout - End the session
///
/// # Returns
/// - `204 No Content` - Session cleared, also when nobody was logged in
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);
    auth_session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me - Who am I
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Not logged in
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
