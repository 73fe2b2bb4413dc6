use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            CreateReservationDto, MyReservationDto, ReservationDto, UpdateReservationDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::reservation::ReservationService,
        state::AppState,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

/// POST /api/reservations - Book a room
///
/// Creates a reservation for the authenticated user. The window must be
/// ordered, start in the future, and not overlap any existing booking for
/// the room; windows that merely touch at a boundary still conflict.
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `201 Created` - The created reservation
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown meeting room
/// - `409 Conflict` - Window overlaps an existing reservation
/// - `422 Unprocessable Entity` - Malformed or past window
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Meeting room not found", body = ErrorDto),
        (status = 409, description = "Window overlaps an existing reservation", body = ErrorDto),
        (status = 422, description = "Malformed or past window", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let now = Utc::now();
    let service = ReservationService::new(&state.db);
    let reservation = service.create(&user, payload, now).await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/reservations - List every reservation
///
/// Full listing across all users and rooms, owner included.
///
/// # Authentication
/// Requires a superuser
///
/// # Returns
/// - `200 OK` - All reservations
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);
    let reservations = service.get_all(&user).await?;

    Ok((StatusCode::OK, Json(reservations)))
}

/// GET /api/reservations/my - List the caller's reservations
///
/// The response omits the owner field; every row belongs to the caller.
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK` - The caller's reservations
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/reservations/my",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved own reservations", body = Vec<MyReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);
    let reservations = service.get_mine(&user).await?;

    Ok((StatusCode::OK, Json(reservations)))
}

/// PATCH /api/reservations/{id} - Move a reservation
///
/// Changes the reserved window. Room and owner are immutable. The new
/// window passes the same validation as creation, excluding the
/// reservation itself from the conflict check.
///
/// # Authentication
/// Requires the owner or a superuser
///
/// # Returns
/// - `200 OK` - The updated reservation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is neither owner nor superuser
/// - `404 Not Found` - Unknown reservation
/// - `409 Conflict` - Window overlaps another reservation
/// - `422 Unprocessable Entity` - Malformed or past window
#[utoipa::path(
    patch,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Successfully updated reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not modify this reservation", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Window overlaps another reservation", body = ErrorDto),
        (status = 422, description = "Malformed or past window", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let now = Utc::now();
    let service = ReservationService::new(&state.db);
    let reservation = service.update(&user, id, payload, now).await?;

    Ok((StatusCode::OK, Json(reservation)))
}

/// DELETE /api/reservations/{id} - Cancel a reservation
///
/// Physically removes the reservation and echoes the removed record.
///
/// # Authentication
/// Requires the owner or a superuser
///
/// # Returns
/// - `200 OK` - The removed reservation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is neither owner nor superuser
/// - `404 Not Found` - Unknown reservation
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not cancel this reservation", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);
    let reservation = service.delete(&user, id).await?;

    Ok((StatusCode::OK, Json(reservation)))
}
