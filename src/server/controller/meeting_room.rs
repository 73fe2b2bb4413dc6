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
        meeting_room::{CreateMeetingRoomDto, MeetingRoomDto},
        reservation::ReservationDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{meeting_room::MeetingRoomService, reservation::ReservationService},
        state::AppState,
    },
};

pub static MEETING_ROOM_TAG: &str = "meeting_room";

/// GET /api/meeting-rooms - List all rooms
///
/// Public listing of every bookable room, ordered by name.
///
/// # Returns
/// - `200 OK` - All rooms
#[utoipa::path(
    get,
    path = "/api/meeting-rooms",
    tag = MEETING_ROOM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved meeting rooms", body = Vec<MeetingRoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meeting_rooms(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingRoomService::new(&state.db);
    let rooms = service.get_all().await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// POST /api/meeting-rooms - Create a room
///
/// # Authentication
/// Requires a superuser
///
/// # Returns
/// - `201 Created` - The created room
/// - `400 Bad Request` - Room name already taken
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
#[utoipa::path(
    post,
    path = "/api/meeting-rooms",
    tag = MEETING_ROOM_TAG,
    request_body = CreateMeetingRoomDto,
    responses(
        (status = 201, description = "Successfully created meeting room", body = MeetingRoomDto),
        (status = 400, description = "Room name already taken", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_meeting_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMeetingRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MeetingRoomService::new(&state.db);
    let room = service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/meeting-rooms/{id}/reservations - Room schedule
///
/// Public listing of the room's reservations that have not yet ended,
/// ordered by start. Display only; conflict checking happens on writes.
///
/// # Returns
/// - `200 OK` - Upcoming reservations for the room
/// - `404 Not Found` - Unknown meeting room
#[utoipa::path(
    get,
    path = "/api/meeting-rooms/{id}/reservations",
    tag = MEETING_ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Meeting room ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved room schedule", body = Vec<ReservationDto>),
        (status = 404, description = "Meeting room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_reservations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let service = ReservationService::new(&state.db);
    let reservations = service.get_future_for_room(id, now).await?;

    Ok((StatusCode::OK, Json(reservations)))
}
