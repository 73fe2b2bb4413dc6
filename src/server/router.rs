use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{login, logout, me, register},
        meeting_room::{create_meeting_room, get_meeting_rooms, get_room_reservations},
        reservation::{
            create_reservation, delete_reservation, get_my_reservations, get_reservations,
            update_reservation,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reservations",
            post(create_reservation).get(get_reservations),
        )
        .route("/api/reservations/my", get(get_my_reservations))
        .route(
            "/api/reservations/{id}",
            patch(update_reservation).delete(delete_reservation),
        )
        .route(
            "/api/meeting-rooms",
            get(get_meeting_rooms).post(create_meeting_room),
        )
        .route(
            "/api/meeting-rooms/{id}/reservations",
            get(get_room_reservations),
        )
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
}
