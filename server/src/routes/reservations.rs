//! Reservation routes.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use marina::{Reservation, ReservationDraft};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub id: String,
}

/// `GET /api/users/:id/reservations`
pub async fn list_for_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Json<Vec<Reservation>> {
    Json(state.api.fetch_reservations(&user_id).await)
}

/// `POST /api/reservations`: 201 with the stamped reservation.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ReservationDraft>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let reservation = state.api.create_reservation(draft).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// `POST /api/reservations/:id/cancel`
pub async fn cancel(State(state): State<AppState>, Path(reservation_id): Path<String>) -> Json<CancelResponse> {
    let id = state.api.cancel_reservation(reservation_id).await;
    Json(CancelResponse { id })
}
