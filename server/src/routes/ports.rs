//! Port catalog routes.

#[cfg(test)]
#[path = "ports_test.rs"]
mod ports_test;

use axum::extract::{Path, State};
use axum::response::Json;
use marina::Port;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/ports`: the full catalog.
pub async fn list_ports(State(state): State<AppState>) -> Json<Vec<Port>> {
    Json(state.api.fetch_ports().await)
}

/// `GET /api/ports/:id`: one port, 404 when unknown.
pub async fn get_port(State(state): State<AppState>, Path(port_id): Path<String>) -> Result<Json<Port>, ApiError> {
    state.api.fetch_port(&port_id).await.map(Json)
}
