//! Mock sign-in, sign-up, and sign-out routes.
//!
//! No session is issued. The returned user is held by the client's auth
//! slice until sign-out or reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::response::Json;
use marina::User;

use crate::error::ApiError;
use crate::services::auth::{SignInRequest, SignUpRequest};
use crate::state::AppState;

/// `POST /api/auth/signin`
pub async fn sign_in(State(state): State<AppState>, Json(body): Json<SignInRequest>) -> Result<Json<User>, ApiError> {
    state.api.sign_in(&body).await.map(Json)
}

/// `POST /api/auth/signup`
pub async fn sign_up(State(state): State<AppState>, Json(body): Json<SignUpRequest>) -> Result<Json<User>, ApiError> {
    state.api.sign_up(&body).await.map(Json)
}

/// `POST /api/auth/signout`
pub async fn sign_out(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.api.sign_out().await;
    Json(serde_json::json!({ "ok": true }))
}
