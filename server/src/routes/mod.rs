//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the mock JSON API and stitches it with Leptos SSR
//! rendering under a single Axum router. API routes live under `/api`,
//! compiled client assets under `/pkg`, and every other path is rendered by
//! the Leptos app.

pub mod auth;
pub mod ports;
pub mod reservations;


use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use marina::PublicConfig;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Mock API routes consumed by the hydrated client.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/ports", get(ports::list_ports))
        .route("/api/ports/{id}", get(ports::get_port))
        .route("/api/auth/signin", post(auth::sign_in))
        .route("/api/auth/signup", post(auth::sign_up))
        .route("/api/auth/signout", post(auth::sign_out))
        .route("/api/users/{id}/reservations", get(reservations::list_for_user))
        .route("/api/reservations", post(reservations::create))
        .route("/api/reservations/{id}/cancel", post(reservations::cancel))
        .route("/api/config", get(public_config))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR for every page + compiled assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// `GET /api/config`: browser-safe configuration.
async fn public_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(state.public_config.as_ref().clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
