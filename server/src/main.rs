#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::Config::from_env();
    tracing::info!(
        mock_delay_scale = config.mock_delay_scale,
        maps = config.maps_api_key.is_some(),
        stripe_publishable = config.stripe_publishable_key.is_some(),
        stripe_secret = config.stripe_secret_key.is_some(),
        "configuration loaded"
    );
    if config.maps_api_key.is_none() {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set; map embed links disabled");
    }

    let state = state::AppState::from_config(&config);

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build app");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "docknow listening");
    axum::serve(listener, app).await.expect("server failed");
}
