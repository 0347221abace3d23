//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the dock API implementation and the client-visible slice of the
//! configuration. There is no per-session state on the server: signed-in
//! user and reservations live in the browser.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use marina::PublicConfig;

use crate::config::Config;
use crate::services::latency::MockLatency;
use crate::services::{DockApi, MockDockApi};

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn DockApi>,
    pub public_config: Arc<PublicConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn DockApi>, public_config: PublicConfig) -> Self {
        Self { api, public_config: Arc::new(public_config) }
    }

    /// State backed by the mock API, with latency scaled per config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let api = MockDockApi::new(MockLatency::scaled(config.mock_delay_scale));
        Self::new(Arc::new(api), config.public())
    }
}

/// Mock-backed state that answers without delay.
#[cfg(test)]
pub(crate) fn test_app_state() -> AppState {
    AppState::new(
        Arc::new(MockDockApi::new(MockLatency::instant())),
        PublicConfig { maps_api_key: None, payments_configured: false },
    )
}
