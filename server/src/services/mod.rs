//! Domain services behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Route handlers talk to a [`DockApi`] so they stay focused on protocol
//! translation. The only implementation today is [`MockDockApi`], which
//! waits a fixed latency and answers from the catalog in `marina::mock`.
//! A real backend would slot in as another implementor without touching the
//! routes.

pub mod auth;
pub mod latency;
pub mod ports;
pub mod reservations;

use marina::{Port, Reservation, ReservationDraft, User};
use time::OffsetDateTime;

use crate::error::ApiError;
use auth::{SignInRequest, SignUpRequest};
use latency::MockLatency;

#[async_trait::async_trait]
pub trait DockApi: Send + Sync {
    async fn fetch_ports(&self) -> Vec<Port>;
    async fn fetch_port(&self, port_id: &str) -> Result<Port, ApiError>;
    async fn sign_in(&self, req: &SignInRequest) -> Result<User, ApiError>;
    async fn sign_up(&self, req: &SignUpRequest) -> Result<User, ApiError>;
    async fn sign_out(&self);
    async fn fetch_reservations(&self, user_id: &str) -> Vec<Reservation>;
    async fn create_reservation(&self, draft: ReservationDraft) -> Result<Reservation, ApiError>;
    async fn cancel_reservation(&self, reservation_id: String) -> String;
}

/// Stateless mock backend with simulated latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDockApi {
    latency: MockLatency,
}

impl MockDockApi {
    #[must_use]
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }
}

#[async_trait::async_trait]
impl DockApi for MockDockApi {
    async fn fetch_ports(&self) -> Vec<Port> {
        ports::fetch_ports(&self.latency).await
    }

    async fn fetch_port(&self, port_id: &str) -> Result<Port, ApiError> {
        ports::fetch_port(&self.latency, port_id).await
    }

    async fn sign_in(&self, req: &SignInRequest) -> Result<User, ApiError> {
        auth::sign_in(&self.latency, req).await
    }

    async fn sign_up(&self, req: &SignUpRequest) -> Result<User, ApiError> {
        let now_ms = reservations::unix_millis(OffsetDateTime::now_utc());
        auth::sign_up(&self.latency, req, now_ms).await
    }

    async fn sign_out(&self) {
        auth::sign_out(&self.latency).await;
    }

    async fn fetch_reservations(&self, user_id: &str) -> Vec<Reservation> {
        reservations::fetch_for_user(&self.latency, user_id).await
    }

    async fn create_reservation(&self, draft: ReservationDraft) -> Result<Reservation, ApiError> {
        reservations::create(&self.latency, draft, OffsetDateTime::now_utc()).await
    }

    async fn cancel_reservation(&self, reservation_id: String) -> String {
        reservations::cancel(&self.latency, reservation_id).await
    }
}
