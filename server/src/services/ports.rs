//! Port catalog lookups.

use marina::Port;

use super::latency::MockLatency;
use crate::error::ApiError;

/// The full catalog after the list-fetch delay.
pub async fn fetch_ports(latency: &MockLatency) -> Vec<Port> {
    latency.long().await;
    let ports = marina::mock::ports();
    tracing::debug!(count = ports.len(), "served port catalog");
    ports
}

/// One port by id after the lookup delay.
///
/// # Errors
///
/// Returns [`ApiError::PortNotFound`] for ids outside the catalog.
pub async fn fetch_port(latency: &MockLatency, port_id: &str) -> Result<Port, ApiError> {
    latency.short().await;
    marina::mock::port_by_id(port_id).ok_or_else(|| ApiError::PortNotFound(port_id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_ports_returns_catalog() {
        let ports = fetch_ports(&MockLatency::instant()).await;
        assert_eq!(ports.len(), 9);
    }

    #[tokio::test]
    async fn fetch_port_known_and_unknown() {
        let latency = MockLatency::instant();
        let port = fetch_port(&latency, "6").await.unwrap();
        assert_eq!(port.name, "Porto Cervo Marina");
        assert!(matches!(fetch_port(&latency, "99").await, Err(ApiError::PortNotFound(id)) if id == "99"));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_ports_waits_long_delay() {
        let start = tokio::time::Instant::now();
        let _ = fetch_ports(&MockLatency::default()).await;
        assert!(start.elapsed() >= super::super::latency::LONG_DELAY);
    }
}
