use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(port_endpoint("7"), "/api/ports/7");
    assert_eq!(user_reservations_endpoint("user_123"), "/api/users/user_123/reservations");
    assert_eq!(cancel_endpoint("res_002"), "/api/reservations/res_002/cancel");
}

#[test]
fn failure_message_prefers_server_error() {
    assert_eq!(failure_message(404, Some(r#"{"error":"port not found: 42"}"#)), "port not found: 42");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(500, None), "request failed: 500");
    assert_eq!(failure_message(502, Some("<html>bad gateway</html>")), "request failed: 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn helpers_are_stubbed_off_browser() {
    let config = block_on_ready(fetch_public_config());
    assert!(config.is_none());
    let ports = block_on_ready(fetch_ports());
    assert_eq!(ports.unwrap_err(), "not available on server");
}

/// Poll a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
