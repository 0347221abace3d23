//! REST API helpers for the mock server endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. A non-OK response surfaces the
//! server's `{"error": ...}` message when present, otherwise the status code.
//! Slices store the string and pages render it as a banner or notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use marina::{Port, PublicConfig, Reservation, ReservationDraft, User};

#[cfg(feature = "hydrate")]
use super::types::{CancelAck, SignInBody, SignUpBody};

#[cfg(any(test, feature = "hydrate"))]
fn port_endpoint(port_id: &str) -> String {
    format!("/api/ports/{port_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_reservations_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/reservations")
}

#[cfg(any(test, feature = "hydrate"))]
fn cancel_endpoint(reservation_id: &str) -> String {
    format!("/api/reservations/{reservation_id}/cancel")
}

/// Message for a failed request: the server's error text when the body
/// carries one, otherwise a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: Option<&str>) -> String {
    body.and_then(|b| serde_json::from_str::<super::types::ErrorBody>(b).ok())
        .map(|b| b.error)
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.ok();
        return Err(failure_message(status, body.as_deref()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

/// Fetch the full port catalog from `GET /api/ports`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_ports() -> Result<Vec<Port>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/ports").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one port from `GET /api/ports/{id}`.
///
/// # Errors
///
/// Returns the server message (`port not found: ...`) for unknown ids.
pub async fn fetch_port(port_id: &str) -> Result<Port, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&port_endpoint(port_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = port_id;
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns the server's validation message or a transport error.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignInBody { email: email.to_owned(), password: password.to_owned() };
        post_json("/api/auth/signin", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the server's validation message or a transport error.
pub async fn sign_up(name: &str, email: &str, password: &str, confirm_password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignUpBody {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        };
        post_json("/api/auth/signup", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password, confirm_password);
        Err("not available on server".to_owned())
    }
}

/// Sign out via `POST /api/auth/signout`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let _: serde_json::Value = post_json("/api/auth/signout", &serde_json::json!({})).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch reservation history from `GET /api/users/{id}/reservations`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_user_reservations(user_id: &str) -> Result<Vec<Reservation>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&user_reservations_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Book via `POST /api/reservations`.
///
/// # Errors
///
/// Returns the server's booking validation message or a transport error.
pub async fn create_reservation(draft: &ReservationDraft) -> Result<Reservation, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/reservations", draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Cancel via `POST /api/reservations/{id}/cancel`; returns the id the
/// server acknowledged.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn cancel_reservation(reservation_id: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let ack: CancelAck = post_json(&cancel_endpoint(reservation_id), &serde_json::json!({})).await?;
        Ok(ack.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = reservation_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch browser-visible configuration from `GET /api/config`.
/// Returns `None` on failure or on the server.
pub async fn fetch_public_config() -> Option<PublicConfig> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/config").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
