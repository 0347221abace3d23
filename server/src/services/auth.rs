//! Mock authentication.
//!
//! No credential store exists: any well-formed sign-in succeeds and returns
//! the fixed demo profile carrying the submitted email; sign-up echoes the
//! submitted name and email under a fresh timestamp id.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use marina::User;
use marina::validate::{self, SignUpErrors, SignUpForm};
use serde::{Deserialize, Serialize};

use super::latency::MockLatency;
use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Optional on the wire; omitted means the client already confirmed.
    #[serde(default)]
    pub confirm_password: Option<String>,
}

impl SignUpRequest {
    fn form(&self) -> SignUpForm {
        SignUpForm {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone().unwrap_or_else(|| self.password.clone()),
        }
    }
}

/// # Errors
///
/// Returns [`ApiError::InvalidCredentials`] when email or password fail
/// validation.
pub async fn sign_in(latency: &MockLatency, req: &SignInRequest) -> Result<User, ApiError> {
    latency.long().await;
    validate::check_sign_in(&req.email, &req.password)?;
    tracing::info!(email = %req.email.trim(), "mock sign-in");
    Ok(marina::mock::signed_in_user(req.email.trim()))
}

/// # Errors
///
/// Returns [`ApiError::InvalidSignUp`] naming the first invalid field.
pub async fn sign_up(latency: &MockLatency, req: &SignUpRequest, now_ms: i64) -> Result<User, ApiError> {
    latency.long().await;
    let errors = validate::check_sign_up(&req.form());
    if let Some(message) = first_sign_up_error(&errors) {
        return Err(ApiError::InvalidSignUp(message));
    }
    tracing::info!(email = %req.email.trim(), "mock sign-up");
    Ok(marina::mock::signed_up_user(now_ms.to_string(), req.email.trim(), req.name.trim()))
}

pub async fn sign_out(latency: &MockLatency) {
    latency.short().await;
    tracing::info!("mock sign-out");
}

fn first_sign_up_error(errors: &SignUpErrors) -> Option<String> {
    [
        ("name", &errors.name),
        ("email", &errors.email),
        ("password", &errors.password),
        ("confirmPassword", &errors.confirm_password),
    ]
    .into_iter()
    .find_map(|(field, err)| err.as_ref().map(|e| format!("{field}: {e}")))
}
