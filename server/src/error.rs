//! Errors raised by the mock API services.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use marina::validate::{AuthInputError, BookingError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("port not found: {0}")]
    PortNotFound(String),
    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[from] AuthInputError),
    #[error("invalid sign-up: {0}")]
    InvalidSignUp(String),
    #[error("invalid booking: {0}")]
    InvalidBooking(#[from] BookingError),
}

pub(crate) fn api_error_to_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::PortNotFound(_) => StatusCode::NOT_FOUND,
        ApiError::InvalidCredentials(_) | ApiError::InvalidSignUp(_) | ApiError::InvalidBooking(_) => {
            StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = api_error_to_status(&self);
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marina::pricing::DateError;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::PortNotFound("42".into());
        assert_eq!(api_error_to_status(&err), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "port not found: 42");
    }

    #[test]
    fn input_errors_map_to_400() {
        let auth: ApiError = AuthInputError::InvalidEmail.into();
        let booking: ApiError = BookingError::CheckIn(DateError::Missing).into();
        assert_eq!(api_error_to_status(&auth), StatusCode::BAD_REQUEST);
        assert_eq!(api_error_to_status(&booking), StatusCode::BAD_REQUEST);
        assert_eq!(
            api_error_to_status(&ApiError::InvalidSignUp("name".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn into_response_carries_status() {
        let response = ApiError::PortNotFound("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
