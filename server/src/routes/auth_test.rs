use super::*;
use crate::error::api_error_to_status;
use crate::state::test_app_state;
use axum::http::StatusCode;

#[tokio::test]
async fn sign_in_returns_user_with_email() {
    let body = SignInRequest { email: "captain@example.com".into(), password: "anything".into() };
    let Json(user) = sign_in(State(test_app_state()), Json(body)).await.unwrap();
    assert_eq!(user.email, "captain@example.com");
}

#[tokio::test]
async fn sign_in_invalid_email_is_400() {
    let body = SignInRequest { email: "captain".into(), password: "anything".into() };
    let err = sign_in(State(test_app_state()), Json(body)).await.unwrap_err();
    assert_eq!(api_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sign_up_body_uses_camel_case() {
    let body: SignUpRequest = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","password":"longenough","confirmPassword":"longenough"}"#,
    )
    .unwrap();
    let Json(user) = sign_up(State(test_app_state()), Json(body)).await.unwrap();
    assert_eq!(user.name, "Ada");
    assert!(user.id.parse::<i64>().is_ok());
}

#[tokio::test]
async fn sign_up_short_password_is_400() {
    let body = SignUpRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "short".into(),
        confirm_password: None,
    };
    let err = sign_up(State(test_app_state()), Json(body)).await.unwrap_err();
    assert_eq!(api_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sign_out_acknowledges() {
    let Json(value) = sign_out(State(test_app_state())).await;
    assert_eq!(value["ok"], serde_json::Value::Bool(true));
}
