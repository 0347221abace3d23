use super::*;
use crate::error::api_error_to_status;
use crate::state::test_app_state;

fn draft_json(check_out: &str) -> ReservationDraft {
    serde_json::from_value(serde_json::json!({
        "userId": "user_123",
        "portId": "1",
        "spaceId": "space_1",
        "checkIn": "2024-08-10",
        "checkOut": check_out,
        "totalPrice": 187.0,
        "status": "pending",
        "guestCount": 3,
        "boatDetails": { "name": "Wanderer", "length": 38.0, "width": 11.0, "type": "Sailboat" },
        "paymentStatus": "pending"
    }))
    .unwrap()
}

#[tokio::test]
async fn list_for_user_returns_history() {
    let Json(list) = list_for_user(State(test_app_state()), Path("user_123".into())).await;
    let ids: Vec<_> = list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["res_001", "res_002", "res_003"]);
}

#[tokio::test]
async fn create_answers_201() {
    let (status, Json(reservation)) = create(State(test_app_state()), Json(draft_json("2024-08-12")))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reservation.boat_details.name, "Wanderer");
    assert!(!reservation.id.is_empty());
    assert!(reservation.created_at.ends_with('Z'));
}

#[tokio::test]
async fn create_with_reversed_dates_is_400() {
    let err = create(State(test_app_state()), Json(draft_json("2024-08-01")))
        .await
        .unwrap_err();
    assert_eq!(api_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cancel_echoes_id_as_json() {
    let Json(body) = cancel(State(test_app_state()), Path("res_003".into())).await;
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "id": "res_003" }));
}
