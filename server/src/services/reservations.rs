//! Mock reservation booking, history, and cancellation.
//!
//! Nothing is stored. Creation stamps the draft with an id and timestamps
//! and hands it back, history is the same fixed list for every user, and
//! cancellation only acknowledges the id. The client keeps the resulting
//! state in its reservations slice.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use marina::{Reservation, ReservationDraft};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::latency::MockLatency;
use crate::error::ApiError;

/// Validate and stamp a draft.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBooking`] for bad dates, an empty stay, no
/// guests, or a missing boat name.
pub async fn create(latency: &MockLatency, draft: ReservationDraft, now: OffsetDateTime) -> Result<Reservation, ApiError> {
    latency.long().await;
    marina::validate::check_booking(&draft)?;
    let id = unix_millis(now).to_string();
    let reservation = draft.into_reservation(id, &rfc3339(now));
    tracing::info!(
        id = %reservation.id,
        port_id = %reservation.port_id,
        check_in = %reservation.check_in,
        check_out = %reservation.check_out,
        "mock reservation created"
    );
    Ok(reservation)
}

/// Reservation history. The user id is accepted but not used to filter.
pub async fn fetch_for_user(latency: &MockLatency, user_id: &str) -> Vec<Reservation> {
    latency.short().await;
    tracing::debug!(%user_id, "served reservation history");
    marina::mock::reservations()
}

/// Acknowledge a cancellation by returning the id unchanged.
pub async fn cancel(latency: &MockLatency, reservation_id: String) -> String {
    latency.short().await;
    tracing::info!(id = %reservation_id, "mock reservation cancelled");
    reservation_id
}

pub(crate) fn unix_millis(now: OffsetDateTime) -> i64 {
    i64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

fn rfc3339(now: OffsetDateTime) -> String {
    now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string())
}
