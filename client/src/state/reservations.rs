//! Reservation history and booking progress.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use marina::{Reservation, ReservationStatus};

pub const CREATE_FAILED: &str = "Failed to create reservation";
pub const FETCH_FAILED: &str = "Failed to fetch reservations";

#[derive(Clone, Debug, Default)]
pub struct ReservationsState {
    pub reservations: Vec<Reservation>,
    /// Most recently created reservation; drives the booking confirmation.
    pub current_reservation: Option<Reservation>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReservationsState {
    pub fn create_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Append exactly one reservation and make it current. An id already in
    /// the list is bumped to the next free integer string, or suffixed with
    /// `-N` when it is not numeric or no larger `u64` is free.
    pub fn create_fulfilled(&mut self, mut reservation: Reservation) {
        self.loading = false;
        reservation.id = self.unique_id(reservation.id);
        self.current_reservation = Some(reservation.clone());
        self.reservations.push(reservation);
    }

    pub fn create_rejected(&mut self, message: Option<String>) {
        self.loading = false;
        self.error = Some(or_default(message, CREATE_FAILED));
    }

    pub fn fetch_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the list wholesale.
    pub fn fetch_fulfilled(&mut self, reservations: Vec<Reservation>) {
        self.loading = false;
        self.reservations = reservations;
    }

    pub fn fetch_rejected(&mut self, message: Option<String>) {
        self.loading = false;
        self.error = Some(or_default(message, FETCH_FAILED));
    }

    /// Mark one reservation cancelled. Unknown ids are ignored.
    pub fn cancel_fulfilled(&mut self, reservation_id: &str) {
        if let Some(r) = self.reservations.iter_mut().find(|r| r.id == reservation_id) {
            r.status = ReservationStatus::Cancelled;
        }
    }

    pub fn set_current_reservation(&mut self, reservation: Option<Reservation>) {
        self.current_reservation = reservation;
    }

    pub fn clear_reservations(&mut self) {
        self.reservations.clear();
        self.current_reservation = None;
    }

    #[must_use]
    pub fn count_with_status(&self, status: ReservationStatus) -> usize {
        self.reservations.iter().filter(|r| r.status == status).count()
    }

    fn unique_id(&self, id: String) -> String {
        let taken = |candidate: &str| self.reservations.iter().any(|r| r.id == candidate);
        if !taken(&id) {
            return id;
        }
        if let Ok(mut n) = id.parse::<u64>() {
            while let Some(next) = n.checked_add(1) {
                n = next;
                let candidate = n.to_string();
                if !taken(&candidate) {
                    return candidate;
                }
            }
        }
        (1..)
            .map(|i| format!("{id}-{i}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or(id)
    }
}

fn or_default(message: Option<String>, default: &str) -> String {
    message.filter(|m| !m.is_empty()).unwrap_or_else(|| default.to_owned())
}
